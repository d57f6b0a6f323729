// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

use super::invoke;
use crate::curse::api::{request, response, Channel};
use crate::curse::model::{self, AddOnId, FileId};
use crate::curse::Result;

const CONTRACT: &str = "http://tempuri.org/IAddOnService";

/// A client of the Curse addon service.
///
/// Every operation requires an authenticated session, so `channel` is
/// normally the result of `attach`.
pub struct AddOnService<C> {
	channel: C,
}

impl<C: Channel> AddOnService<C> {
	/// Create an addon client sending its requests over `channel`.
	pub fn new(channel: C) -> Self {
		Self { channel }
	}

	pub fn channel(&self) -> &C {
		&self.channel
	}

	/// Get an addon's metadata.
	pub fn get_add_on(&self, id: AddOnId) -> Result<model::AddOn> {
		let addon: response::AddOn =
			invoke(&self.channel, CONTRACT, "GetAddOn", &request::AddOn::new(id))?;
		Ok(addon.take())
	}

	/// Get the long-form description of an addon.
	pub fn get_add_on_description(&self, id: AddOnId) -> Result<String> {
		let description: response::AddOnDescription = invoke(
			&self.channel,
			CONTRACT,
			"GetAddOnDescription",
			&request::AddOn::new(id),
		)?;
		Ok(description.take())
	}

	/// List every file available for an addon, in the order the service
	/// returns them.
	pub fn get_all_files_for_add_on(&self, id: AddOnId) -> Result<Vec<model::AddOnFile>> {
		let files: response::Files = invoke(
			&self.channel,
			CONTRACT,
			"GetAllFilesForAddOn",
			&request::AddOnFiles::new(id),
		)?;
		Ok(files.take())
	}

	/// Get a specific file of an addon. This includes files the website does
	/// not list.
	pub fn get_add_on_file(&self, addon_id: AddOnId, file_id: FileId) -> Result<model::AddOnFile> {
		let file: response::File = invoke(
			&self.channel,
			CONTRACT,
			"GetAddOnFile",
			&request::FileOfAddOn::new(addon_id, file_id),
		)?;
		Ok(file.take())
	}

	/// Get the changelog text of a file.
	pub fn get_change_log(&self, addon_id: AddOnId, file_id: FileId) -> Result<String> {
		let changelog: response::ChangeLog = invoke(
			&self.channel,
			CONTRACT,
			"GetChangeLog",
			&request::FileOfAddOn::new(addon_id, file_id),
		)?;
		Ok(changelog.take())
	}
}
