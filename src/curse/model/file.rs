// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::curse::api::{CurseId, CurseName};

/// An identifier for a single file of an addon.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct FileId(u32);

impl FileId {
    pub fn new(id: u32) -> Self {
        FileId(id)
    }

    /// Unwraps the value.
    pub fn take(self) -> u32 {
        self.0
    }
}

impl From<u32> for FileId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<FileId> for String {
    fn from(id: FileId) -> Self {
        id.0.to_string()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The maturity of a released file.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ReleaseType {
    Release,
    Beta,
    Alpha,
}

/// A downloadable file belonging to an addon.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddOnFile {
    id: FileId,
    file_date: String,
    file_name: String,
    #[serde(rename = "DownloadURL", default)]
    download_url: Option<String>,
    #[serde(default)]
    release_type: Option<ReleaseType>,
}

impl CurseId for AddOnFile {
    type Id = FileId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl CurseName for AddOnFile {
    fn name(&self) -> &String {
        &self.file_name
    }
}

impl AddOnFile {
    pub fn new<D: Into<String>, N: Into<String>>(id: FileId, file_date: D, file_name: N) -> Self {
        Self {
            id,
            file_date: file_date.into(),
            file_name: file_name.into(),
            download_url: None,
            release_type: None,
        }
    }

    /// The file date exactly as the service reported it.
    pub fn file_date(&self) -> &String {
        &self.file_date
    }

    pub fn file_name(&self) -> &String {
        &self.file_name
    }

    pub fn download_url(&self) -> Option<&String> {
        self.download_url.as_ref()
    }

    pub fn release_type(&self) -> Option<ReleaseType> {
        self.release_type
    }
}
