// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

use log::{info, warn};

use super::invoke;
use crate::curse::api::{request, response, Channel};
use crate::curse::model::{AuthenticationStatus, Credentials, Session};
use crate::curse::{Error, Result};

const CONTRACT: &str = "http://tempuri.org/IClientLoginService";

/// A client of the Curse login service.
pub struct LoginService<C> {
	channel: C,
}

impl<C: Channel> LoginService<C> {
	/// Create a login client sending its requests over `channel`.
	pub fn new(channel: C) -> Self {
		Self { channel }
	}

	/// Send the credentials to the login service and return its verdict as is.
	///
	/// A refused login is not an error here; see `authenticate`.
	pub fn login(&self, credentials: &Credentials) -> Result<response::LoginResponse> {
		let login: response::Login = invoke(
			&self.channel,
			CONTRACT,
			"Login",
			&request::Login::new(credentials),
		)?;
		Ok(login.take())
	}

	/// Log in to the Curse login service.
	///
	/// If successful, returns the session whose token authenticates every
	/// subsequent addon service call. Any status other than `Success` is an
	/// `AuthFailure` carrying that status.
	pub fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
		let response = self.login(credentials)?;
		match response.status() {
			AuthenticationStatus::Success => {
				let session = response.into_session().ok_or_else(|| {
					Error::unexpected_reply(
						format!("{}/Login", CONTRACT),
						"login succeeded without a session",
					)
				})?;
				info!("curse:login:user = {}", session.user_id());
				Ok(session)
			}
			status => {
				warn!("curse:login:status = {}", status);
				Err(Error::auth_failure(status))
			}
		}
	}
}
