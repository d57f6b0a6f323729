// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.
use serde_derive::Deserialize;

use crate::curse::model::{self, AuthenticationStatus};

/// The outcome of a login call: a status and, on success, a session.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "Status")]
    status: AuthenticationStatus,
    #[serde(rename = "Session", default)]
    session: Option<model::Session>,
}

impl LoginResponse {
    pub fn status(&self) -> AuthenticationStatus {
        self.status
    }

    /// The session; only meaningful when the status is `Success`.
    pub fn session(&self) -> Option<&model::Session> {
        self.session.as_ref()
    }

    pub fn into_session(self) -> Option<model::Session> {
        self.session
    }
}

/// A reply wrapping a `LoginResponse`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Login {
    #[serde(rename = "LoginResult")]
    result: LoginResponse,
}

impl Login {
    pub fn take(self) -> LoginResponse {
        self.result
    }
}
