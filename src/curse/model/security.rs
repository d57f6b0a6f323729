// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::curse::model::{Session, SessionToken, UserId};

/// The outcome of a login attempt.
///
/// Only `Success` is accompanied by a session; every other value names the
/// reason the login service refused the credentials. Status names the client
/// does not recognize deserialize as `Unknown`.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String")]
pub enum AuthenticationStatus {
    Success,
    Unsuccessful,
    InvalidSession,
    InvalidCredentials,
    UnknownUsername,
    UnknownEmail,
    AccountLocked,
    SubscriptionExpired,
    ServiceError,
    Unknown,
}

impl AuthenticationStatus {
    pub fn is_success(self) -> bool {
        self == AuthenticationStatus::Success
    }

    fn as_str(self) -> &'static str {
        use self::AuthenticationStatus::*;
        match self {
            Success => "Success",
            Unsuccessful => "Unsuccessful",
            InvalidSession => "InvalidSession",
            InvalidCredentials => "InvalidCredentials",
            UnknownUsername => "UnknownUsername",
            UnknownEmail => "UnknownEmail",
            AccountLocked => "AccountLocked",
            SubscriptionExpired => "SubscriptionExpired",
            ServiceError => "ServiceError",
            Unknown => "Unknown",
        }
    }
}

impl From<String> for AuthenticationStatus {
    fn from(status: String) -> Self {
        use self::AuthenticationStatus::*;
        match status.as_str() {
            "Success" => Success,
            "Unsuccessful" => Unsuccessful,
            "InvalidSession" => InvalidSession,
            "InvalidCredentials" => InvalidCredentials,
            "UnknownUsername" => UnknownUsername,
            "UnknownEmail" => UnknownEmail,
            "AccountLocked" => AccountLocked,
            "SubscriptionExpired" => SubscriptionExpired,
            "ServiceError" => ServiceError,
            _ => Unknown,
        }
    }
}

impl fmt::Display for AuthenticationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The payload of the `AuthenticationToken` message header.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AuthenticationToken {
    #[serde(rename = "UserID")]
    user_id: UserId,
    #[serde(rename = "Token")]
    token: SessionToken,
    #[serde(rename = "ApiKey", default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

impl AuthenticationToken {
    pub fn new(user_id: UserId, token: SessionToken) -> Self {
        Self {
            user_id,
            token,
            api_key: None,
        }
    }

    pub fn with_api_key<S: Into<String>>(self, api_key: Option<S>) -> Self {
        Self {
            api_key: api_key.map(Into::into),
            ..self
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    pub fn api_key(&self) -> Option<&String> {
        self.api_key.as_ref()
    }
}

impl<'a> From<&'a Session> for AuthenticationToken {
    fn from(session: &'a Session) -> Self {
        AuthenticationToken::new(session.user_id(), session.token().clone())
    }
}
