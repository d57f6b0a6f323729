// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

use std::borrow::Borrow;
use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// A Curse login session token.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        SessionToken(token.into())
    }

    /// Unwraps the value.
    pub fn take(self) -> String {
        self.0
    }
}

impl Borrow<String> for SessionToken {
    fn borrow(&self) -> &String {
        &self.0
    }
}

impl Borrow<str> for SessionToken {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        SessionToken::new(token)
    }
}

impl<'a> From<&'a str> for SessionToken {
    fn from(token: &'a str) -> Self {
        SessionToken::new(token)
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}

/// The numeric identifier of a Curse user.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        UserId(id)
    }

    /// Unwraps the value.
    pub fn take(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated identity handed back by a successful login.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Session {
    #[serde(rename = "Token")]
    token: SessionToken,
    #[serde(rename = "UserID")]
    user_id: UserId,
}

impl Session {
    pub fn new<T: Into<SessionToken>>(token: T, user_id: UserId) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

/// A username and password pair, held only for the duration of a login call.
#[derive(Clone, Eq, PartialEq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// The password never shows up in logs or panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_deserializes_from_service_field_names() {
        let session: Session =
            serde_json::from_str(r#"{ "Token": "abc123", "UserID": 42 }"#).unwrap();

        assert_eq!(session.token(), &SessionToken::new("abc123"));
        assert_eq!(session.user_id(), UserId::new(42));
    }

    #[test]
    fn credentials_debug_output_hides_the_password() {
        let credentials = Credentials::new("alice", "correct");
        let printed = format!("{:?}", credentials);

        assert!(printed.contains("alice"));
        assert!(!printed.contains("correct"));
    }
}
