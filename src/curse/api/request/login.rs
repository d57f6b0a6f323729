// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.
use serde_derive::Serialize;

use crate::curse::model::Credentials;

/// A `Login` request.
///
/// Deliberately not `Debug`: it borrows the password.
#[derive(Clone, Serialize)]
pub struct Login<'a> {
    request: LoginRequest<'a>,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl<'a> Login<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            request: LoginRequest {
                username: credentials.username(),
                password: credentials.password(),
            },
        }
    }
}
