// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Objects exchanged with the Curse services.

mod account;
mod addon;
mod file;
mod security;

// Re-export
pub use self::account::{Credentials, Session, SessionToken, UserId};
pub use self::addon::{AddOn, AddOnId};
pub use self::file::{AddOnFile, FileId, ReleaseType};
pub use self::security::{AuthenticationStatus, AuthenticationToken};
