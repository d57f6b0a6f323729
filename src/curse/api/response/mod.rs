// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Client response types to the Curse services.
//!
//! Each reply body wraps its value in a `<Operation>Result` field; the types
//! here unwrap it.

mod addon;
mod login;

// Re-export
pub use self::addon::{AddOn, AddOnDescription, ChangeLog, File, Files};
pub use self::login::{Login, LoginResponse};
