// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Client request types to the Curse services.

mod addon;
mod login;

// Re-export:
pub use self::addon::{AddOn, AddOnFiles, FileOfAddOn};
pub use self::login::Login;
