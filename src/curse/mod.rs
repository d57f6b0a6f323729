// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Curse library top-level definitions go in this module.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod types;
mod util;
pub mod walkthrough;

// Re-export
pub use crate::curse::config::{Config, Environment};
pub use crate::curse::types::{Error, ErrorKind, Future, Result};
