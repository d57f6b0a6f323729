// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

mod curse;

// Publicly re-export:
pub use crate::curse::api::{CurseId, CurseName};
pub use crate::curse::config::{Config, Environment};
pub use crate::curse::types::{Error, ErrorKind, Future, Result};
pub use crate::curse::{api, error, model, walkthrough};
