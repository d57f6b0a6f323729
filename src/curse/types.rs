// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Library-wide type definitions.

use futures;

pub use crate::curse::error::{Error, ErrorKind, Result};

/// A boxed `futures::Future` resolving to a `curse::error::Result`
pub type Future<T> = Box<dyn futures::Future<Output = Result<T>> + Send + Unpin>;
