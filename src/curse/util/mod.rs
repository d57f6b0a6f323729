// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Curse library top-level utility code goes here.

pub mod futures;
