// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.
use serde_derive::Deserialize;

use crate::curse::model;

/// A reply wrapping a `model::AddOn`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddOn {
    #[serde(rename = "GetAddOnResult")]
    result: model::AddOn,
}

impl AddOn {
    pub fn take(self) -> model::AddOn {
        self.result
    }
}

/// A reply wrapping an addon's description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddOnDescription {
    #[serde(rename = "GetAddOnDescriptionResult", default)]
    result: String,
}

impl AddOnDescription {
    pub fn take(self) -> String {
        self.result
    }
}

/// A reply wrapping every file of an addon, in the order the service sent
/// them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Files {
    #[serde(rename = "GetAllFilesForAddOnResult", default)]
    result: Option<Vec<model::AddOnFile>>,
}

impl Files {
    /// The listed files; a missing or null listing is empty.
    pub fn take(self) -> Vec<model::AddOnFile> {
        self.result.unwrap_or_default()
    }
}

/// A reply wrapping a single `model::AddOnFile`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct File {
    #[serde(rename = "GetAddOnFileResult")]
    result: model::AddOnFile,
}

impl File {
    pub fn take(self) -> model::AddOnFile {
        self.result
    }
}

/// A reply wrapping a file's changelog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeLog {
    #[serde(rename = "GetChangeLogResult", default)]
    result: String,
}

impl ChangeLog {
    pub fn take(self) -> String {
        self.result
    }
}
