// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.
use serde_derive::Serialize;

use crate::curse::model::{AddOnId, FileId};

/// Addresses a single addon (`GetAddOn`, `GetAddOnDescription`).
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct AddOn {
    id: AddOnId,
}

impl AddOn {
    pub fn new(id: AddOnId) -> Self {
        Self { id }
    }
}

/// Addresses the file listing of an addon (`GetAllFilesForAddOn`).
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct AddOnFiles {
    #[serde(rename = "addOnID")]
    add_on_id: AddOnId,
}

impl AddOnFiles {
    pub fn new(add_on_id: AddOnId) -> Self {
        Self { add_on_id }
    }
}

/// Addresses one file of an addon (`GetAddOnFile`, `GetChangeLog`).
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct FileOfAddOn {
    #[serde(rename = "addonID")]
    addon_id: AddOnId,
    #[serde(rename = "fileID")]
    file_id: FileId,
}

impl FileOfAddOn {
    pub fn new(addon_id: AddOnId, file_id: FileId) -> Self {
        Self { addon_id, file_id }
    }
}
