// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::curse::api::{CurseId, CurseName};

/// An identifier for an addon in the Curse catalogue.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct AddOnId(u32);

impl AddOnId {
    /// "Progressive Automation", the addon the walkthrough queries by default.
    pub const PROGRESSIVE_AUTOMATION: AddOnId = AddOnId(220_606);

    pub fn new(id: u32) -> Self {
        AddOnId(id)
    }

    /// Unwraps the value.
    pub fn take(self) -> u32 {
        self.0
    }
}

impl From<u32> for AddOnId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<AddOnId> for String {
    fn from(id: AddOnId) -> Self {
        id.0.to_string()
    }
}

impl fmt::Display for AddOnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An addon (a downloadable plugin or mod package).
///
/// Only the fields this client prints or follows up on are modelled; anything
/// else the service returns is ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddOn {
    id: AddOnId,
    name: String,
    #[serde(default)]
    summary: String,
    #[serde(rename = "WebSiteURL", default)]
    web_site_url: Option<String>,
    #[serde(default)]
    download_count: Option<f64>,
    #[serde(default)]
    game_id: Option<u32>,
}

impl CurseId for AddOn {
    type Id = AddOnId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl CurseName for AddOn {
    fn name(&self) -> &String {
        &self.name
    }
}

impl AddOn {
    pub fn summary(&self) -> &String {
        &self.summary
    }

    pub fn web_site_url(&self) -> Option<&String> {
        self.web_site_url.as_ref()
    }

    pub fn download_count(&self) -> Option<f64> {
        self.download_count
    }

    pub fn game_id(&self) -> Option<u32> {
        self.game_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addon_ignores_fields_it_does_not_model() {
        let addon: AddOn = serde_json::from_str(
            r#"{
                "Id": 220606,
                "Name": "Progressive Automation",
                "Summary": "Automate all the things",
                "WebSiteURL": "https://minecraft.curseforge.com/projects/progressive-automation",
                "DownloadCount": 1234.0,
                "PrimaryCategoryId": 412,
                "Authors": [{ "Name": "Vanhal" }]
            }"#,
        )
        .unwrap();

        assert_eq!(addon.id(), &AddOnId::new(220_606));
        assert_eq!(addon.name(), "Progressive Automation");
        assert_eq!(addon.summary(), "Automate all the things");
        assert_eq!(addon.download_count(), Some(1234.0));
        assert!(addon.game_id().is_none());
    }
}
