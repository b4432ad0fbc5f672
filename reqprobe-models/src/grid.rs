//! Browser grid status models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Versions of one browser as reported by the grid, keyed by version string
pub type BrowserVersions = BTreeMap<String, serde_json::Value>;

/// The grid status document.
///
/// `browsers` maps browser name to its versions; the per-version payload is
/// kept as raw JSON since the suite only asserts on key presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<i64>,
    #[serde(default)]
    pub browsers: BTreeMap<String, BrowserVersions>,
}

impl GridStatus {
    /// Versions reported for one browser, if the grid carries it
    pub fn browser(&self, name: &str) -> Option<&BrowserVersions> {
        self.browsers.get(name)
    }
}
