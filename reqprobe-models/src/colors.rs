//! Colour catalog models

use crate::users::Support;
use serde::{Deserialize, Serialize};

/// A colour entry from the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantone_value: Option<String>,
}

/// Paged colour listing response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorsListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub data: Vec<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<Support>,
}

/// Single colour lookup response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleColorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<Support>,
}
