//! Category model for grouping activities.
//!
//! Categories come from `GET /api/categories` and are embedded in each
//! activity. The first category of an activity decides its display color.

use serde::{Deserialize, Serialize};

/// Color used when an activity has no category, or its category has no color.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6f42c1";

/// A category as served by the activity API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server identifier. Absent when the server only sent a name.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name of the category (unique on the server)
    pub name: String,
    /// Hex color code for the category (e.g., "#3B82F6")
    #[serde(default)]
    pub color: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: Some(color.into()),
        }
    }

    /// Create a category that only carries a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// The color to paint this category with, if it carries a usable one.
    pub fn display_color(&self) -> Option<&str> {
        self.color
            .as_deref()
            .map(str::trim)
            .filter(|color| is_valid_hex_color(color))
    }
}

/// `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
pub fn is_valid_hex_color(color: &str) -> bool {
    color
        .trim()
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
