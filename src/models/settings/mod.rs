// Settings module
// Runtime configuration for the calendar client

use serde::{Deserialize, Serialize};

use crate::models::category::{is_valid_hex_color, DEFAULT_CATEGORY_COLOR};
use crate::utils::date::is_valid_date_format;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the activity service, e.g. `http://localhost:5000`
    pub api_base_url: String,
    /// 0 = Sunday, 1 = Monday, ...
    pub first_day_of_week: u8,
    /// Vertical offset of one multi-day lane
    pub lane_height: f32,
    /// Color for activities without a colored first category
    pub default_color: String,
    /// chrono format string for dates shown in the detail view
    pub date_format: String,
    pub request_timeout_secs: u64,
    /// Whether the viewer may open the quick-create form from a day cell
    pub can_edit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            first_day_of_week: 0, // Sunday
            lane_height: 24.0,
            default_color: DEFAULT_CATEGORY_COLOR.to_string(),
            date_format: "%Y-%m-%d".to_string(),
            request_timeout_secs: 20,
            can_edit: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!("API base URL must start with http:// or https:// (got '{}')", url));
        }

        if self.first_day_of_week > 6 {
            return Err("First day of week must be between 0 (Sunday) and 6 (Saturday)".to_string());
        }

        if !self.lane_height.is_finite() || self.lane_height <= 0.0 {
            return Err("Lane height must be a positive number".to_string());
        }

        if !is_valid_hex_color(&self.default_color) {
            return Err("Default color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        if !is_valid_date_format(&self.date_format) {
            return Err(format!("Date format '{}' is not a valid chrono format", self.date_format));
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be at least one second".to_string());
        }

        Ok(())
    }
}
