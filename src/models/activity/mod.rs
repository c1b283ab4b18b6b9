// Activity module
// Activity model as served by GET /api/activities

mod draft;

pub use draft::{ActivityDraft, DraftError};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::category::{is_valid_hex_color, Category};
use crate::models::recurrence::RecurrenceType;

/// A calendar activity. Read-only for the month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    /// Start date, taken as-is with no time zone conversion
    pub date: NaiveDate,
    /// Inclusive end date; `None` means the activity fits in one day
    #[serde(default, deserialize_with = "optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_all_day: bool,
    #[serde(default, deserialize_with = "optional_text")]
    pub location: Option<String>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "categories")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_recurring: bool,
    #[serde(default, deserialize_with = "optional_recurrence")]
    pub recurrence_type: Option<RecurrenceType>,
    #[serde(default, deserialize_with = "optional_date")]
    pub recurrence_end_date: Option<NaiveDate>,
    /// Activity's own color, used when its first category has none
    #[serde(default, deserialize_with = "optional_text")]
    pub color: Option<String>,
}

impl Activity {
    /// Create a single-day, untimed activity.
    pub fn new(id: i64, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            end_date: None,
            time: None,
            end_time: None,
            is_all_day: false,
            location: None,
            location_id: None,
            notes: None,
            categories: Vec::new(),
            is_recurring: false,
            recurrence_type: None,
            recurrence_end_date: None,
            color: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn all_day(mut self) -> Self {
        self.is_all_day = true;
        self.time = None;
        self.end_time = None;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn recurring(mut self, recurrence_type: RecurrenceType, until: NaiveDate) -> Self {
        self.is_recurring = true;
        self.recurrence_type = Some(recurrence_type);
        self.recurrence_end_date = Some(until);
        self
    }

    /// Last day covered by the activity. An end date before the start date
    /// collapses to the start date.
    pub fn span_end(&self) -> NaiveDate {
        self.end_date.map_or(self.date, |end| end.max(self.date))
    }

    /// True when the activity covers more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        self.end_date.is_some_and(|end| end > self.date)
    }

    /// Whether the activity has a start time that should be shown and sorted on.
    pub fn is_timed(&self) -> bool {
        !self.is_all_day && self.time.is_some()
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.time.as_deref().and_then(parse_time_of_day)
    }

    /// Color to paint the activity with: the first category's color, then
    /// the activity's own valid hex color, then `default`.
    pub fn display_color<'a>(&'a self, default: &'a str) -> &'a str {
        self.categories
            .first()
            .and_then(Category::display_color)
            .or_else(|| {
                self.color
                    .as_deref()
                    .map(str::trim)
                    .filter(|color| is_valid_hex_color(color))
            })
            .unwrap_or(default)
    }

    /// Category names joined by a comma, in server order.
    pub fn category_names(&self) -> String {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Empty and whitespace-only strings are treated as absent.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_text(deserializer)? {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn optional_recurrence<'de, D>(deserializer: D) -> Result<Option<RecurrenceType>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_text(deserializer)? {
        Some(text) => serde_json::from_value(serde_json::Value::String(text.trim().to_lowercase()))
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Categories arrive either as `{id, name, color}` objects or as bare names.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Full(Category),
    Name(String),
}

fn categories<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<CategoryEntry>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            CategoryEntry::Full(category) => category,
            CategoryEntry::Name(name) => Category::named(name),
        })
        .collect())
}
