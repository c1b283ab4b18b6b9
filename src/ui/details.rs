//! Text form of the activity detail view shown when an occurrence is clicked.

use crate::services::month_grid::{ActivityDetails, TimeRange};
use crate::ui::labels::Labels;
use crate::ui::utils::format_date;

/// Detail view fields, formatted and with placeholders filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub dates: String,
    pub time: String,
    pub location: String,
    pub categories: String,
    pub notes: String,
}

impl DetailView {
    pub fn new(details: &ActivityDetails, labels: &Labels, date_format: &str) -> Self {
        let dates = if details.is_multi_day() {
            format!(
                "{} - {}",
                format_date(details.start_date, date_format),
                format_date(details.end_date, date_format)
            )
        } else {
            format_date(details.start_date, date_format)
        };

        let time = match &details.time {
            TimeRange::AllDay => labels.all_day.to_string(),
            TimeRange::Timed {
                start: Some(start),
                end: Some(end),
            } => format!("{} - {}", start, end),
            TimeRange::Timed { start: Some(start), end: None } => start.clone(),
            TimeRange::Timed { start: None, .. } => labels.not_specified.to_string(),
        };

        let or_placeholder = |value: Option<&str>| {
            value
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(labels.not_specified)
                .to_string()
        };

        Self {
            title: details.title.clone(),
            dates,
            time,
            location: or_placeholder(details.location.as_deref()),
            categories: or_placeholder(Some(details.categories.as_str())),
            notes: or_placeholder(details.notes.as_deref()),
        }
    }

    /// Labelled lines, one field per line.
    pub fn to_text(&self, labels: &Labels) -> String {
        [
            (labels.title, &self.title),
            (labels.date, &self.dates),
            (labels.time, &self.time),
            (labels.location, &self.location),
            (labels.categories, &self.categories),
            (labels.notes, &self.notes),
        ]
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
    }
}
