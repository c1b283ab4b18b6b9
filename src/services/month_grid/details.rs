use chrono::NaiveDate;

use crate::models::activity::Activity;

/// Time part of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRange {
    AllDay,
    /// Times as received; `start` is absent when the activity has no time
    Timed {
        start: Option<String>,
        end: Option<String>,
    },
}

/// Everything the detail view shows for one activity. Formatting and
/// placeholders are left to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDetails {
    pub activity_id: i64,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time: TimeRange,
    pub location: Option<String>,
    /// Category names joined by ", "
    pub categories: String,
    pub notes: Option<String>,
}

impl ActivityDetails {
    pub fn from_activity(activity: &Activity) -> Self {
        let time = if activity.is_all_day {
            TimeRange::AllDay
        } else {
            TimeRange::Timed {
                start: activity.time.clone(),
                end: activity.end_time.clone(),
            }
        };

        Self {
            activity_id: activity.id,
            title: activity.title.clone(),
            start_date: activity.date,
            end_date: activity.span_end(),
            time,
            location: activity.location.clone(),
            categories: activity.category_names(),
            notes: activity.notes.clone(),
        }
    }

    pub fn is_multi_day(&self) -> bool {
        self.end_date > self.start_date
    }
}
