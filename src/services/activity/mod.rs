// Activity service module
// Fetching and ordering of activities for the month grid

pub mod recurrence;

use std::cmp::Ordering;

use crate::models::activity::Activity;
use crate::services::api::{ApiClient, ApiError};

/// Where the month grid gets its activities from.
#[cfg_attr(test, mockall::automock)]
pub trait ActivitySource {
    /// Fetch the full activity collection.
    fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError>;
}

impl ActivitySource for ApiClient {
    fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError> {
        self.activities()
    }
}

/// Fixed in-memory collection, handy for offline rendering and tests.
impl ActivitySource for Vec<Activity> {
    fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError> {
        Ok(self.clone())
    }
}

/// Fetch activities and sort them for placement.
pub fn fetch_sorted(source: &dyn ActivitySource) -> Result<Vec<Activity>, ApiError> {
    let mut activities = source.fetch_activities()?;
    sort_activities(&mut activities);
    Ok(activities)
}

/// Sort by start date, then untimed before timed, then start time, then id.
///
/// Times that do not parse as `HH:MM[:SS]` go after the parseable ones on the
/// same day and are compared as plain strings.
pub fn sort_activities(activities: &mut [Activity]) {
    activities.sort_by(compare_activities);
}

pub fn compare_activities(a: &Activity, b: &Activity) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.is_timed().cmp(&b.is_timed()))
        .then_with(|| compare_times(a, b))
        .then_with(|| a.id.cmp(&b.id))
}

fn compare_times(a: &Activity, b: &Activity) -> Ordering {
    if !a.is_timed() || !b.is_timed() {
        return Ordering::Equal;
    }
    match (a.start_time(), b.start_time()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.time.cmp(&b.time),
    }
}
