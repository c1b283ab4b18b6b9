//! User-facing words used by the renderers.
//!
//! The grid itself never formats text for people; everything a reader sees
//! goes through a [`Labels`] value, so another language only needs another
//! value.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub month_names: [&'static str; 12],
    /// Short weekday names, Sunday first
    pub weekday_names: [&'static str; 7],
    pub all_day: &'static str,
    /// Shown for a missing location, time, category list or notes
    pub not_specified: &'static str,
    pub no_activities: &'static str,
    pub fetch_failed: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub categories: &'static str,
    pub notes: &'static str,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            month_names: [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ],
            weekday_names: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            all_day: "All day",
            not_specified: "Not specified",
            no_activities: "No activities this month",
            fetch_failed: "Could not load activities",
            title: "Title",
            date: "Date",
            time: "Time",
            location: "Location",
            categories: "Categories",
            notes: "Notes",
        }
    }
}

impl Labels {
    /// Month name for a zero-based month index.
    pub fn month_name(&self, month0: u32) -> &'static str {
        self.month_names[(month0 % 12) as usize]
    }

    /// Weekday headers in display order for a week starting on
    /// `first_day_of_week` (0 = Sunday).
    pub fn weekday_headers(&self, first_day_of_week: u8) -> Vec<&'static str> {
        let start = (first_day_of_week % 7) as usize;
        (0..7).map(|i| self.weekday_names[(start + i) % 7]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_headers_rotate() {
        let labels = Labels::default();
        assert_eq!(labels.weekday_headers(0)[0], "Sun");
        assert_eq!(
            labels.weekday_headers(1),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn test_month_name() {
        assert_eq!(Labels::default().month_name(5), "June");
    }
}
