// Test fixtures - reusable test data
// Provides consistent activities and payloads across all test files
#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Wednesday, June 5, 2024
    pub fn june_5_2024() -> NaiveDate {
        ymd(2024, 6, 5)
    }

    /// Thursday, Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample activities for testing
pub mod activities {
    use super::dates::ymd;
    use activity_calendar::models::activity::Activity;
    use activity_calendar::models::category::Category;
    use activity_calendar::models::recurrence::RecurrenceType;

    /// Single-day timed activity
    pub fn yoga() -> Activity {
        Activity::new(1, "Yoga", ymd(2024, 6, 5))
            .with_time("09:00")
            .with_end_time("10:00")
            .with_location("Salle commune")
            .with_category(Category::new("Sport", "#28a745"))
    }

    /// Activity crossing the May/June boundary
    pub fn spring_camp() -> Activity {
        Activity::new(10, "Spring camp", ymd(2024, 5, 30))
            .with_end_date(ymd(2024, 6, 2))
            .all_day()
    }

    /// Weekly club meeting through June
    pub fn weekly_club() -> Activity {
        Activity::new(20, "Club de lecture", ymd(2024, 6, 4))
            .with_time("14:00")
            .recurring(RecurrenceType::Weekly, ymd(2024, 6, 30))
    }

    pub fn multi_day(id: i64, start: (u32, u32), end: (u32, u32)) -> Activity {
        Activity::new(id, format!("Stay {}", id), ymd(2024, start.0, start.1))
            .with_end_date(ymd(2024, end.0, end.1))
    }
}

/// Raw payloads as the activity service sends them
pub mod payloads {
    pub const ACTIVITIES_JSON: &str = r##"[
        {
            "id": 1,
            "title": "Yoga",
            "date": "2024-06-05",
            "end_date": null,
            "time": "09:00",
            "end_time": "10:00",
            "is_all_day": false,
            "location": "Salle commune",
            "location_id": 3,
            "notes": "",
            "categories": [{"id": 2, "name": "Sport", "color": "#28a745"}],
            "is_recurring": false,
            "recurrence_type": "",
            "recurrence_end_date": null,
            "color": "#dc3545"
        },
        {
            "id": 2,
            "title": "Marché",
            "date": "2024-06-05",
            "time": "08:00",
            "is_all_day": null,
            "categories": ["Sorties"],
            "color": "#fd7e14"
        },
        {
            "id": 3,
            "title": "Festival",
            "date": "2024-06-14",
            "end_date": "2024-06-16",
            "is_all_day": true,
            "categories": []
        }
    ]"##;
}
