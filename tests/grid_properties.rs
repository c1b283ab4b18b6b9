// Property-based tests for month grid construction and placement
// Checks grid invariants over random months and activity sets

use std::collections::HashSet;

use activity_calendar::models::activity::Activity;
use activity_calendar::services::month_grid::{GridOptions, MonthGrid, Position};
use activity_calendar::utils::date::{days_in_month, first_of_month, weekday_index};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn activity_strategy() -> impl Strategy<Value = Activity> {
    // Start somewhere in May-July 2024, last 0-9 extra days
    (1i64..40, 0u64..90, 0u64..10, proptest::option::of(0u32..24)).prop_map(
        |(id, start_offset, length, hour)| {
            let base = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
            let start = base + Days::new(start_offset);
            let mut activity =
                Activity::new(id, format!("Activity {}", id), start).with_end_date(start + Days::new(length));
            if let Some(hour) = hour {
                activity = activity.with_time(format!("{:02}:00", hour));
            }
            activity
        },
    )
}

proptest! {
    /// Property: cells = weekday index of the 1st + days in month
    #[test]
    fn prop_cell_count(
        year in 1900..2100i32,
        month0 in 0..12u32,
        first_day_of_week in 0..7u8,
    ) {
        let options = GridOptions { first_day_of_week, ..GridOptions::default() };
        let grid = MonthGrid::empty(year, month0, &options).unwrap();

        let first = first_of_month(year, month0).unwrap();
        let expected = weekday_index(first, first_day_of_week) as usize
            + days_in_month(year, month0).unwrap() as usize;
        prop_assert_eq!(grid.cells().len(), expected);
        prop_assert!(grid.leading_blanks() < 7);
    }

    /// Property: no (activity, day) pair is placed twice, even across
    /// repeated placement calls with duplicate ids
    #[test]
    fn prop_no_duplicate_occurrences(activities in prop::collection::vec(activity_strategy(), 0..25)) {
        let mut grid = MonthGrid::build(2024, 5, &GridOptions::default(), Ok(activities.clone())).unwrap();
        grid.place(&activities);

        let mut seen = HashSet::new();
        for occurrence in grid.occurrences() {
            prop_assert!(seen.insert((occurrence.activity_id, occurrence.date)));
        }
    }

    /// Property: multi-day occurrences carry a lane, single days never do,
    /// and each activity keeps one lane for the whole month
    #[test]
    fn prop_lanes_follow_position(activities in prop::collection::vec(activity_strategy(), 0..25)) {
        let grid = MonthGrid::build(2024, 5, &GridOptions::default(), Ok(activities)).unwrap();

        for occurrence in grid.occurrences() {
            match occurrence.position {
                Position::Single => prop_assert_eq!(occurrence.lane, None),
                _ => {
                    prop_assert!(occurrence.lane.is_some());
                    prop_assert_eq!(occurrence.lane, grid.lane_of(occurrence.activity_id));
                }
            }
        }
    }
}
