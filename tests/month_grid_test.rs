// Integration tests for month grid construction and placement
mod fixtures;

use activity_calendar::models::activity::Activity;
use activity_calendar::models::recurrence::RecurrenceType;
use activity_calendar::services::activity::ActivitySource;
use activity_calendar::services::api::ApiError;
use activity_calendar::services::calendar::{CalendarController, CalendarView};
use activity_calendar::services::month_grid::{GridOptions, LoadStatus, MonthGrid, Position};
use fixtures::activities;
use fixtures::dates::ymd;
use fixtures::payloads::ACTIVITIES_JSON;
use pretty_assertions::assert_eq;

struct FailingSource;

impl ActivitySource for FailingSource {
    fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError> {
        Err(ApiError::Rejected("service unavailable".to_string()))
    }
}

fn june(activities: Vec<Activity>) -> MonthGrid {
    MonthGrid::build(2024, 5, &GridOptions::default(), Ok(activities)).unwrap()
}

fn positions(grid: &MonthGrid, id: i64) -> Vec<(u32, Position)> {
    grid.occurrences()
        .filter(|o| o.activity_id == id)
        .map(|o| (chrono::Datelike::day(&o.date), o.position))
        .collect()
}

#[test]
fn test_cell_count_matches_first_weekday_plus_days() {
    // June 1, 2024 is a Saturday
    let grid = june(Vec::new());
    assert_eq!(grid.leading_blanks(), 6);
    assert_eq!(grid.cells().len(), 6 + 30);
}

#[test]
fn test_same_day_activity_is_single() {
    let grid = june(vec![activities::yoga()]);
    assert_eq!(positions(&grid, 1), vec![(5, Position::Single)]);
}

#[test]
fn test_end_date_equal_to_date_is_single() {
    let activity = Activity::new(5, "Visite", ymd(2024, 6, 12)).with_end_date(ymd(2024, 6, 12));
    let grid = june(vec![activity]);
    assert_eq!(positions(&grid, 5), vec![(12, Position::Single)]);
    assert_eq!(grid.lane_of(5), None);
}

#[test]
fn test_span_clipped_by_month_keeps_true_positions() {
    let grid = june(vec![activities::spring_camp()]);
    assert_eq!(
        positions(&grid, 10),
        vec![(1, Position::Middle), (2, Position::End)]
    );

    let may = MonthGrid::build(2024, 4, &GridOptions::default(), Ok(vec![activities::spring_camp()]))
        .unwrap();
    assert_eq!(
        positions(&may, 10),
        vec![(30, Position::Start), (31, Position::Middle)]
    );
}

#[test]
fn test_placing_twice_never_duplicates() {
    let mut grid = june(vec![activities::spring_camp(), activities::yoga()]);
    let before = grid.occurrence_count();

    let added = grid.place(&[activities::spring_camp(), activities::yoga()]);

    assert_eq!(added, 0);
    assert_eq!(grid.occurrence_count(), before);
    let june_1 = grid.cell(ymd(2024, 6, 1)).unwrap();
    assert_eq!(june_1.occurrences().count(), 1);
}

#[test]
fn test_lanes_are_never_reused() {
    let grid = june(vec![
        activities::multi_day(1, (6, 3), (6, 5)),
        activities::multi_day(2, (6, 4), (6, 6)),
        // Starts after activity 1 has ended
        activities::multi_day(3, (6, 10), (6, 12)),
    ]);

    assert_eq!(grid.lane_of(1), Some(0));
    assert_eq!(grid.lane_of(2), Some(1));
    assert_eq!(grid.lane_of(3), Some(2));
    assert_eq!(grid.lane_count(), 3);

    let offsets: Vec<f32> = grid
        .cell(ymd(2024, 6, 11))
        .unwrap()
        .occurrences()
        .map(|o| o.offset)
        .collect();
    assert_eq!(offsets, vec![48.0]);
}

#[test]
fn test_earlier_time_renders_first() {
    let grid = june(vec![
        Activity::new(1, "Late", ymd(2024, 6, 5)).with_time("09:00"),
        Activity::new(2, "Early", ymd(2024, 6, 5)).with_time("08:00"),
    ]);
    let ids: Vec<i64> = grid
        .cell(ymd(2024, 6, 5))
        .unwrap()
        .timed
        .iter()
        .map(|o| o.activity_id)
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_service_payload_is_placed() {
    let fetched: Vec<Activity> = serde_json::from_str(ACTIVITIES_JSON).unwrap();
    let grid = MonthGrid::load(2024, 5, &GridOptions::default(), &fetched).unwrap();

    assert_eq!(grid.status(), &LoadStatus::Loaded { count: 3 });
    let june_5 = grid.cell(ymd(2024, 6, 5)).unwrap();
    let ids: Vec<i64> = june_5.timed.iter().map(|o| o.activity_id).collect();
    assert_eq!(ids, vec![2, 1]);
    // Category color wins over the activity's own color
    assert_eq!(june_5.timed[1].color, "#28a745");
    // Bare category names leave the activity's own color
    assert_eq!(june_5.timed[0].color, "#fd7e14");
    // Neither: default
    assert_eq!(grid.cell(ymd(2024, 6, 14)).unwrap().all_day[0].color, "#6f42c1");

    let festival: Vec<Position> = grid
        .occurrences()
        .filter(|o| o.activity_id == 3)
        .map(|o| o.position)
        .collect();
    assert_eq!(festival, vec![Position::Start, Position::Middle, Position::End]);
    assert!(grid.cell(ymd(2024, 6, 15)).unwrap().timed.is_empty());
}

#[test]
fn test_fetch_failure_renders_nothing() {
    let grid = MonthGrid::load(2024, 5, &GridOptions::default(), &FailingSource).unwrap();
    assert!(grid.status().is_failed());
    assert_eq!(grid.occurrence_count(), 0);
    assert_eq!(grid.cells().len(), 36);
}

#[test]
fn test_no_activities_is_not_a_failure() {
    let grid = MonthGrid::load(2024, 5, &GridOptions::default(), &Vec::<Activity>::new()).unwrap();
    assert_eq!(grid.status(), &LoadStatus::Loaded { count: 0 });
}

#[test]
fn test_weekly_recurrence_fills_the_month() {
    let grid = june(vec![activities::weekly_club()]);
    let days: Vec<(u32, Position)> = positions(&grid, 20);
    assert_eq!(
        days,
        vec![
            (4, Position::Single),
            (11, Position::Single),
            (18, Position::Single),
            (25, Position::Single),
        ]
    );
    assert!(grid
        .occurrences()
        .all(|o| o.time.as_deref() == Some("14:00")));
}

#[test]
fn test_decades_long_daily_series_fills_a_distant_month() {
    let walk = Activity::new(30, "Daily walk", ymd(1990, 1, 1))
        .recurring(RecurrenceType::Daily, ymd(2100, 12, 31));
    let grid = MonthGrid::build(2050, 5, &GridOptions::default(), Ok(vec![walk])).unwrap();

    assert_eq!(grid.occurrence_count(), 30);
    assert!(grid.cells().iter().filter(|cell| !cell.is_blank()).all(|cell| cell.timed.len() == 1));
}

#[test]
fn test_monday_start_shifts_leading_blanks() {
    let options = GridOptions {
        first_day_of_week: 1,
        ..GridOptions::default()
    };
    let grid = MonthGrid::build(2024, 1, &options, Ok(vec![])).unwrap();
    // February 1, 2024 is a Thursday
    assert_eq!(grid.leading_blanks(), 3);
    assert_eq!(grid.cells().len(), 3 + 29);
    assert!(grid.cell(fixtures::dates::leap_day_2024()).is_some());
}

#[test]
fn test_controller_navigation_rebuilds_grid() {
    let source = vec![activities::spring_camp(), activities::yoga()];
    let view = CalendarView::new(2024, 5).unwrap();
    let mut controller = CalendarController::new(source, GridOptions::default(), view);

    let june_count = controller.refresh().unwrap().occurrence_count();
    assert_eq!(june_count, 3);

    let may = controller.show_previous().unwrap();
    assert_eq!((may.year(), may.month0()), (2024, 4));
    assert_eq!(may.occurrence_count(), 2);
    assert_eq!(controller.view().to_string(), "2024-05");
}

#[test]
fn test_stale_build_is_discarded() {
    let view = CalendarView::new(2024, 5).unwrap();
    let mut controller = CalendarController::new(Vec::<Activity>::new(), GridOptions::default(), view);

    let stale = controller.begin_build(view);
    let current = controller.begin_build(view.next());

    assert!(!controller.complete(stale, Ok(vec![activities::yoga()])).unwrap());
    assert!(controller.grid().is_none());

    assert!(controller.complete(current, Ok(Vec::new())).unwrap());
    assert_eq!(controller.grid().unwrap().month0(), 6);
}
