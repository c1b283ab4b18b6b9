//! Month navigation and build bookkeeping.
//!
//! [`CalendarView`] is the displayed (year, month) pair, passed around by
//! value. [`CalendarController`] owns the current view and the last accepted
//! grid. Every build is tagged with a generation number: when two builds are
//! in flight (quick prev/next clicks with a slow fetch), only the result of
//! the latest one is kept.

use chrono::{Datelike, NaiveDate};

use crate::models::activity::Activity;
use crate::services::activity::{fetch_sorted, ActivitySource};
use crate::services::api::ApiError;
use crate::services::month_grid::{GridError, GridOptions, MonthGrid};
use crate::utils::date::shift_month;

/// The displayed month. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
}

impl CalendarView {
    pub fn new(year: i32, month: u32) -> Result<Self, GridError> {
        if month > 11 {
            return Err(GridError::InvalidMonth { year, month0: month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn shifted(&self, months: i32) -> Self {
        let (year, month) = shift_month(self.year, self.month, months);
        Self { year, month }
    }

    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    pub fn previous(&self) -> Self {
        self.shifted(-1)
    }
}

impl std::fmt::Display for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month + 1)
    }
}

/// Handle for one build. Only the ticket of the latest build is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTicket {
    pub generation: u64,
    pub view: CalendarView,
}

pub struct CalendarController<S: ActivitySource> {
    source: S,
    options: GridOptions,
    view: CalendarView,
    generation: u64,
    grid: Option<MonthGrid>,
}

impl<S: ActivitySource> CalendarController<S> {
    pub fn new(source: S, options: GridOptions, view: CalendarView) -> Self {
        Self {
            source,
            options,
            view,
            generation: 0,
            grid: None,
        }
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    /// The last accepted grid, if any build has completed.
    pub fn grid(&self) -> Option<&MonthGrid> {
        self.grid.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Switch to `view` and start a build for it. Any build started earlier
    /// becomes stale.
    pub fn begin_build(&mut self, view: CalendarView) -> BuildTicket {
        self.generation += 1;
        self.view = view;
        BuildTicket {
            generation: self.generation,
            view,
        }
    }

    /// Finish a build with the result of its fetch. Returns `Ok(true)` when
    /// the grid was accepted, `Ok(false)` when the ticket was stale and the
    /// result was dropped.
    pub fn complete(
        &mut self,
        ticket: BuildTicket,
        fetched: Result<Vec<Activity>, ApiError>,
    ) -> Result<bool, GridError> {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale build {} for {} (current build {})",
                ticket.generation,
                ticket.view,
                self.generation
            );
            return Ok(false);
        }

        let grid = MonthGrid::build(ticket.view.year, ticket.view.month, &self.options, fetched)?;
        self.grid = Some(grid);
        Ok(true)
    }

    /// Rebuild the current month.
    pub fn refresh(&mut self) -> Result<&MonthGrid, GridError> {
        self.show(self.view)
    }

    pub fn show_next(&mut self) -> Result<&MonthGrid, GridError> {
        self.show(self.view.next())
    }

    pub fn show_previous(&mut self) -> Result<&MonthGrid, GridError> {
        self.show(self.view.previous())
    }

    /// Begin, fetch and complete a build for `view`.
    pub fn show(&mut self, view: CalendarView) -> Result<&MonthGrid, GridError> {
        // Synchronous, so no other build can start meanwhile. The view only
        // moves once its grid exists.
        let fetched = fetch_sorted(&self.source);
        let grid = MonthGrid::build(view.year, view.month, &self.options, fetched)?;
        self.begin_build(view);
        Ok(&*self.grid.insert(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::activity::MockActivitySource;
    use crate::services::month_grid::LoadStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_view_navigation_wraps_years() {
        let view = CalendarView::new(2024, 11).unwrap();
        assert_eq!(view.next(), CalendarView { year: 2025, month: 0 });
        assert_eq!(view.next().previous(), view);
        assert_eq!(CalendarView::new(2024, 0).unwrap().previous(), CalendarView { year: 2023, month: 11 });
    }

    #[test]
    fn test_view_rejects_bad_month() {
        assert!(CalendarView::new(2024, 12).is_err());
    }

    #[test]
    fn test_view_display() {
        assert_eq!(CalendarView::containing(date(2024, 6, 17)).to_string(), "2024-06");
    }

    #[test]
    fn test_navigation_fetches_every_time() {
        let mut source = MockActivitySource::new();
        source
            .expect_fetch_activities()
            .times(3)
            .returning(|| Ok(vec![Activity::new(1, "Yoga", date(2024, 7, 3))]));

        let mut controller =
            CalendarController::new(source, GridOptions::default(), CalendarView::new(2024, 5).unwrap());

        assert_eq!(controller.refresh().unwrap().occurrence_count(), 0);
        assert_eq!(controller.show_next().unwrap().occurrence_count(), 1);
        assert_eq!(controller.view(), CalendarView::new(2024, 6).unwrap());
        assert_eq!(controller.show_previous().unwrap().month0(), 5);
        assert_eq!(controller.generation(), 3);
    }

    #[test]
    fn test_stale_build_is_discarded() {
        let source = MockActivitySource::new();
        let june = CalendarView::new(2024, 5).unwrap();
        let mut controller = CalendarController::new(source, GridOptions::default(), june);

        let slow = controller.begin_build(june);
        let fast = controller.begin_build(june.next());

        let accepted = controller
            .complete(fast, Ok(vec![Activity::new(2, "July", date(2024, 7, 2))]))
            .unwrap();
        assert!(accepted);

        let accepted = controller
            .complete(slow, Ok(vec![Activity::new(1, "June", date(2024, 6, 2))]))
            .unwrap();
        assert!(!accepted);

        let grid = controller.grid().unwrap();
        assert_eq!(grid.month0(), 6);
        assert!(grid.activity(2).is_some());
        assert!(grid.activity(1).is_none());
    }

    #[test]
    fn test_failed_build_keeps_current_view() {
        let mut source = MockActivitySource::new();
        source.expect_fetch_activities().returning(|| Ok(Vec::new()));

        let june = CalendarView::new(2024, 5).unwrap();
        let mut controller = CalendarController::new(source, GridOptions::default(), june);
        controller.refresh().unwrap();

        // Far outside the representable date range
        let unreachable = CalendarView { year: 1_000_000, month: 0 };
        assert!(controller.show(unreachable).is_err());

        assert_eq!(controller.view(), june);
        assert_eq!(controller.generation(), 1);
        assert_eq!(controller.grid().unwrap().month0(), 5);
    }

    #[test]
    fn test_failed_fetch_keeps_controller_usable() {
        let mut source = MockActivitySource::new();
        source
            .expect_fetch_activities()
            .returning(|| Err(ApiError::Rejected("unavailable".to_string())));

        let mut controller =
            CalendarController::new(source, GridOptions::default(), CalendarView::new(2024, 5).unwrap());
        let grid = controller.refresh().unwrap();
        assert!(matches!(grid.status(), LoadStatus::FetchFailed { .. }));
        assert_eq!(grid.occurrence_count(), 0);
    }
}
