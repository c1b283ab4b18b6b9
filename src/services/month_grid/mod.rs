//! Month grid construction and activity placement.
//!
//! A [`MonthGrid`] is the pure data behind a month view: the day cells, the
//! occurrences placed in their all-day and timed containers, and the lane of
//! every multi-day activity. It knows nothing about how it is drawn; see
//! `crate::ui` for the renderer.
//!
//! A grid is rebuilt from scratch for every navigation. Dedup and lane state
//! live inside the grid and die with it.

mod cells;
mod details;
mod lanes;
mod placement;

pub use cells::GridCell;
pub use details::{ActivityDetails, TimeRange};
pub use lanes::LaneAllocator;
pub use placement::{Occurrence, Position};

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

use crate::models::activity::{Activity, ActivityDraft};
use crate::models::category::DEFAULT_CATEGORY_COLOR;
use crate::models::settings::Settings;
use crate::services::activity::{fetch_sorted, sort_activities, ActivitySource};
use crate::services::api::ApiError;
use crate::utils::date::{days_in_month, first_of_month, is_in_month};
use placement::Placement;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("month index {month0} of year {year} is out of range")]
    InvalidMonth { year: i32, month0: u32 },
}

/// Outcome of the activity fetch behind a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch succeeded; `count` activities were received (possibly zero)
    Loaded { count: usize },
    /// Fetch failed; the grid is shown without activities
    FetchFailed { reason: String },
}

impl LoadStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}

/// Layout options taken from the settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub first_day_of_week: u8,
    pub lane_height: f32,
    pub default_color: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            first_day_of_week: 0,
            lane_height: 24.0,
            default_color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}

impl From<&Settings> for GridOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            first_day_of_week: settings.first_day_of_week,
            lane_height: settings.lane_height,
            default_color: settings.default_color.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    year: i32,
    month0: u32,
    first: NaiveDate,
    last: NaiveDate,
    leading: usize,
    cells: Vec<GridCell>,
    placement: Placement,
    activities: BTreeMap<i64, Activity>,
    status: LoadStatus,
}

impl MonthGrid {
    /// Grid with no activities placed yet.
    pub fn empty(year: i32, month0: u32, options: &GridOptions) -> Result<Self, GridError> {
        let skeleton = cells::build_skeleton(year, month0, options.first_day_of_week)?;
        let invalid = || GridError::InvalidMonth { year, month0 };
        let first = first_of_month(year, month0).ok_or_else(invalid)?;
        let last = days_in_month(year, month0)
            .and_then(|count| first.checked_add_days(Days::new(u64::from(count) - 1)))
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month0,
            first,
            last,
            leading: skeleton.leading,
            cells: skeleton.cells,
            placement: Placement::new(options.lane_height, options.default_color.clone()),
            activities: BTreeMap::new(),
            status: LoadStatus::Loaded { count: 0 },
        })
    }

    /// Build a grid from the result of an activity fetch. A failed fetch is
    /// logged and produces an empty grid marked [`LoadStatus::FetchFailed`].
    pub fn build(
        year: i32,
        month0: u32,
        options: &GridOptions,
        fetched: Result<Vec<Activity>, ApiError>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::empty(year, month0, options)?;

        match fetched {
            Ok(mut activities) => {
                sort_activities(&mut activities);
                grid.status = LoadStatus::Loaded {
                    count: activities.len(),
                };
                let placed = grid.place(&activities);
                log::info!(
                    "Built {}-{:02}: {} activities, {} occurrences, {} lanes",
                    year,
                    month0 + 1,
                    activities.len(),
                    placed,
                    grid.lane_count()
                );
            }
            Err(err) => {
                log::warn!(
                    "Failed to load activities for {}-{:02}: {}",
                    year,
                    month0 + 1,
                    err
                );
                grid.status = LoadStatus::FetchFailed {
                    reason: err.to_string(),
                };
            }
        }

        Ok(grid)
    }

    /// Fetch from `source` and build.
    pub fn load(
        year: i32,
        month0: u32,
        options: &GridOptions,
        source: &dyn ActivitySource,
    ) -> Result<Self, GridError> {
        Self::build(year, month0, options, fetch_sorted(source))
    }

    /// Place sorted activities into the grid. Calling this again with
    /// overlapping activities never duplicates an (activity, day) pair.
    /// Only activities with an occurrence in this month are kept for
    /// [`MonthGrid::details`]. Returns the number of new occurrences.
    pub fn place(&mut self, activities: &[Activity]) -> usize {
        let mut added = 0;
        for activity in activities {
            let placed = self.placement.place(
                &mut self.cells,
                self.leading,
                self.first,
                self.last,
                std::slice::from_ref(activity),
            );
            if placed > 0 {
                self.activities
                    .entry(activity.id)
                    .or_insert_with(|| activity.clone());
            }
            added += placed;
        }
        added
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// Number of blank cells before the 1st.
    pub fn leading_blanks(&self) -> usize {
        self.leading
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Cell of a day in this month.
    pub fn cell(&self, date: NaiveDate) -> Option<&GridCell> {
        if !is_in_month(date, self.year, self.month0) {
            return None;
        }
        self.cells.get(self.leading + date.day0() as usize)
    }

    pub fn occurrences(&self) -> impl Iterator<Item = &Occurrence> {
        self.cells.iter().flat_map(GridCell::occurrences)
    }

    pub fn occurrence_count(&self) -> usize {
        self.occurrences().count()
    }

    /// Lane of a multi-day activity, if it was placed in this grid.
    pub fn lane_of(&self, activity_id: i64) -> Option<usize> {
        self.placement.lanes().get(activity_id)
    }

    pub fn lane_count(&self) -> usize {
        self.placement.lanes().count()
    }

    pub fn activity(&self, activity_id: i64) -> Option<&Activity> {
        self.activities.get(&activity_id)
    }

    /// Detail view for a clicked occurrence.
    pub fn details(&self, activity_id: i64) -> Option<ActivityDetails> {
        self.activity(activity_id).map(ActivityDetails::from_activity)
    }

    /// Quick-create draft for a clicked day. Only editors get one, and only
    /// for days of this month.
    pub fn quick_create(&self, date: NaiveDate, can_edit: bool) -> Option<ActivityDraft> {
        if !can_edit || self.cell(date).is_none() {
            return None;
        }
        Some(ActivityDraft::for_date(date))
    }
}
