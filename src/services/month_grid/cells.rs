use chrono::{Datelike, NaiveDate};

use super::placement::Occurrence;
use super::GridError;
use crate::utils::date::{days_in_month, first_of_month, weekday_index};

/// One slot of the month grid: a day of the month, or a blank leading cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridCell {
    pub date: Option<NaiveDate>,
    pub all_day: Vec<Occurrence>,
    pub timed: Vec<Occurrence>,
}

impl GridCell {
    fn blank() -> Self {
        Self::default()
    }

    fn day(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Day of month, `None` for blank cells.
    pub fn day_of_month(&self) -> Option<u32> {
        self.date.map(|date| date.day())
    }

    pub fn is_blank(&self) -> bool {
        self.date.is_none()
    }

    /// All-day occurrences first, then timed ones, each in placement order.
    pub fn occurrences(&self) -> impl Iterator<Item = &Occurrence> {
        self.all_day.iter().chain(self.timed.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.all_day.is_empty() && self.timed.is_empty()
    }
}

/// Skeleton of a month: `leading` blank cells, then one cell per day.
#[derive(Debug, Clone)]
pub(super) struct Skeleton {
    pub leading: usize,
    pub cells: Vec<GridCell>,
}

/// Build the cells for `year` / zero-based `month0`.
///
/// The number of leading blanks is the column of the 1st in a week starting
/// on `first_day_of_week` (0 = Sunday).
pub(super) fn build_skeleton(
    year: i32,
    month0: u32,
    first_day_of_week: u8,
) -> Result<Skeleton, GridError> {
    let invalid = || GridError::InvalidMonth { year, month0 };
    let first = first_of_month(year, month0).ok_or_else(invalid)?;
    let day_count = days_in_month(year, month0).ok_or_else(invalid)?;
    let leading = weekday_index(first, first_day_of_week) as usize;

    let mut cells = Vec::with_capacity(leading + day_count as usize);
    cells.extend(std::iter::repeat_with(GridCell::blank).take(leading));
    cells.extend(
        first
            .iter_days()
            .take(day_count as usize)
            .map(GridCell::day),
    );

    Ok(Skeleton { leading, cells })
}
