use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use super::cells::GridCell;
use super::lanes::LaneAllocator;
use crate::models::activity::Activity;
use crate::services::activity::recurrence::{instance_spans, InstanceSpan};
use crate::utils::date::days_inclusive;

/// Where a day sits inside an activity's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Single,
    Start,
    Middle,
    End,
}

impl Position {
    /// Position of `day` in `span`, measured against the full span even when
    /// its ends fall outside the displayed month.
    pub fn within(span: InstanceSpan, day: NaiveDate) -> Self {
        if span.end <= span.start {
            Self::Single
        } else if day == span.start {
            Self::Start
        } else if day == span.end {
            Self::End
        } else {
            Self::Middle
        }
    }

    pub fn is_multi_day(&self) -> bool {
        !matches!(self, Self::Single)
    }
}

/// One activity drawn on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub activity_id: i64,
    pub date: NaiveDate,
    pub position: Position,
    /// Shared by every day of a multi-day activity; `None` for single days
    pub lane: Option<usize>,
    /// `lane * lane_height`, zero for single days
    pub offset: f32,
    pub color: String,
    pub title: String,
    pub location: Option<String>,
    /// Start time, only shown on single-day timed occurrences
    pub time: Option<String>,
    pub is_all_day: bool,
}

/// Dedup and lane state for one grid build.
#[derive(Debug, Clone)]
pub(super) struct Placement {
    placed: HashSet<(i64, NaiveDate)>,
    lanes: LaneAllocator,
    default_color: String,
}

impl Placement {
    pub fn new(lane_height: f32, default_color: impl Into<String>) -> Self {
        Self {
            placed: HashSet::new(),
            lanes: LaneAllocator::new(lane_height),
            default_color: default_color.into(),
        }
    }

    pub fn lanes(&self) -> &LaneAllocator {
        &self.lanes
    }

    /// Place `activities` (already sorted) into the day cells of the month
    /// starting at `first`. `leading` is the number of blank cells before the
    /// 1st. Returns how many new occurrences were added.
    pub fn place(
        &mut self,
        cells: &mut [GridCell],
        leading: usize,
        first: NaiveDate,
        last: NaiveDate,
        activities: &[Activity],
    ) -> usize {
        let mut added = 0;

        for activity in activities {
            for span in instance_spans(activity, first, last) {
                let visible_start = span.start.max(first);
                let visible_end = span.end.min(last);

                for day in days_inclusive(visible_start, visible_end) {
                    let Some(cell) = cells.get_mut(leading + day.day0() as usize) else {
                        continue;
                    };

                    if !self.placed.insert((activity.id, day)) {
                        continue;
                    }

                    let occurrence = self.occurrence(activity, span, day);
                    if activity.is_all_day {
                        cell.all_day.push(occurrence);
                    } else {
                        cell.timed.push(occurrence);
                    }
                    added += 1;
                }
            }
        }

        added
    }

    fn occurrence(&mut self, activity: &Activity, span: InstanceSpan, day: NaiveDate) -> Occurrence {
        let position = Position::within(span, day);
        let lane = position
            .is_multi_day()
            .then(|| self.lanes.lane_for(activity.id));
        let offset = lane.map_or(0.0, |lane| self.lanes.offset(lane));

        let time = if position.is_multi_day() || !activity.is_timed() {
            None
        } else {
            activity.time.clone()
        };

        Occurrence {
            activity_id: activity.id,
            date: day,
            position,
            lane,
            offset,
            color: activity.display_color(&self.default_color).to_string(),
            title: activity.title.clone(),
            location: activity.location.clone(),
            time,
            is_all_day: activity.is_all_day,
        }
    }
}
