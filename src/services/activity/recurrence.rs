//! Expansion of recurring activities into instance spans.
//!
//! A recurring activity repeats its whole `date..=end_date` span at each
//! recurrence step. Steps are computed from the original start date until the
//! recurrence end date (compared on the instance start, inclusive); expansion
//! jumps straight to the steps near the visible window.

use chrono::NaiveDate;

use crate::models::activity::Activity;

/// Most instances walked for one window.
const MAX_INSTANCES: u32 = 20_000;

/// One repetition of an activity: first and last covered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl InstanceSpan {
    pub fn overlaps(&self, window_start: NaiveDate, window_end: NaiveDate) -> bool {
        self.start <= window_end && self.end >= window_start
    }
}

/// Instance spans of `activity` overlapping `window_start..=window_end`.
///
/// One-off activities (and recurring ones missing a type or an end date)
/// yield their own span if it overlaps.
pub fn instance_spans(
    activity: &Activity,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<InstanceSpan> {
    let base = InstanceSpan {
        start: activity.date,
        end: activity.span_end(),
    };

    let (recurrence_type, until) = match (
        activity.is_recurring,
        activity.recurrence_type,
        activity.recurrence_end_date,
    ) {
        (true, Some(recurrence_type), Some(until)) => (recurrence_type, until),
        (true, _, _) => {
            log::debug!(
                "Activity {} is marked recurring without type or end date; showing it once",
                activity.id
            );
            return [base].into_iter().filter(|s| s.overlaps(window_start, window_end)).collect();
        }
        _ => {
            return [base].into_iter().filter(|s| s.overlaps(window_start, window_end)).collect();
        }
    };

    let length = base.end - base.start;
    // Earliest start whose span can still reach the window
    let reach = window_start
        .checked_sub_signed(length)
        .unwrap_or(window_start);
    let first_step = recurrence_type.step_before(activity.date, reach);
    let mut spans = Vec::new();

    for step in first_step..first_step.saturating_add(MAX_INSTANCES) {
        let Some(start) = recurrence_type.nth_start(activity.date, step) else {
            return spans;
        };
        if start > until || start > window_end {
            return spans;
        }

        let span = InstanceSpan {
            start,
            end: start + length,
        };
        if span.overlaps(window_start, window_end) {
            spans.push(span);
        }
    }

    log::warn!(
        "Activity {} stopped after {} {} instances before reaching {}",
        activity.id,
        MAX_INSTANCES,
        recurrence_type,
        window_end
    );
    spans
}
