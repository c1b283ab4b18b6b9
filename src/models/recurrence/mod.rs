// Recurrence module
// Repetition type of a recurring activity

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// How often a recurring activity repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
    #[serde(alias = "yearly")]
    Annually,
}

impl RecurrenceType {
    /// Start date of the `step`-th repetition of an activity starting on `anchor`.
    ///
    /// Monthly and annual steps are always computed from the anchor, so a
    /// series starting on the 31st lands on the last day of shorter months
    /// without drifting afterwards.
    pub fn nth_start(&self, anchor: NaiveDate, step: u32) -> Option<NaiveDate> {
        match self {
            Self::Daily => anchor.checked_add_days(Days::new(u64::from(step))),
            Self::Weekly => anchor.checked_add_days(Days::new(u64::from(step) * 7)),
            Self::Monthly => anchor.checked_add_months(Months::new(step)),
            Self::Annually => anchor.checked_add_months(Months::new(step.checked_mul(12)?)),
        }
    }

    /// A step whose start is on or before `target` and at most one step
    /// short of the first start reaching it. Zero when `target` is not after
    /// `anchor`.
    pub fn step_before(&self, anchor: NaiveDate, target: NaiveDate) -> u32 {
        if target <= anchor {
            return 0;
        }
        let days = (target - anchor).num_days();
        let months = i64::from(target.year() - anchor.year()) * 12
            + i64::from(target.month0())
            - i64::from(anchor.month0());

        let step = match self {
            Self::Daily => days,
            Self::Weekly => days / 7,
            // The step landing in the target month may start after `target`
            Self::Monthly => months - 1,
            Self::Annually => months / 12 - 1,
        };
        u32::try_from(step.max(0)).unwrap_or(u32::MAX)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Annually => "annually",
        }
    }
}

impl std::fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
