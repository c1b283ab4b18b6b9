//! Quick-create draft for a new activity.
//!
//! A draft is what a day-cell click pre-fills and what `POST /api/activities`
//! receives. Validation mirrors the checks the create form runs before
//! submitting.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::recurrence::RecurrenceType;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActivityDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_all_day: bool,
    pub time: Option<String>,
    pub end_time: Option<String>,
    pub location_id: Option<i64>,
    pub category_ids: Vec<i64>,
    pub notes: String,
    pub is_recurring: bool,
    pub recurrence_type: Option<RecurrenceType>,
    pub recurrence_end_date: Option<NaiveDate>,
}

impl ActivityDraft {
    /// Empty draft pre-filled with the clicked day.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    /// Mark as all-day. All-day drafts never carry times.
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.is_all_day = all_day;
        if all_day {
            self.time = None;
            self.end_time = None;
        }
        self
    }

    pub fn recurring(mut self, recurrence_type: RecurrenceType, until: NaiveDate) -> Self {
        self.is_recurring = true;
        self.recurrence_type = Some(recurrence_type);
        self.recurrence_end_date = Some(until);
        self
    }

    /// Check the draft before it is submitted.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let Some(date) = self.date else {
            return Err(DraftError::MissingDate);
        };

        if self.is_recurring && (self.recurrence_type.is_none() || self.recurrence_end_date.is_none()) {
            return Err(DraftError::IncompleteRecurrence);
        }

        if self.end_date.is_some_and(|end| end < date) {
            return Err(DraftError::EndBeforeStart);
        }

        Ok(())
    }

    /// Copy of the draft as it goes over the wire: times are dropped for
    /// all-day drafts and recurrence fields for one-off drafts.
    pub fn normalized(&self) -> Self {
        let mut draft = self.clone();
        draft.title = draft.title.trim().to_string();
        if draft.is_all_day {
            draft.time = None;
            draft.end_time = None;
        }
        if !draft.is_recurring {
            draft.recurrence_type = None;
            draft.recurrence_end_date = None;
        }
        draft
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingTitle,
    MissingDate,
    EndBeforeStart,
    IncompleteRecurrence,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Activity title is required"),
            Self::MissingDate => write!(f, "Activity date is required"),
            Self::EndBeforeStart => write!(f, "End date cannot be before the start date"),
            Self::IncompleteRecurrence => {
                write!(f, "Recurring activities need a recurrence type and an end date")
            }
        }
    }
}

impl std::error::Error for DraftError {}
