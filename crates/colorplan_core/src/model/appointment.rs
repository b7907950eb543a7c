//! Appointment domain model.
//!
//! # Responsibility
//! - Define the canonical appointment record and its write-side shapes
//!   (`NewAppointment`, `AppointmentPatch`).
//! - Provide form-level validation helpers.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - No ordering is enforced between `time` and `end_time`; an inverted range
//!   is reported by `has_inverted_time_range` but still accepted.
//! - `recurrence` is stored as-is and never expanded into extra instances.

use crate::model::clock::{ClockTime, ClockTimeError};
use crate::model::priority::{Priority, RecurrenceType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier of an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Generates a fresh identifier that never collides with earlier ones.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AppointmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppointmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AppointmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One scheduled item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    /// Start time.
    pub time: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<ClockTime>,
    pub priority: Priority,
    #[serde(default)]
    pub recurrence: RecurrenceType,
    #[serde(default)]
    pub reminder: bool,
    #[serde(default)]
    pub completed: bool,
}

impl Appointment {
    /// Attaches an identifier to creation input.
    pub fn from_new(id: AppointmentId, new: NewAppointment) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            date: new.date,
            time: new.time,
            end_time: new.end_time,
            priority: new.priority,
            recurrence: new.recurrence,
            reminder: new.reminder,
            completed: new.completed,
        }
    }

    /// Returns true when `end_time` is set and earlier than `time`.
    pub fn has_inverted_time_range(&self) -> bool {
        self.end_time.is_some_and(|end| end < self.time)
    }

    /// Merges every set field of `patch` into this record.
    ///
    /// `id` is never touched.
    pub fn apply(&mut self, patch: AppointmentPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(recurrence) = patch.recurrence {
            self.recurrence = recurrence;
        }
        if let Some(reminder) = patch.reminder {
            self.reminder = reminder;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Creation input: every appointment field except `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: ClockTime,
    #[serde(default)]
    pub end_time: Option<ClockTime>,
    pub priority: Priority,
    #[serde(default)]
    pub recurrence: RecurrenceType,
    #[serde(default)]
    pub reminder: bool,
    #[serde(default)]
    pub completed: bool,
}

impl NewAppointment {
    /// Minimal appointment with optional fields left at their defaults.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        time: ClockTime,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            date,
            time,
            end_time: None,
            priority,
            recurrence: RecurrenceType::None,
            reminder: false,
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_end_time(mut self, end_time: ClockTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_recurrence(mut self, recurrence: RecurrenceType) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn with_reminder(mut self, reminder: bool) -> Self {
        self.reminder = reminder;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Form-level checks. The store itself never calls this.
    pub fn validate(&self) -> Result<(), AppointmentValidationError> {
        validate_title(&self.title)
    }
}

/// Partial update. `None` leaves a field untouched.
///
/// `description` and `end_time` use a nested option so callers can clear them
/// with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub time: Option<ClockTime>,
    pub end_time: Option<Option<ClockTime>>,
    pub priority: Option<Priority>,
    pub recurrence: Option<RecurrenceType>,
    pub reminder: Option<bool>,
    pub completed: Option<bool>,
}

impl AppointmentPatch {
    /// Patch that overwrites every editable field with `new`'s values.
    pub fn replace_with(new: NewAppointment) -> Self {
        Self {
            title: Some(new.title),
            description: Some(new.description),
            date: Some(new.date),
            time: Some(new.time),
            end_time: Some(new.end_time),
            priority: Some(new.priority),
            recurrence: Some(new.recurrence),
            reminder: Some(new.reminder),
            completed: Some(new.completed),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Form-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentValidationError {
    EmptyTitle,
    InvalidClockTime(ClockTimeError),
}

impl Display for AppointmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "appointment title cannot be empty"),
            Self::InvalidClockTime(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppointmentValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::InvalidClockTime(err) => Some(err),
        }
    }
}

impl From<ClockTimeError> for AppointmentValidationError {
    fn from(value: ClockTimeError) -> Self {
        Self::InvalidClockTime(value)
    }
}

pub(crate) fn validate_title(title: &str) -> Result<(), AppointmentValidationError> {
    if title.trim().is_empty() {
        return Err(AppointmentValidationError::EmptyTitle);
    }
    Ok(())
}
