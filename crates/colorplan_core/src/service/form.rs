//! Appointment edit form state.
//!
//! # Responsibility
//! - Hold the open/closed state and the target of the create/edit form.
//! - Turn a submitted draft into store input.
//!
//! # Invariants
//! - A draft with a blank title is never submitted.
//! - An edit draft overwrites every editable field of its target.

use crate::model::appointment::{
    validate_title, Appointment, AppointmentId, AppointmentValidationError, NewAppointment,
};
use crate::model::clock::ClockTime;
use crate::model::priority::{Priority, RecurrenceType};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_START: ClockTime = match ClockTime::new(9, 0) {
    Some(time) => time,
    None => unreachable!(),
};
const DEFAULT_END: ClockTime = match ClockTime::new(10, 0) {
    Some(time) => time,
    None => unreachable!(),
};

/// Editable field values shown in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub title: String,
    /// Blank text means no description.
    pub description: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub end_time: Option<ClockTime>,
    pub priority: Priority,
    pub recurrence: RecurrenceType,
    pub reminder: bool,
    pub completed: bool,
}

impl AppointmentDraft {
    /// Blank draft: 09:00-10:00, medium priority, no repetition, no reminder.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date,
            time: DEFAULT_START,
            end_time: Some(DEFAULT_END),
            priority: Priority::Medium,
            recurrence: RecurrenceType::None,
            reminder: false,
            completed: false,
        }
    }

    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            title: appointment.title.clone(),
            description: appointment.description.clone().unwrap_or_default(),
            date: appointment.date,
            time: appointment.time,
            end_time: appointment.end_time,
            priority: appointment.priority,
            recurrence: appointment.recurrence,
            reminder: appointment.reminder,
            completed: appointment.completed,
        }
    }

    /// Validates the draft and converts it to store input.
    pub fn into_new_appointment(self) -> Result<NewAppointment, AppointmentValidationError> {
        validate_title(&self.title)?;
        let description = self.description.trim();
        Ok(NewAppointment {
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            date: self.date,
            time: self.time,
            end_time: self.end_time,
            priority: self.priority,
            recurrence: self.recurrence,
            reminder: self.reminder,
            completed: self.completed,
        })
    }
}

/// Open/closed state plus target of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Creating(AppointmentDraft),
    Editing {
        target: AppointmentId,
        draft: AppointmentDraft,
    },
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Initial field values of the open form.
    pub fn draft(&self) -> Option<&AppointmentDraft> {
        match self {
            Self::Closed => None,
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn target(&self) -> Option<&AppointmentId> {
        match self {
            Self::Editing { target, .. } => Some(target),
            _ => None,
        }
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Created(Appointment),
    /// `applied` is false when the target vanished while the form was open.
    Updated { id: AppointmentId, applied: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    NotOpen,
    Invalid(AppointmentValidationError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "appointment form is not open"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotOpen => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<AppointmentValidationError> for FormError {
    fn from(value: AppointmentValidationError) -> Self {
        Self::Invalid(value)
    }
}
