//! Core domain logic for ColorPlan.
//! This crate is the single source of truth for appointment invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod view;

pub use config::{ConfigError, PlannerConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::appointment::{
    Appointment, AppointmentId, AppointmentPatch, AppointmentValidationError, NewAppointment,
};
pub use model::clock::{ClockTime, ClockTimeError};
pub use model::priority::{
    ParseEnumError, Priority, PriorityFilter, PriorityStyle, RecurrenceType, ViewType,
};
pub use repo::appointment_repo::{AppointmentRepository, InMemoryAppointmentRepository};
pub use service::form::{AppointmentDraft, FormError, FormState, FormSubmission};
pub use service::planner::{Planner, ViewState};
pub use view::calendar::CalendarCell;
pub use view::projection::AgendaStats;
pub use view::range::{DateRange, NavigationDirection};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
