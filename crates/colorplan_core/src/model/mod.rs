//! Domain model for appointment planning.
//!
//! # Responsibility
//! - Define canonical data structures used by store, views and planner.
//! - Keep enum-keyed presentation tables exhaustive.
//!
//! # Invariants
//! - Every appointment is identified by a stable `AppointmentId`.
//! - Start/end times are always zero-padded `HH:MM` values.

pub mod appointment;
pub mod clock;
pub mod priority;
