//! Appointment store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the mutation/read contract for the authoritative appointment list.
//! - Keep storage details out of planner and view code.
//!
//! # Invariants
//! - Every mutation is total: unknown ids are silent no-ops.
//! - Ids are unique for the lifetime of a store.

pub mod appointment_repo;
