//! Derived views over the appointment list.
//!
//! # Responsibility
//! - Priority filtering and canonical ordering.
//! - Date-range windowing, per-day lookup, today's agenda and stats.
//! - Calendar grid layout and date navigation.
//!
//! # Invariants
//! - Every function here is pure: no clock reads, no logging, no mutation of
//!   the input list.
//! - "Today" is always supplied by the caller.

pub mod calendar;
pub mod projection;
pub mod range;
