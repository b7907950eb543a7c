//! Planner session and edit-form orchestration.
//!
//! # Responsibility
//! - Turn presentation-layer events into store mutations.
//! - Keep UI/FFI layers decoupled from store and projection details.

pub mod form;
pub mod planner;
