//! Flutter-facing bindings for ColorPlan.

pub mod api;
