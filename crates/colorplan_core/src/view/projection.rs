//! Filtered, ordered and date-bucketed projections of the appointment list.
//!
//! # Invariants
//! - Canonical order is `date ASC, time ASC`; the sort is stable, so equal
//!   keys keep insertion order.
//! - Projections borrow from the store; nothing is cloned.
//! - `AgendaStats::completed + AgendaStats::upcoming == AgendaStats::total`.

use crate::model::appointment::Appointment;
use crate::model::priority::{Priority, PriorityFilter};
use crate::view::range::DateRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering used by every list the planner exposes.
pub fn canonical_order(a: &Appointment, b: &Appointment) -> Ordering {
    a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time))
}

/// Stable in-place sort by `canonical_order`.
pub fn sort_canonical(appointments: &mut [&Appointment]) {
    appointments.sort_by(|a, b| canonical_order(a, b));
}

/// Applies `filter` then sorts canonically.
pub fn filter_and_sort(appointments: &[Appointment], filter: PriorityFilter) -> Vec<&Appointment> {
    let mut filtered: Vec<&Appointment> = appointments
        .iter()
        .filter(|apt| filter.matches(apt.priority))
        .collect();
    sort_canonical(&mut filtered);
    filtered
}

/// Keeps appointments dated inside `range`.
pub fn within_range<'a>(appointments: &[&'a Appointment], range: &DateRange) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .copied()
        .filter(|apt| range.contains(apt.date))
        .collect()
}

/// Keeps appointments dated on `date`.
pub fn on_date<'a>(appointments: &[&'a Appointment], date: NaiveDate) -> Vec<&'a Appointment> {
    within_range(appointments, &DateRange::single_day(date))
}

/// Today's agenda: per-day lookup at the caller-supplied `today`.
pub fn today_agenda<'a>(appointments: &[&'a Appointment], today: NaiveDate) -> Vec<&'a Appointment> {
    on_date(appointments, today)
}

/// Aggregate counts over an agenda.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaStats {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    /// High-priority appointments not yet completed.
    pub high_priority: usize,
}

impl AgendaStats {
    pub fn from_agenda<'a>(agenda: impl IntoIterator<Item = &'a Appointment>) -> Self {
        agenda
            .into_iter()
            .fold(Self::default(), |mut stats, apt| {
                stats.total += 1;
                if apt.completed {
                    stats.completed += 1;
                } else {
                    stats.upcoming += 1;
                    if apt.priority == Priority::High {
                        stats.high_priority += 1;
                    }
                }
                stats
            })
    }
}
