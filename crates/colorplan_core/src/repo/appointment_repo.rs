//! Appointment store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered appointment sequence for one process lifetime.
//! - Provide create/update/delete/toggle entry points.
//!
//! # Invariants
//! - New records are appended; insertion order is preserved.
//! - Each mutation touches at most one record.
//! - Mutations never fail; missing ids are reported as `false`.

use crate::model::appointment::{Appointment, AppointmentId, AppointmentPatch, NewAppointment};
use log::{debug, info, warn};

/// Store interface for appointment mutations and reads.
pub trait AppointmentRepository {
    fn create(&mut self, new: NewAppointment) -> Appointment;
    /// Returns whether a record matched `id`.
    fn update(&mut self, id: &AppointmentId, patch: AppointmentPatch) -> bool;
    /// Returns whether a record matched `id`.
    fn delete(&mut self, id: &AppointmentId) -> bool;
    /// Returns whether a record matched `id`.
    fn toggle_complete(&mut self, id: &AppointmentId) -> bool;
    fn get(&self, id: &AppointmentId) -> Option<&Appointment>;
    /// All records in insertion order.
    fn list(&self) -> &[Appointment];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Vector-backed store. Nothing is written outside the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Vec<Appointment>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from ready-made records, keeping their ids.
    ///
    /// Later duplicates of an already seen id are dropped so the uniqueness
    /// invariant holds from the start.
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        let mut store = Self::new();
        for appointment in appointments {
            if store.get(&appointment.id).is_some() {
                warn!(
                    "event=store_seed module=store status=skipped reason=duplicate_id id={}",
                    appointment.id
                );
                continue;
            }
            store.appointments.push(appointment);
        }
        store
    }

    fn position(&self, id: &AppointmentId) -> Option<usize> {
        self.appointments.iter().position(|apt| &apt.id == id)
    }

    fn fresh_id(&self) -> AppointmentId {
        loop {
            let id = AppointmentId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl AppointmentRepository for InMemoryAppointmentRepository {
    fn create(&mut self, new: NewAppointment) -> Appointment {
        let appointment = Appointment::from_new(self.fresh_id(), new);
        if appointment.has_inverted_time_range() {
            warn!(
                "event=appointment_create module=store status=accepted reason=end_before_start id={}",
                appointment.id
            );
        }
        info!(
            "event=appointment_create module=store status=ok id={} total={}",
            appointment.id,
            self.appointments.len() + 1
        );
        self.appointments.push(appointment.clone());
        appointment
    }

    fn update(&mut self, id: &AppointmentId, patch: AppointmentPatch) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=appointment_update module=store status=noop reason=not_found id={id}");
            return false;
        };

        let appointment = &mut self.appointments[index];
        appointment.apply(patch);
        if appointment.has_inverted_time_range() {
            warn!(
                "event=appointment_update module=store status=accepted reason=end_before_start id={id}"
            );
        }
        info!("event=appointment_update module=store status=ok id={id}");
        true
    }

    fn delete(&mut self, id: &AppointmentId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=appointment_delete module=store status=noop reason=not_found id={id}");
            return false;
        };

        self.appointments.remove(index);
        info!(
            "event=appointment_delete module=store status=ok id={id} total={}",
            self.appointments.len()
        );
        true
    }

    fn toggle_complete(&mut self, id: &AppointmentId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=appointment_toggle module=store status=noop reason=not_found id={id}");
            return false;
        };

        let appointment = &mut self.appointments[index];
        appointment.completed = !appointment.completed;
        info!(
            "event=appointment_toggle module=store status=ok id={id} completed={}",
            appointment.completed
        );
        true
    }

    fn get(&self, id: &AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|apt| &apt.id == id)
    }

    fn list(&self) -> &[Appointment] {
        &self.appointments
    }
}
