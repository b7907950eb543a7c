//! Planner session: appointment store plus view selection state.
//!
//! # Responsibility
//! - Own the store and the four pieces of view state (selected date, view
//!   type, priority filter, edit form).
//! - Route UI events to store mutations and expose recomputed projections.
//!
//! # Invariants
//! - View state fields are independent; changing one never resets another.
//! - Projections are recomputed from the store on every call.
//! - "Today" is always a caller-supplied date.

use crate::config::PlannerConfig;
use crate::model::appointment::{Appointment, AppointmentId, AppointmentPatch, NewAppointment};
use crate::model::priority::{PriorityFilter, ViewType};
use crate::repo::appointment_repo::{AppointmentRepository, InMemoryAppointmentRepository};
use crate::seed::sample_day;
use crate::service::form::{AppointmentDraft, FormError, FormState, FormSubmission};
use crate::view::calendar::{build_cells, CalendarCell};
use crate::view::projection::{filter_and_sort, on_date, today_agenda, within_range, AgendaStats};
use crate::view::range::{navigate, DateRange, NavigationDirection};
use chrono::{NaiveDate, Weekday};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Calendar selection state, excluding the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub selected_date: NaiveDate,
    pub view_type: ViewType,
    pub filter_priority: PriorityFilter,
}

impl ViewState {
    /// Initial state: `today`, week view, no filter.
    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            view_type: ViewType::default(),
            filter_priority: PriorityFilter::default(),
        }
    }
}

/// State container handed to the presentation layer.
pub struct Planner<R: AppointmentRepository = InMemoryAppointmentRepository> {
    repo: R,
    view: ViewState,
    week_start: Weekday,
    form: FormState,
}

impl Planner<InMemoryAppointmentRepository> {
    /// New in-memory session, seeded with the sample day unless disabled.
    pub fn new(config: &PlannerConfig, today: NaiveDate) -> Self {
        let mut repo = InMemoryAppointmentRepository::new();
        if config.seed_sample_data {
            for new in sample_day(today) {
                repo.create(new);
            }
        }
        info!(
            "event=planner_init module=planner status=ok seeded={} total={} week_start={}",
            config.seed_sample_data,
            repo.len(),
            config.week_start
        );
        Self::with_repository(repo, config, today)
    }
}

impl<R: AppointmentRepository> Planner<R> {
    /// Wraps an existing store.
    pub fn with_repository(repo: R, config: &PlannerConfig, today: NaiveDate) -> Self {
        Self {
            repo,
            view: ViewState::starting_on(today),
            week_start: config.week_start,
            form: FormState::Closed,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.view.selected_date
    }

    pub fn view_type(&self) -> ViewType {
        self.view.view_type
    }

    pub fn filter_priority(&self) -> PriorityFilter {
        self.view.filter_priority
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    // Store mutations.

    pub fn add_appointment(&mut self, new: NewAppointment) -> Appointment {
        self.repo.create(new)
    }

    /// Merges `patch` into `id`; silently ignored for unknown ids.
    pub fn update_appointment(&mut self, id: &AppointmentId, patch: AppointmentPatch) -> bool {
        self.repo.update(id, patch)
    }

    /// Removes `id`; silently ignored for unknown ids.
    pub fn delete_appointment(&mut self, id: &AppointmentId) -> bool {
        self.repo.delete(id)
    }

    /// Flips `completed` of `id`; silently ignored for unknown ids.
    pub fn toggle_complete(&mut self, id: &AppointmentId) -> bool {
        self.repo.toggle_complete(id)
    }

    // View state.

    pub fn select_date(&mut self, date: NaiveDate) {
        self.view.selected_date = date;
    }

    pub fn set_view_type(&mut self, view_type: ViewType) {
        self.view.view_type = view_type;
    }

    pub fn set_filter_priority(&mut self, filter: PriorityFilter) {
        self.view.filter_priority = filter;
    }

    /// Moves the selected date one step of the current view type.
    pub fn navigate(&mut self, direction: NavigationDirection) -> NaiveDate {
        let moved = navigate(self.view.selected_date, self.view.view_type, direction);
        debug!(
            "event=planner_navigate module=planner status=ok view={} from={} to={}",
            self.view.view_type, self.view.selected_date, moved
        );
        self.view.selected_date = moved;
        moved
    }

    // Projections.

    /// Filtered, canonically sorted appointments regardless of date.
    pub fn all_appointments(&self) -> Vec<&Appointment> {
        filter_and_sort(self.repo.list(), self.view.filter_priority)
    }

    /// Window around the selected date for the current view type.
    pub fn date_range(&self) -> DateRange {
        DateRange::for_view(self.view.selected_date, self.view.view_type, self.week_start)
    }

    /// Filtered, sorted appointments inside `date_range()`.
    pub fn view_appointments(&self) -> Vec<&Appointment> {
        within_range(&self.all_appointments(), &self.date_range())
    }

    /// Filtered, sorted appointments dated on `date`.
    pub fn appointments_for_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        on_date(&self.all_appointments(), date)
    }

    pub fn today_appointments(&self, today: NaiveDate) -> Vec<&Appointment> {
        today_agenda(&self.all_appointments(), today)
    }

    /// Counts over today's (filtered) agenda.
    pub fn stats(&self, today: NaiveDate) -> AgendaStats {
        AgendaStats::from_agenda(self.today_appointments(today))
    }

    /// Grid cells for the current view type and selected date.
    pub fn calendar_cells(&self, today: NaiveDate) -> Vec<CalendarCell<'_>> {
        build_cells(
            &self.all_appointments(),
            self.view.selected_date,
            self.view.view_type,
            self.week_start,
            today,
        )
    }

    // Edit form.

    /// Opens a blank form dated `date`.
    pub fn open_new_form(&mut self, date: NaiveDate) {
        self.form = FormState::Creating(AppointmentDraft::blank(date));
    }

    /// Opens the form on `id`. Returns false, leaving the form as is, when
    /// `id` is unknown.
    pub fn open_edit_form(&mut self, id: &AppointmentId) -> bool {
        let Some(appointment) = self.repo.get(id) else {
            debug!("event=form_open module=planner status=noop reason=not_found id={id}");
            return false;
        };
        self.form = FormState::Editing {
            target: id.clone(),
            draft: AppointmentDraft::from_appointment(appointment),
        };
        true
    }

    /// Discards the open draft and target.
    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
    }

    /// Validates `draft` and creates or updates depending on how the form was
    /// opened. The form closes on success and stays open on error.
    pub fn submit_form(&mut self, draft: AppointmentDraft) -> Result<FormSubmission, FormError> {
        let target = match &self.form {
            FormState::Closed => return Err(FormError::NotOpen),
            FormState::Creating(_) => None,
            FormState::Editing { target, .. } => Some(target.clone()),
        };
        let new = draft.into_new_appointment()?;

        self.form = FormState::Closed;
        let submission = match target {
            Some(target) => {
                let applied = self.repo.update(&target, AppointmentPatch::replace_with(new));
                FormSubmission::Updated {
                    id: target,
                    applied,
                }
            }
            None => FormSubmission::Created(self.repo.create(new)),
        };
        Ok(submission)
    }
}
