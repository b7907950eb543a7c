//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose planner use cases to Dart via FRB as plain string-typed records.
//! - Own the single process-wide planner session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Dates cross as `YYYY-MM-DD`, times as `HH:MM`, enums as snake_case.
//! - A poisoned session lock is recovered, never propagated.

use chrono::{Local, NaiveDate};
use colorplan_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, AgendaStats,
    Appointment, AppointmentDraft, AppointmentId, AppointmentPatch, CalendarCell, ClockTime,
    NavigationDirection, Planner, PlannerConfig, Priority, PriorityFilter, RecurrenceType,
    ViewType,
};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

const DATE_FORMAT: &str = "%Y-%m-%d";
static SESSION: OnceLock<Mutex<Planner>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Editable appointment fields as sent by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentInput {
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
    pub end_time: Option<String>,
    /// `high|medium|low|personal|work`.
    pub priority: String,
    /// `none|daily|weekly|monthly`; empty means `none`.
    pub recurrence: String,
    pub reminder: bool,
    pub completed: bool,
}

/// Appointment projection with its resolved priority style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    pub end_time: Option<String>,
    pub priority: String,
    pub priority_label: String,
    pub color: String,
    pub bg_color: String,
    pub icon: String,
    pub recurrence: String,
    pub reminder: bool,
    pub completed: bool,
}

/// Generic action response envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected appointment ID, when there is one.
    pub appointment_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, appointment_id: Option<String>) -> Self {
        Self {
            ok: true,
            appointment_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            appointment_id: None,
            message: message.into(),
        }
    }
}

/// Current calendar selection plus its visible window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStateResponse {
    pub ok: bool,
    pub selected_date: String,
    pub view_type: String,
    pub filter_priority: String,
    pub range_start: String,
    pub range_end: String,
    pub message: String,
}

/// Ordered appointment list for a view window or day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentListResponse {
    pub ok: bool,
    pub items: Vec<AppointmentItem>,
    pub message: String,
}

/// One day box of the week/month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCellItem {
    pub date: String,
    /// False for leading/trailing days of a month grid.
    pub in_selected_month: bool,
    pub is_selected: bool,
    pub is_today: bool,
    pub preview: Vec<AppointmentItem>,
    /// Appointments of the day left out of `preview`.
    pub overflow: u32,
}

/// Grid for the current view type around the selected date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarResponse {
    pub ok: bool,
    pub view_type: String,
    pub cells: Vec<CalendarCellItem>,
    pub message: String,
}

/// Counts over today's agenda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsResponse {
    pub ok: bool,
    pub total: u32,
    pub completed: u32,
    pub upcoming: u32,
    pub high_priority: u32,
    pub message: String,
}

/// Replaces the session with a fresh one dated on `today`.
///
/// `today=None` uses the local calendar day. Seeding follows `seed_sample_data`
/// instead of `COLORPLAN_SEED`; week start still comes from the environment.
///
/// # FFI contract
/// - Never panics.
/// - Fails without touching the session on bad date or bad environment config.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_reset(today: Option<String>, seed_sample_data: bool) -> EntryActionResponse {
    let today = match resolve_today(today.as_deref()) {
        Ok(date) => date,
        Err(err) => return EntryActionResponse::failure(format!("planner_reset failed: {err}")),
    };
    let config = match PlannerConfig::from_env() {
        Ok(config) => PlannerConfig {
            seed_sample_data,
            ..config
        },
        Err(err) => return EntryActionResponse::failure(format!("planner_reset failed: {err}")),
    };

    *lock_session() = Planner::new(&config, today);
    info!("event=ffi_session_reset module=ffi status=ok seeded={seed_sample_data}");
    EntryActionResponse::success("Planner reset.", None)
}

/// Creates an appointment from form input.
///
/// # FFI contract
/// - Never panics.
/// - Returns the new appointment ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn appointment_create(input: AppointmentInput) -> EntryActionResponse {
    let draft = match parse_input(input) {
        Ok(draft) => draft,
        Err(err) => {
            return EntryActionResponse::failure(format!("appointment_create failed: {err}"))
        }
    };
    let new = match draft.into_new_appointment() {
        Ok(new) => new,
        Err(err) => {
            return EntryActionResponse::failure(format!("appointment_create failed: {err}"))
        }
    };

    let created = lock_session().add_appointment(new);
    EntryActionResponse::success("Appointment created.", Some(created.id.to_string()))
}

/// Overwrites every editable field of an existing appointment.
///
/// # FFI contract
/// - Never panics.
/// - Unknown IDs are reported as `ok=false`; nothing changes.
#[flutter_rust_bridge::frb(sync)]
pub fn appointment_update(id: String, input: AppointmentInput) -> EntryActionResponse {
    let new = match parse_input(input).and_then(|draft| {
        draft
            .into_new_appointment()
            .map_err(|err| err.to_string())
    }) {
        Ok(new) => new,
        Err(err) => {
            return EntryActionResponse::failure(format!("appointment_update failed: {err}"))
        }
    };

    let id = AppointmentId::from(id.trim());
    if lock_session().update_appointment(&id, AppointmentPatch::replace_with(new)) {
        EntryActionResponse::success("Appointment updated.", Some(id.to_string()))
    } else {
        EntryActionResponse::failure(format!("appointment_update failed: unknown id `{id}`"))
    }
}

/// Removes an appointment.
///
/// # FFI contract
/// - Never panics.
/// - Deleting an unknown ID reports `ok=false` and changes nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn appointment_delete(id: String) -> EntryActionResponse {
    let id = AppointmentId::from(id.trim());
    if lock_session().delete_appointment(&id) {
        EntryActionResponse::success("Appointment deleted.", Some(id.to_string()))
    } else {
        EntryActionResponse::failure(format!("appointment_delete failed: unknown id `{id}`"))
    }
}

/// Flips the completed flag of an appointment.
#[flutter_rust_bridge::frb(sync)]
pub fn appointment_toggle_complete(id: String) -> EntryActionResponse {
    let id = AppointmentId::from(id.trim());
    if lock_session().toggle_complete(&id) {
        EntryActionResponse::success("Appointment toggled.", Some(id.to_string()))
    } else {
        EntryActionResponse::failure(format!(
            "appointment_toggle_complete failed: unknown id `{id}`"
        ))
    }
}

/// Moves the selected date.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_select_date(date: String) -> ViewStateResponse {
    match parse_date(&date) {
        Ok(date) => {
            let mut planner = lock_session();
            planner.select_date(date);
            view_state_response(&planner, "Date selected.")
        }
        Err(err) => view_state_failure(format!("planner_select_date failed: {err}")),
    }
}

/// Switches between `day|week|month`.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_set_view_type(view_type: String) -> ViewStateResponse {
    match view_type.parse::<ViewType>() {
        Ok(view_type) => {
            let mut planner = lock_session();
            planner.set_view_type(view_type);
            view_state_response(&planner, "View type changed.")
        }
        Err(err) => view_state_failure(format!("planner_set_view_type failed: {err}")),
    }
}

/// Sets the priority filter; `all` clears it.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_set_filter(priority: String) -> ViewStateResponse {
    match priority.parse::<PriorityFilter>() {
        Ok(filter) => {
            let mut planner = lock_session();
            planner.set_filter_priority(filter);
            view_state_response(&planner, "Filter changed.")
        }
        Err(err) => view_state_failure(format!("planner_set_filter failed: {err}")),
    }
}

/// Steps the selected date one view unit back (`forward=false`) or ahead.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_navigate(forward: bool) -> ViewStateResponse {
    let direction = if forward {
        NavigationDirection::Next
    } else {
        NavigationDirection::Previous
    };
    let mut planner = lock_session();
    planner.navigate(direction);
    view_state_response(&planner, "Navigated.")
}

/// Filtered, ordered appointments inside the current view window.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_view() -> AppointmentListResponse {
    let planner = lock_session();
    list_response(planner.view_appointments())
}

/// Filtered, ordered agenda for `today` (local day when `None`).
#[flutter_rust_bridge::frb(sync)]
pub fn planner_today(today: Option<String>) -> AppointmentListResponse {
    match resolve_today(today.as_deref()) {
        Ok(today) => {
            let planner = lock_session();
            list_response(planner.today_appointments(today))
        }
        Err(err) => AppointmentListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("planner_today failed: {err}"),
        },
    }
}

/// Filtered, ordered appointments dated on `date`, regardless of the view
/// window.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_appointments_for_date(date: String) -> AppointmentListResponse {
    match parse_date(&date) {
        Ok(date) => {
            let planner = lock_session();
            list_response(planner.appointments_for_date(date))
        }
        Err(err) => AppointmentListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("planner_appointments_for_date failed: {err}"),
        },
    }
}

/// Calendar grid for the current view; `today` (local day when `None`) marks
/// the today cell.
///
/// # FFI contract
/// - Never panics.
/// - Month grids are whole weeks; leading/trailing days keep their previews.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_calendar(today: Option<String>) -> CalendarResponse {
    match resolve_today(today.as_deref()) {
        Ok(today) => {
            let planner = lock_session();
            let cells = planner
                .calendar_cells(today)
                .iter()
                .map(to_calendar_cell_item)
                .collect::<Vec<_>>();
            let message = format!("{} cell(s).", cells.len());
            CalendarResponse {
                ok: true,
                view_type: planner.view_type().as_str().to_string(),
                cells,
                message,
            }
        }
        Err(err) => CalendarResponse {
            ok: false,
            view_type: lock_session().view_type().as_str().to_string(),
            cells: Vec::new(),
            message: format!("planner_calendar failed: {err}"),
        },
    }
}

/// Stats over the filtered agenda for `today` (local day when `None`).
#[flutter_rust_bridge::frb(sync)]
pub fn planner_stats(today: Option<String>) -> StatsResponse {
    match resolve_today(today.as_deref()) {
        Ok(today) => {
            let stats = lock_session().stats(today);
            stats_response(stats)
        }
        Err(err) => StatsResponse {
            ok: false,
            total: 0,
            completed: 0,
            upcoming: 0,
            high_priority: 0,
            message: format!("planner_stats failed: {err}"),
        },
    }
}

fn lock_session() -> MutexGuard<'static, Planner> {
    SESSION
        .get_or_init(|| {
            let config = PlannerConfig::from_env().unwrap_or_else(|err| {
                warn!("event=ffi_session_init module=ffi status=fallback error={err}");
                PlannerConfig::default()
            });
            Mutex::new(Planner::new(&config, Local::now().date_naive()))
        })
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate, String> {
    match raw {
        Some(text) => parse_date(text),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| format!("invalid date `{trimmed}`; expected YYYY-MM-DD"))
}

fn parse_time(raw: &str) -> Result<ClockTime, String> {
    ClockTime::parse(raw.trim()).map_err(|err| err.to_string())
}

fn parse_input(input: AppointmentInput) -> Result<AppointmentDraft, String> {
    let recurrence = if input.recurrence.trim().is_empty() {
        RecurrenceType::None
    } else {
        input
            .recurrence
            .parse::<RecurrenceType>()
            .map_err(|err| err.to_string())?
    };
    let end_time = match input.end_time.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => Some(parse_time(text)?),
    };

    Ok(AppointmentDraft {
        title: input.title,
        description: input.description.unwrap_or_default(),
        date: parse_date(&input.date)?,
        time: parse_time(&input.time)?,
        end_time,
        priority: input
            .priority
            .parse::<Priority>()
            .map_err(|err| err.to_string())?,
        recurrence,
        reminder: input.reminder,
        completed: input.completed,
    })
}

fn to_appointment_item(apt: &Appointment) -> AppointmentItem {
    let style = apt.priority.style();
    AppointmentItem {
        id: apt.id.to_string(),
        title: apt.title.clone(),
        description: apt.description.clone(),
        date: apt.date.format(DATE_FORMAT).to_string(),
        time: apt.time.to_string(),
        end_time: apt.end_time.map(|end| end.to_string()),
        priority: apt.priority.as_str().to_string(),
        priority_label: style.label.to_string(),
        color: style.color.to_string(),
        bg_color: style.bg_color.to_string(),
        icon: style.icon.to_string(),
        recurrence: apt.recurrence.as_str().to_string(),
        reminder: apt.reminder,
        completed: apt.completed,
    }
}

fn to_calendar_cell_item(cell: &CalendarCell<'_>) -> CalendarCellItem {
    CalendarCellItem {
        date: cell.date.format(DATE_FORMAT).to_string(),
        in_selected_month: cell.in_selected_month,
        is_selected: cell.is_selected,
        is_today: cell.is_today,
        preview: cell
            .preview
            .iter()
            .map(|apt| to_appointment_item(apt))
            .collect(),
        overflow: saturating_u32(cell.overflow),
    }
}

fn list_response(appointments: Vec<&Appointment>) -> AppointmentListResponse {
    let items = appointments
        .into_iter()
        .map(to_appointment_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No appointments.".to_string()
    } else {
        format!("Found {} appointment(s).", items.len())
    };
    AppointmentListResponse {
        ok: true,
        items,
        message,
    }
}

fn stats_response(stats: AgendaStats) -> StatsResponse {
    StatsResponse {
        ok: true,
        total: saturating_u32(stats.total),
        completed: saturating_u32(stats.completed),
        upcoming: saturating_u32(stats.upcoming),
        high_priority: saturating_u32(stats.high_priority),
        message: String::new(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn view_state_response(planner: &Planner, message: &str) -> ViewStateResponse {
    let state = planner.view_state();
    let range = planner.date_range();
    ViewStateResponse {
        ok: true,
        selected_date: state.selected_date.format(DATE_FORMAT).to_string(),
        view_type: state.view_type.as_str().to_string(),
        filter_priority: state.filter_priority.as_str().to_string(),
        range_start: range.start.format(DATE_FORMAT).to_string(),
        range_end: range.end.format(DATE_FORMAT).to_string(),
        message: message.to_string(),
    }
}

fn view_state_failure(message: String) -> ViewStateResponse {
    let mut response = view_state_response(&lock_session(), "");
    response.ok = false;
    response.message = message;
    response
}
