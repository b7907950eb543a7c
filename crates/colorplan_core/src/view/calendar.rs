//! Calendar grid cells for week and month layouts.

use crate::model::appointment::Appointment;
use crate::model::priority::ViewType;
use crate::view::projection::on_date;
use crate::view::range::calendar_days;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

const WEEK_CELL_PREVIEW: usize = 3;
const MONTH_CELL_PREVIEW: usize = 2;

/// One day box of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell<'a> {
    pub date: NaiveDate,
    /// False for leading/trailing days of a month grid.
    pub in_selected_month: bool,
    pub is_selected: bool,
    pub is_today: bool,
    /// First appointments of the day, capped per view.
    pub preview: Vec<&'a Appointment>,
    /// Appointments of the day not in `preview`.
    pub overflow: usize,
}

/// Maximum appointments previewed per cell; `None` means unlimited.
pub fn preview_limit(view: ViewType) -> Option<usize> {
    match view {
        ViewType::Day => None,
        ViewType::Week => Some(WEEK_CELL_PREVIEW),
        ViewType::Month => Some(MONTH_CELL_PREVIEW),
    }
}

/// Lays out `appointments` (already filtered and sorted) on the grid for
/// `view` around `selected`.
///
/// Cells use the per-day lookup, not the view window, so leading/trailing
/// month-grid days still show their appointments.
pub fn build_cells<'a>(
    appointments: &[&'a Appointment],
    selected: NaiveDate,
    view: ViewType,
    week_start: Weekday,
    today: NaiveDate,
) -> Vec<CalendarCell<'a>> {
    let limit = preview_limit(view);
    calendar_days(selected, view, week_start)
        .into_iter()
        .map(|date| {
            let mut preview = on_date(appointments, date);
            let overflow = match limit {
                Some(limit) if preview.len() > limit => {
                    let hidden = preview.len() - limit;
                    preview.truncate(limit);
                    hidden
                }
                _ => 0,
            };
            CalendarCell {
                date,
                in_selected_month: date.year() == selected.year()
                    && date.month() == selected.month(),
                is_selected: date == selected,
                is_today: date == today,
                preview,
                overflow,
            }
        })
        .collect()
}
