//! Calendar date windows and navigation.
//!
//! # Invariants
//! - `DateRange` is inclusive on both ends and `start <= end`.
//! - Week windows are seven days beginning on the configured week start,
//!   except in the first week chrono can represent, where the start is
//!   clamped to `NaiveDate::MIN`.
//! - Date arithmetic saturates at chrono's representable limits instead of
//!   panicking.

use crate::model::priority::ViewType;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range, swapping the bounds if given in reverse.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            return Self {
                start: end,
                end: start,
            };
        }
        Self { start, end }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Week containing `date`, starting on `week_start`.
    ///
    /// When that start day is before `NaiveDate::MIN` the window begins at
    /// `NaiveDate::MIN` instead and still spans seven days.
    pub fn week_containing(date: NaiveDate, week_start: Weekday) -> Self {
        let offset = days_since_week_start(date.weekday(), week_start);
        let start = shift_days_saturating(date, -i64::from(offset));
        let end = shift_days_saturating(start, 6);
        Self { start, end }
    }

    /// Calendar month containing `date`.
    pub fn month_containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// Window shown for `view` around `selected`.
    pub fn for_view(selected: NaiveDate, view: ViewType, week_start: Weekday) -> Self {
        match view {
            ViewType::Day => Self::single_day(selected),
            ViewType::Week => Self::week_containing(selected, week_start),
            ViewType::Month => Self::month_containing(selected),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn contains_range(&self, other: &DateRange) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Number of days covered, counting both ends.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every day from `start` to `end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Direction of a previous/next navigation click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationDirection {
    Previous,
    Next,
}

/// Moves `date` one day, week or month in `direction`.
///
/// Month steps clamp to the last valid day (Jan 31 -> Feb 28/29). At the
/// representable calendar limits the date is returned unchanged.
pub fn navigate(date: NaiveDate, view: ViewType, direction: NavigationDirection) -> NaiveDate {
    let moved = match (view, direction) {
        (ViewType::Day, NavigationDirection::Next) => date.checked_add_days(Days::new(1)),
        (ViewType::Day, NavigationDirection::Previous) => date.checked_sub_days(Days::new(1)),
        (ViewType::Week, NavigationDirection::Next) => date.checked_add_days(Days::new(7)),
        (ViewType::Week, NavigationDirection::Previous) => date.checked_sub_days(Days::new(7)),
        (ViewType::Month, NavigationDirection::Next) => date.checked_add_months(Months::new(1)),
        (ViewType::Month, NavigationDirection::Previous) => {
            date.checked_sub_months(Months::new(1))
        }
    };
    moved.unwrap_or(date)
}

/// Days laid out by the calendar for `view`.
///
/// - day: the selected day only.
/// - week: the seven days of the selected week.
/// - month: whole weeks covering the month, so the grid may start in the
///   previous month and end in the next one.
pub fn calendar_days(selected: NaiveDate, view: ViewType, week_start: Weekday) -> Vec<NaiveDate> {
    match view {
        ViewType::Day => vec![selected],
        ViewType::Week => DateRange::week_containing(selected, week_start)
            .days()
            .collect(),
        ViewType::Month => {
            let month = DateRange::month_containing(selected);
            let grid = DateRange::new(
                DateRange::week_containing(month.start, week_start).start,
                DateRange::week_containing(month.end, week_start).end,
            );
            grid.days().collect()
        }
    }
}

fn days_since_week_start(day: Weekday, week_start: Weekday) -> u32 {
    (7 + day.num_days_from_monday() - week_start.num_days_from_monday()) % 7
}

fn shift_days_saturating(date: NaiveDate, delta: i64) -> NaiveDate {
    if delta >= 0 {
        date.checked_add_days(Days::new(delta.unsigned_abs()))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(delta.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}
