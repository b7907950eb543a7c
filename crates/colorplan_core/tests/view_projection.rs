use chrono::{Datelike, NaiveDate, Weekday};
use colorplan_core::view::calendar::build_cells;
use colorplan_core::view::projection::{
    filter_and_sort, on_date, sort_canonical, today_agenda, within_range,
};
use colorplan_core::view::range::{calendar_days, navigate};
use colorplan_core::{
    AgendaStats, Appointment, AppointmentId, ClockTime, DateRange, NavigationDirection,
    NewAppointment, Priority, PriorityFilter, ViewType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn apt(id: &str, day: NaiveDate, time: &str, priority: Priority) -> Appointment {
    Appointment::from_new(
        AppointmentId::from(id),
        NewAppointment::new(id, day, ClockTime::parse(time).unwrap(), priority),
    )
}

fn ids(list: &[&Appointment]) -> Vec<String> {
    list.iter().map(|apt| apt.id.to_string()).collect()
}

#[test]
fn canonical_order_is_date_then_time() {
    let list = vec![
        apt("c", date(2026, 10, 20), "08:00", Priority::Low),
        apt("b", date(2026, 10, 19), "15:00", Priority::Low),
        apt("a", date(2026, 10, 19), "09:00", Priority::Low),
    ];

    let sorted = filter_and_sort(&list, PriorityFilter::All);
    assert_eq!(ids(&sorted), ["a", "b", "c"]);
}

#[test]
fn sort_is_stable_for_equal_date_and_time() {
    let day = date(2026, 10, 19);
    let list = vec![
        apt("laundry", day, "07:30", Priority::Medium),
        apt("breakfast", day, "07:00", Priority::Personal),
        apt("study", day, "07:30", Priority::Work),
    ];

    let mut sorted = filter_and_sort(&list, PriorityFilter::All);
    assert_eq!(ids(&sorted), ["breakfast", "laundry", "study"]);

    sort_canonical(&mut sorted);
    assert_eq!(ids(&sorted), ["breakfast", "laundry", "study"]);
}

#[test]
fn priority_filter_keeps_only_selected_priority() {
    let day = date(2026, 10, 19);
    let list = vec![
        apt("w1", day, "09:00", Priority::Work),
        apt("h1", day, "10:00", Priority::High),
        apt("w2", day, "11:00", Priority::Work),
    ];

    let work = filter_and_sort(&list, PriorityFilter::Only(Priority::Work));
    assert_eq!(ids(&work), ["w1", "w2"]);

    let all = filter_and_sort(&list, PriorityFilter::All);
    assert_eq!(all.len(), 3);

    let none = filter_and_sort(&list, PriorityFilter::Only(Priority::Low));
    assert!(none.is_empty());
}

#[test]
fn week_window_runs_monday_to_sunday() {
    // 2026-10-22 is a Thursday.
    let range = DateRange::for_view(date(2026, 10, 22), ViewType::Week, Weekday::Mon);
    assert_eq!(range.start, date(2026, 10, 19));
    assert_eq!(range.end, date(2026, 10, 25));
    assert_eq!(range.start.weekday(), Weekday::Mon);
    assert_eq!(range.day_count(), 7);

    let sunday = DateRange::for_view(date(2026, 10, 25), ViewType::Week, Weekday::Mon);
    assert_eq!(sunday, range);
}

#[test]
fn week_window_honours_sunday_start() {
    let range = DateRange::for_view(date(2026, 10, 22), ViewType::Week, Weekday::Sun);
    assert_eq!(range.start, date(2026, 10, 18));
    assert_eq!(range.end, date(2026, 10, 24));
}

#[test]
fn day_and_month_windows() {
    let selected = date(2026, 2, 14);
    assert_eq!(
        DateRange::for_view(selected, ViewType::Day, Weekday::Mon),
        DateRange::single_day(selected)
    );

    let month = DateRange::for_view(selected, ViewType::Month, Weekday::Mon);
    assert_eq!(month.start, date(2026, 2, 1));
    assert_eq!(month.end, date(2026, 2, 28));
}

#[test]
fn window_includes_both_endpoints() {
    let list = vec![
        apt("before", date(2026, 9, 30), "23:59", Priority::Low),
        apt("first", date(2026, 10, 1), "00:00", Priority::Low),
        apt("last", date(2026, 10, 31), "23:59", Priority::Low),
        apt("after", date(2026, 11, 1), "00:00", Priority::Low),
    ];
    let sorted = filter_and_sort(&list, PriorityFilter::All);

    let month = DateRange::for_view(date(2026, 10, 15), ViewType::Month, Weekday::Mon);
    assert_eq!(ids(&within_range(&sorted, &month)), ["first", "last"]);
}

#[test]
fn month_window_contains_inner_weeks_and_days() {
    let selected = date(2026, 10, 7);
    let month = DateRange::for_view(selected, ViewType::Month, Weekday::Mon);

    for day in month.days() {
        let day_range = DateRange::for_view(day, ViewType::Day, Weekday::Mon);
        assert!(month.contains_range(&day_range));

        let week = DateRange::for_view(day, ViewType::Week, Weekday::Mon);
        if week.start >= month.start && week.end <= month.end {
            assert!(month.contains_range(&week));
        }
    }

    let list = vec![
        apt("a", date(2026, 10, 12), "09:00", Priority::Work),
        apt("b", date(2026, 10, 14), "09:00", Priority::Work),
        apt("c", date(2026, 10, 30), "09:00", Priority::Work),
    ];
    let sorted = filter_and_sort(&list, PriorityFilter::All);
    let week = DateRange::for_view(date(2026, 10, 14), ViewType::Week, Weekday::Mon);
    let in_week = ids(&within_range(&sorted, &week));
    let in_month = ids(&within_range(&sorted, &month));
    assert!(in_week.iter().all(|id| in_month.contains(id)));
}

#[test]
fn per_day_lookup_and_today_agenda() {
    let today = date(2026, 10, 19);
    let list = vec![
        apt("yesterday", date(2026, 10, 18), "09:00", Priority::Low),
        apt("today-late", today, "18:00", Priority::Low),
        apt("today-early", today, "08:00", Priority::High),
    ];
    let sorted = filter_and_sort(&list, PriorityFilter::All);

    assert_eq!(ids(&today_agenda(&sorted, today)), ["today-early", "today-late"]);
    assert_eq!(ids(&on_date(&sorted, date(2026, 10, 18))), ["yesterday"]);
    assert!(on_date(&sorted, date(2026, 10, 20)).is_empty());
}

#[test]
fn stats_count_completed_upcoming_and_outstanding_high() {
    let today = date(2026, 10, 19);
    let mut done_high = apt("done-high", today, "08:00", Priority::High);
    done_high.completed = true;
    let list = vec![
        done_high,
        apt("open-high", today, "09:00", Priority::High),
        apt("open-low", today, "10:00", Priority::Low),
    ];

    let stats = AgendaStats::from_agenda(&list);
    assert_eq!(
        stats,
        AgendaStats {
            total: 3,
            completed: 1,
            upcoming: 2,
            high_priority: 1,
        }
    );
    assert_eq!(stats.completed + stats.upcoming, stats.total);
    assert_eq!(AgendaStats::from_agenda(Vec::<&Appointment>::new()), AgendaStats::default());
}

#[test]
fn stats_serialize_with_snake_case_fields() {
    let stats = AgendaStats {
        total: 2,
        completed: 1,
        upcoming: 1,
        high_priority: 1,
    };
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["high_priority"], 1);
    assert_eq!(json["upcoming"], 1);
}

#[test]
fn navigation_steps_by_view_type() {
    let start = date(2026, 10, 19);
    assert_eq!(
        navigate(start, ViewType::Day, NavigationDirection::Next),
        date(2026, 10, 20)
    );
    assert_eq!(
        navigate(start, ViewType::Day, NavigationDirection::Previous),
        date(2026, 10, 18)
    );
    assert_eq!(
        navigate(start, ViewType::Week, NavigationDirection::Previous),
        date(2026, 10, 12)
    );
    assert_eq!(
        navigate(start, ViewType::Month, NavigationDirection::Next),
        date(2026, 11, 19)
    );
}

#[test]
fn week_navigation_moves_interval_start_by_seven_days() {
    let selected = date(2026, 10, 22);
    let current = DateRange::for_view(selected, ViewType::Week, Weekday::Mon);

    let next_date = navigate(selected, ViewType::Week, NavigationDirection::Next);
    let next = DateRange::for_view(next_date, ViewType::Week, Weekday::Mon);

    assert!(!current.contains(next_date));
    assert!(next.contains(next_date));
    assert_eq!((next.start - current.start).num_days(), 7);
}

#[test]
fn month_navigation_clamps_to_month_end() {
    assert_eq!(
        navigate(date(2026, 1, 31), ViewType::Month, NavigationDirection::Next),
        date(2026, 2, 28)
    );
    assert_eq!(
        navigate(date(2028, 3, 31), ViewType::Month, NavigationDirection::Previous),
        date(2028, 2, 29)
    );
}

#[test]
fn navigation_stops_at_calendar_limits() {
    assert_eq!(
        navigate(NaiveDate::MAX, ViewType::Day, NavigationDirection::Next),
        NaiveDate::MAX
    );
    assert_eq!(
        navigate(NaiveDate::MIN, ViewType::Month, NavigationDirection::Previous),
        NaiveDate::MIN
    );
}

#[test]
fn month_grid_is_whole_weeks_from_week_start() {
    // October 2026 starts on a Thursday and ends on a Saturday.
    let days = calendar_days(date(2026, 10, 19), ViewType::Month, Weekday::Mon);
    assert_eq!(days.len() % 7, 0);
    assert_eq!(days.first().copied(), Some(date(2026, 9, 28)));
    assert_eq!(days.last().copied(), Some(date(2026, 11, 1)));
    assert_eq!(days.len(), 35);

    assert_eq!(
        calendar_days(date(2026, 10, 19), ViewType::Day, Weekday::Mon),
        vec![date(2026, 10, 19)]
    );
    assert_eq!(
        calendar_days(date(2026, 10, 19), ViewType::Week, Weekday::Mon).len(),
        7
    );
}

#[test]
fn calendar_cells_cap_preview_and_count_overflow() {
    let busy = date(2026, 10, 20);
    let list: Vec<Appointment> = ["08:00", "09:00", "10:00", "11:00"]
        .iter()
        .enumerate()
        .map(|(index, time)| apt(&format!("busy-{index}"), busy, time, Priority::Work))
        .chain(std::iter::once(apt(
            "spill",
            date(2026, 9, 29),
            "12:00",
            Priority::Low,
        )))
        .collect();
    let sorted = filter_and_sort(&list, PriorityFilter::All);
    let today = date(2026, 10, 19);

    let week = build_cells(&sorted, today, ViewType::Week, Weekday::Mon, today);
    let busy_cell = week.iter().find(|cell| cell.date == busy).unwrap();
    assert_eq!(ids(&busy_cell.preview), ["busy-0", "busy-1", "busy-2"]);
    assert_eq!(busy_cell.overflow, 1);
    assert!(week.iter().any(|cell| cell.is_today && cell.is_selected));

    let month = build_cells(&sorted, today, ViewType::Month, Weekday::Mon, today);
    let busy_cell = month.iter().find(|cell| cell.date == busy).unwrap();
    assert_eq!(busy_cell.preview.len(), 2);
    assert_eq!(busy_cell.overflow, 2);

    let spill_cell = month
        .iter()
        .find(|cell| cell.date == date(2026, 9, 29))
        .unwrap();
    assert!(!spill_cell.in_selected_month);
    assert_eq!(ids(&spill_cell.preview), ["spill"]);
}
