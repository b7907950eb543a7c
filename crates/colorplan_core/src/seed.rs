//! Sample day loaded into a fresh planner session.

use crate::model::appointment::NewAppointment;
use crate::model::clock::ClockTime;
use crate::model::priority::Priority;
use chrono::NaiveDate;

struct SeedEntry {
    title: &'static str,
    description: Option<&'static str>,
    start: (u8, u8),
    end: Option<(u8, u8)>,
    priority: Priority,
}

#[rustfmt::skip]
const SAMPLE_DAY: &[SeedEntry] = &[
    SeedEntry { title: "Breakfast", description: None, start: (7, 0), end: None, priority: Priority::Personal },
    SeedEntry { title: "Laundry", description: None, start: (7, 30), end: None, priority: Priority::Medium },
    SeedEntry { title: "Focused study", description: Some("Morning study session"), start: (7, 30), end: Some((10, 0)), priority: Priority::Work },
    SeedEntry { title: "Hang laundry / tidy up", description: None, start: (9, 30), end: None, priority: Priority::Medium },
    SeedEntry { title: "Snack", description: None, start: (10, 30), end: None, priority: Priority::Personal },
    SeedEntry { title: "Book reading", description: Some("Late morning"), start: (10, 45), end: Some((12, 0)), priority: Priority::Low },
    SeedEntry { title: "Project planning", description: None, start: (12, 0), end: Some((12, 30)), priority: Priority::Work },
    SeedEntry { title: "Lunch", description: None, start: (12, 30), end: None, priority: Priority::Personal },
    SeedEntry { title: "Afternoon snack", description: None, start: (13, 30), end: None, priority: Priority::Personal },
    SeedEntry { title: "Workout", description: None, start: (14, 0), end: Some((14, 25)), priority: Priority::High },
    SeedEntry { title: "Shower / recovery", description: None, start: (14, 25), end: Some((14, 40)), priority: Priority::Personal },
    SeedEntry { title: "Project planning (deep focus)", description: None, start: (14, 40), end: Some((15, 40)), priority: Priority::High },
    SeedEntry { title: "Study / review", description: None, start: (15, 40), end: Some((17, 30)), priority: Priority::Work },
    SeedEntry { title: "Light reading or revision", description: Some("Evening"), start: (18, 0), end: Some((19, 0)), priority: Priority::Low },
    SeedEntry { title: "Dinner", description: None, start: (19, 30), end: None, priority: Priority::Personal },
];

/// Sample appointments, all dated on `day`, in insertion order.
pub fn sample_day(day: NaiveDate) -> Vec<NewAppointment> {
    SAMPLE_DAY
        .iter()
        .filter_map(|entry| {
            let start = ClockTime::new(entry.start.0, entry.start.1)?;
            let mut new = NewAppointment::new(entry.title, day, start, entry.priority);
            if let Some(description) = entry.description {
                new = new.with_description(description);
            }
            new.end_time = entry
                .end
                .and_then(|(hour, minute)| ClockTime::new(hour, minute));
            Some(new)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{sample_day, SAMPLE_DAY};
    use crate::model::priority::Priority;
    use chrono::NaiveDate;

    #[test]
    fn sample_day_keeps_every_entry_and_covers_all_priorities() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let seeded = sample_day(day);
        assert_eq!(seeded.len(), SAMPLE_DAY.len());
        assert!(seeded.iter().all(|apt| apt.date == day));
        for priority in Priority::ALL {
            assert!(seeded.iter().any(|apt| apt.priority == priority));
        }
    }

    #[test]
    fn sample_descriptions_survive_seeding() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let seeded = sample_day(day);
        let study = seeded
            .iter()
            .find(|apt| apt.title == "Focused study")
            .unwrap();
        assert_eq!(study.description.as_deref(), Some("Morning study session"));
        let dinner = seeded.iter().find(|apt| apt.title == "Dinner").unwrap();
        assert_eq!(dinner.description, None);
    }
}
