use chrono::NaiveDate;
use colorplan_core::{
    Appointment, AppointmentId, AppointmentPatch, ClockTime, NewAppointment, Priority,
    RecurrenceType,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn time(text: &str) -> ClockTime {
    ClockTime::parse(text).unwrap()
}

fn sample() -> Appointment {
    let new = NewAppointment::new("Standup", day(), time("09:00"), Priority::Work)
        .with_end_time(time("09:15"))
        .with_recurrence(RecurrenceType::Daily)
        .with_reminder(true);
    Appointment::from_new(AppointmentId::from("apt-1"), new)
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let appointment = sample();

    let json = serde_json::to_value(&appointment).unwrap();
    assert_eq!(json["id"], "apt-1");
    assert_eq!(json["title"], "Standup");
    assert_eq!(json["date"], "2026-10-19");
    assert_eq!(json["time"], "09:00");
    assert_eq!(json["end_time"], "09:15");
    assert_eq!(json["priority"], "work");
    assert_eq!(json["recurrence"], "daily");
    assert_eq!(json["reminder"], true);
    assert_eq!(json["completed"], false);
    assert!(json.get("description").is_none());

    let decoded: Appointment = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, appointment);
}

#[test]
fn deserialize_defaults_optional_flags() {
    let value = serde_json::json!({
        "id": "x",
        "title": "Dentist",
        "date": "2026-10-20",
        "time": "16:30",
        "priority": "high"
    });

    let decoded: Appointment = serde_json::from_value(value).unwrap();
    assert_eq!(decoded.recurrence, RecurrenceType::None);
    assert!(!decoded.reminder);
    assert!(!decoded.completed);
    assert_eq!(decoded.end_time, None);
}

#[test]
fn deserialize_rejects_unpadded_time() {
    let value = serde_json::json!({
        "id": "x",
        "title": "Dentist",
        "date": "2026-10-20",
        "time": "9:30",
        "priority": "high"
    });

    let err = serde_json::from_value::<Appointment>(value).unwrap_err();
    assert!(err.to_string().contains("HH:MM"), "unexpected error: {err}");
}

#[test]
fn empty_patch_leaves_record_identical() {
    let mut appointment = sample();
    let before = appointment.clone();

    let patch = AppointmentPatch::default();
    assert!(patch.is_empty());
    appointment.apply(patch);

    assert_eq!(appointment, before);
}

#[test]
fn patch_can_clear_optional_fields() {
    let mut appointment = sample();
    appointment.description = Some("daily sync".to_string());

    appointment.apply(AppointmentPatch {
        description: Some(None),
        end_time: Some(None),
        priority: Some(Priority::High),
        ..AppointmentPatch::default()
    });

    assert_eq!(appointment.description, None);
    assert_eq!(appointment.end_time, None);
    assert_eq!(appointment.priority, Priority::High);
    assert_eq!(appointment.id.as_str(), "apt-1");
}

#[test]
fn inverted_time_range_is_flagged_not_rejected() {
    let new = NewAppointment::new("Late", day(), time("18:00"), Priority::Low)
        .with_end_time(time("17:00"));
    assert!(new.validate().is_ok());

    let appointment = Appointment::from_new(AppointmentId::generate(), new);
    assert!(appointment.has_inverted_time_range());
    assert!(!sample().has_inverted_time_range());
}

#[test]
fn generated_ids_are_distinct() {
    let a = AppointmentId::generate();
    let b = AppointmentId::generate();
    assert_ne!(a, b);
    assert!(!a.as_str().is_empty());
}
