//! Reminder rollover scenarios across day and week boundaries, as the
//! notification-scheduling collaborator exercises them.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use pawlog_engine::models::subject::AssessmentFrequency;
use pawlog_engine::services::reminder_service::{
    build_schedule, next_trigger, parse_reminder_time,
};

fn at(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid test timestamp")
}

#[test]
fn daily_reminder_rolls_to_tomorrow_after_the_time_passes() {
    // 21:00 with a 20:00 preference: tomorrow at 20:00.
    let now = at("2024-01-09T21:00:00Z");
    let time = parse_reminder_time("20:00").unwrap();

    let trigger = next_trigger(now, time, AssessmentFrequency::Daily);

    assert_eq!(trigger, at("2024-01-10T20:00:00Z"));
}

#[test]
fn daily_reminder_keeps_today_while_still_ahead() {
    let now = at("2024-01-09T06:15:00Z");
    let time = parse_reminder_time("20:00").unwrap();

    let trigger = next_trigger(now, time, AssessmentFrequency::Daily);

    assert_eq!(trigger, at("2024-01-09T20:00:00Z"));
}

#[test]
fn weekly_reminder_never_targets_the_monday_just_passed() {
    // Tuesday 10:00 with a Monday 20:00 preference: the *next* Monday,
    // six days later, not yesterday.
    let now = at("2024-01-09T10:00:00Z");
    assert_eq!(now.weekday(), Weekday::Tue);
    let time = parse_reminder_time("20:00").unwrap();

    let trigger = next_trigger(now, time, AssessmentFrequency::Weekly);

    assert_eq!(trigger, at("2024-01-15T20:00:00Z"));
    assert_eq!(trigger.weekday(), Weekday::Mon);
}

#[test]
fn weekly_reminder_spans_the_whole_week_from_a_spent_monday() {
    let now = at("2024-01-08T20:30:00Z"); // Monday, preference passed
    let time = parse_reminder_time("20:00").unwrap();

    let trigger = next_trigger(now, time, AssessmentFrequency::Weekly);

    assert_eq!(trigger, at("2024-01-15T20:00:00Z"));
}

#[test]
fn weekly_reminder_fires_same_day_on_an_unspent_monday() {
    let now = at("2024-01-08T07:00:00Z"); // Monday morning
    let time = parse_reminder_time("20:00").unwrap();

    let trigger = next_trigger(now, time, AssessmentFrequency::Weekly);

    assert_eq!(trigger, at("2024-01-08T20:00:00Z"));
}

#[test]
fn schedules_are_pure_in_their_inputs() {
    let now = at("2024-01-09T10:00:00Z");
    let time = parse_reminder_time("08:30").unwrap();

    let first = next_trigger(now, time, AssessmentFrequency::Weekly);
    let second = next_trigger(now, time, AssessmentFrequency::Weekly);

    assert_eq!(first, second);
}

#[test]
fn resolved_triggers_never_carry_seconds() {
    let now = at("2024-01-09T10:00:00Z");
    let time = parse_reminder_time("08:30").unwrap();

    for frequency in [AssessmentFrequency::Daily, AssessmentFrequency::Weekly] {
        let trigger = next_trigger(now, time, frequency);
        assert_eq!(trigger.second(), 0);
        assert!(trigger > now);
    }
}

#[test]
fn unparsable_preferences_refuse_to_schedule() {
    let now = at("2024-01-09T10:00:00Z");

    assert!(build_schedule(now, "25:00", AssessmentFrequency::Daily).is_err());
    assert!(build_schedule(now, "soonish", AssessmentFrequency::Weekly).is_err());
    assert!(parse_reminder_time("12:60").is_err());
}

#[test]
fn schedule_packages_trigger_and_repeat_tag() {
    let now = at("2024-01-09T10:00:00Z");

    let schedule = build_schedule(now, "18:45", AssessmentFrequency::Daily).unwrap();

    assert_eq!(schedule.frequency, AssessmentFrequency::Daily);
    assert_eq!(schedule.trigger_at, at("2024-01-09T18:45:00Z"));

    let json = serde_json::to_value(schedule).expect("schedule should serialize");
    assert!(json.get("triggerAt").is_some());
    assert_eq!(json["frequency"], "daily");
}
