use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::subject::AssessmentFrequency;
use crate::utils::dates::at_time_utc;

const DAYS_PER_WEEK: i64 = 7;

/// What the notification collaborator registers with the OS: the next
/// absolute trigger plus the repeat tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSchedule {
    pub trigger_at: DateTime<Utc>,
    pub frequency: AssessmentFrequency,
}

/// Reminder preference as persisted by the store (`"HH:MM"`). Anything
/// unparsable is refused instead of being scheduled.
pub fn parse_reminder_time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|err| AppError::invalid_time(format!("'{value}': {err}")))
}

/// Next valid absolute trigger for a recurring reminder.
///
/// Daily reminders fire today at `time_of_day`, or tomorrow once that
/// moment has passed. Weekly reminders fire on Mondays only: any other
/// day, or a Monday whose time has already passed, rolls forward to the
/// next Monday. Seconds are zeroed. Pure in `(now, time_of_day,
/// frequency)`.
pub fn next_trigger(
    now: DateTime<Utc>,
    time_of_day: NaiveTime,
    frequency: AssessmentFrequency,
) -> DateTime<Utc> {
    let time_of_day = time_of_day.with_second(0).unwrap_or(time_of_day);
    let today = now.date_naive();
    let candidate = at_time_utc(today, time_of_day);

    let trigger_at = match frequency {
        AssessmentFrequency::Daily => {
            if candidate <= now {
                at_time_utc(today + Duration::days(1), time_of_day)
            } else {
                candidate
            }
        }
        AssessmentFrequency::Weekly => {
            if today.weekday() == Weekday::Mon && candidate > now {
                candidate
            } else {
                let mut days_until_monday =
                    (DAYS_PER_WEEK + 1 - today.weekday().number_from_monday() as i64)
                        % DAYS_PER_WEEK;
                if days_until_monday == 0 {
                    // Monday with the time already passed: a full week out.
                    days_until_monday = DAYS_PER_WEEK;
                }
                at_time_utc(today + Duration::days(days_until_monday), time_of_day)
            }
        }
    };

    debug!(
        target: "app::reminder",
        %frequency,
        trigger_at = %trigger_at.to_rfc3339(),
        "resolved next reminder trigger"
    );

    trigger_at
}

/// Convenience for the notification collaborator: parse the stored
/// preference and package the resolved trigger with its repeat tag.
pub fn build_schedule(
    now: DateTime<Utc>,
    time_of_day: &str,
    frequency: AssessmentFrequency,
) -> AppResult<ReminderSchedule> {
    let time = parse_reminder_time(time_of_day)?;
    Ok(ReminderSchedule {
        trigger_at: next_trigger(now, time, frequency),
        frequency,
    })
}
