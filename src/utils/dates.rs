use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

use crate::error::{AppError, AppResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| AppError::invalid_date(format!("'{value}': {err}")))
}

pub fn parse_datetime(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| AppError::invalid_date(format!("'{value}': {err}")))
}

pub fn parse_optional_datetime(value: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    match value {
        Some(raw) => Ok(Some(parse_datetime(raw)?)),
        None => Ok(None),
    }
}

/// Monday of the ISO week containing `date`.
pub fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Sunday of the ISO week containing `date`.
pub fn end_of_iso_week(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).last_day()
}

pub fn is_current_iso_week(date: NaiveDate, now: DateTime<Utc>) -> bool {
    start_of_iso_week(date) == start_of_iso_week(now.date_naive())
}

/// Midnight UTC of `date`, for point metadata handed to consumers.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

pub fn at_time_utc(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(time))
}
