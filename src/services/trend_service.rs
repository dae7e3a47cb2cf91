use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use tracing::debug;

use crate::error::AppResult;
use crate::models::assessment::AssessmentRecord;
use crate::models::subject::SubjectRecord;
use crate::models::trend::{
    DateRange, DotType, ScorePoint, TrendQueryParams, TrendSeries, DEFAULT_SCORE,
};
use crate::utils::dates::{
    end_of_iso_week, is_current_iso_week, midnight_utc, parse_date, parse_datetime,
    parse_optional_datetime, start_of_iso_week,
};

/// Full pipeline: resolve the window, enumerate it, process the sparse
/// history onto it and package the result for a consumer.
///
/// `assessments` must be sorted ascending by `created_at` (the store's
/// query order); the processors do not re-sort. Every date computation
/// takes `now` explicitly so pause-freezing and the current-week check
/// stay deterministic under test.
pub fn build_trend_series(
    assessments: &[AssessmentRecord],
    subject: &SubjectRecord,
    params: &TrendQueryParams,
    now: DateTime<Utc>,
) -> AppResult<TrendSeries> {
    let weekly = params.frequency.is_weekly();
    let range = resolve_range(
        assessments,
        subject,
        weekly,
        params.max_span_days,
        params.padding,
        now,
    )?;
    let dates = enumerate_range(&range, weekly);
    let points = if weekly {
        build_weekly_points(&dates, assessments, now)?
    } else {
        build_daily_points(&dates, assessments)?
    };

    let mut scores = Vec::with_capacity(points.len());
    let mut labels = Vec::with_capacity(points.len());
    let mut dot_types = Vec::with_capacity(points.len());
    for (date, point) in dates.iter().zip(&points) {
        scores.push(point.score.unwrap_or(DEFAULT_SCORE));
        labels.push(point_label(*date, weekly));
        dot_types.push(point.dot_type);
    }

    debug!(
        target: "app::trend",
        subject_id = subject.id,
        points = points.len(),
        weekly,
        start = %range.start,
        end = %range.end,
        "assembled trend series"
    );

    Ok(TrendSeries {
        scores,
        labels,
        dot_types,
        points,
    })
}

/// Inclusive window the visualization covers.
///
/// `max_span_days` is a floor, not a cap: with padding the window grows
/// backward without bound to include the earliest assessment, so the
/// chart always shows complete history. A paused subject freezes the
/// window at its last entry instead of running to `now`.
pub fn resolve_range(
    assessments: &[AssessmentRecord],
    subject: &SubjectRecord,
    weekly: bool,
    max_span_days: i64,
    padding: bool,
    now: DateTime<Utc>,
) -> AppResult<DateRange> {
    let paused_at = parse_optional_datetime(subject.paused_at.as_ref())?;

    if assessments.is_empty() {
        let end = paused_at.unwrap_or(now).date_naive();
        let start = end - Duration::days(max_span_days);
        return Ok(if weekly {
            DateRange {
                start: start_of_iso_week(start),
                end: start_of_iso_week(end),
            }
        } else {
            DateRange { start, end }
        });
    }

    let first = parse_datetime(&assessments[0].created_at)?.date_naive();
    let last = parse_datetime(&assessments[assessments.len() - 1].created_at)?.date_naive();
    let end = if paused_at.is_some() {
        last
    } else {
        now.date_naive()
    };

    if padding {
        let span_floor = end - Duration::days(max_span_days);
        let start = if weekly {
            start_of_iso_week(first).min(start_of_iso_week(span_floor))
        } else {
            first.min(span_floor)
        };
        Ok(DateRange { start, end })
    } else {
        Ok(if weekly {
            DateRange {
                start: start_of_iso_week(first),
                end: end_of_iso_week(last),
            }
        } else {
            DateRange {
                start: first,
                end: last,
            }
        })
    }
}

/// Expand a window into concrete dates: every calendar day, or every
/// ISO-week Monday when `weekly`. Both bounds inclusive.
pub fn enumerate_range(range: &DateRange, weekly: bool) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut cursor = range.start;
    while cursor <= range.end {
        if !weekly || cursor.weekday() == Weekday::Mon {
            dates.push(cursor);
        }
        cursor += Duration::days(1);
    }
    dates
}

/// One point per enumerated day, forward-filling gaps once history has
/// started. Days before the first assessment (or an entirely empty
/// history) show the default score as fillers; the final day is marked
/// [`DotType::Empty`] when it has no assessment of its own.
pub fn build_daily_points(
    dates: &[NaiveDate],
    assessments: &[AssessmentRecord],
) -> AppResult<Vec<ScorePoint>> {
    let last_index = dates.len().saturating_sub(1);

    if assessments.is_empty() {
        return Ok(dates
            .iter()
            .enumerate()
            .map(|(index, date)| no_data_point(*date, index == last_index))
            .collect());
    }

    let by_date = index_by_date(assessments)?;
    let first_hit = dates.iter().position(|date| by_date.contains_key(date));

    let mut carried = DEFAULT_SCORE;
    let mut points = Vec::with_capacity(dates.len());
    for (index, date) in dates.iter().enumerate() {
        let point = match by_date.get(date) {
            Some(record) => {
                carried = record.score;
                ScorePoint {
                    score: Some(record.score),
                    dot_type: DotType::Actual,
                    assessment_dates: vec![midnight_utc(*date)],
                }
            }
            None => match first_hit {
                Some(first) if index >= first => ScorePoint {
                    score: Some(carried),
                    dot_type: if index == last_index {
                        DotType::Empty
                    } else {
                        DotType::Filler
                    },
                    assessment_dates: vec![midnight_utc(*date)],
                },
                _ => ScorePoint {
                    score: Some(DEFAULT_SCORE),
                    dot_type: DotType::Filler,
                    assessment_dates: vec![midnight_utc(*date)],
                },
            },
        };
        points.push(point);
    }

    Ok(points)
}

/// One point per enumerated Monday. A week without data carries the
/// previous week's level forward ([`DotType::Filler`], or
/// [`DotType::Empty`] for the still-running current week); a week with
/// several assessments averages them and keeps every entry timestamp for
/// tap disambiguation.
pub fn build_weekly_points(
    mondays: &[NaiveDate],
    assessments: &[AssessmentRecord],
    now: DateTime<Utc>,
) -> AppResult<Vec<ScorePoint>> {
    let last_index = mondays.len().saturating_sub(1);

    if assessments.is_empty() {
        return Ok(mondays
            .iter()
            .enumerate()
            .map(|(index, monday)| no_data_point(*monday, index == last_index))
            .collect());
    }

    let dated = assessments
        .iter()
        .map(|record| Ok((parse_date(&record.date)?, record)))
        .collect::<AppResult<Vec<(NaiveDate, &AssessmentRecord)>>>()?;

    let mut previous_week_score = DEFAULT_SCORE;
    let mut points = Vec::with_capacity(mondays.len());
    for monday in mondays {
        let week_end = end_of_iso_week(*monday);
        let matched: Vec<&AssessmentRecord> = dated
            .iter()
            .filter(|(date, _)| *date >= *monday && *date <= week_end)
            .map(|(_, record)| *record)
            .collect();

        let point = match matched.as_slice() {
            [] => ScorePoint {
                score: Some(previous_week_score),
                dot_type: if is_current_iso_week(*monday, now) {
                    DotType::Empty
                } else {
                    DotType::Filler
                },
                assessment_dates: Vec::new(),
            },
            [record] => ScorePoint {
                score: Some(record.score),
                dot_type: DotType::Actual,
                assessment_dates: vec![midnight_utc(parse_date(&record.date)?)],
            },
            several => {
                let mean =
                    several.iter().map(|r| r.score as f64).sum::<f64>() / several.len() as f64;
                let mut entered_at = several
                    .iter()
                    .map(|r| parse_datetime(&r.created_at))
                    .collect::<AppResult<Vec<DateTime<Utc>>>>()?;
                entered_at.sort();
                ScorePoint {
                    score: Some(mean.round() as i64),
                    dot_type: DotType::Average,
                    assessment_dates: entered_at,
                }
            }
        };

        previous_week_score = point.score.unwrap_or(DEFAULT_SCORE);
        points.push(point);
    }

    Ok(points)
}

fn point_label(date: NaiveDate, weekly: bool) -> String {
    if weekly {
        format!("W{}", date.iso_week().week())
    } else {
        format!("{}/{}", date.month(), date.day())
    }
}

fn no_data_point(date: NaiveDate, is_last: bool) -> ScorePoint {
    if is_last {
        ScorePoint {
            score: None,
            dot_type: DotType::Empty,
            assessment_dates: vec![midnight_utc(date)],
        }
    } else {
        ScorePoint {
            score: Some(DEFAULT_SCORE),
            dot_type: DotType::Filler,
            assessment_dates: vec![midnight_utc(date)],
        }
    }
}

fn index_by_date(
    assessments: &[AssessmentRecord],
) -> AppResult<HashMap<NaiveDate, &AssessmentRecord>> {
    let mut by_date = HashMap::with_capacity(assessments.len());
    for record in assessments {
        by_date.insert(parse_date(&record.date)?, record);
    }
    Ok(by_date)
}
