use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::subject::AssessmentFrequency;

/// Score substituted into gaps before any data exists.
pub const DEFAULT_SCORE: i64 = 0;

/// Smallest window the trend view covers when history is shorter.
pub const DEFAULT_MAX_SPAN_DAYS: i64 = 7;

/// Data provenance of one plotted point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DotType {
    /// Direct assessment on this date/week.
    Actual,
    /// Mean of several assessments within one week.
    Average,
    /// Gap filled from the nearest prior value.
    Filler,
    /// Trailing point with no data of its own.
    Empty,
}

impl DotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DotType::Actual => "actual",
            DotType::Average => "average",
            DotType::Filler => "filler",
            DotType::Empty => "empty",
        }
    }
}

/// Inclusive date window, bounds already normalized to day (or ISO-week)
/// boundaries by the resolver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One point of the assembled series.
///
/// `assessment_dates` carries the dates a tap on the point refers to: the
/// single day for daily points and single-assessment weeks, every matched
/// entry timestamp (ascending) for averaged weeks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScorePoint {
    pub score: Option<i64>,
    pub dot_type: DotType,
    pub assessment_dates: Vec<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendQueryParams {
    #[serde(default)]
    pub frequency: AssessmentFrequency,
    #[serde(default = "default_max_span_days")]
    pub max_span_days: i64,
    #[serde(default = "default_padding")]
    pub padding: bool,
}

impl Default for TrendQueryParams {
    fn default() -> Self {
        Self {
            frequency: AssessmentFrequency::Daily,
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
            padding: true,
        }
    }
}

fn default_max_span_days() -> i64 {
    DEFAULT_MAX_SPAN_DAYS
}

fn default_padding() -> bool {
    true
}

/// Assembled series handed to the chart, the disambiguation dialog and the
/// PDF exporter. The four vectors are parallel and equally long; `scores`
/// coalesces missing values to [`DEFAULT_SCORE`] while `points` keeps them
/// as `None`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub scores: Vec<i64>,
    pub labels: Vec<String>,
    pub dot_types: Vec<DotType>,
    pub points: Vec<ScorePoint>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
