use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::assessment::{
    AssessmentInput, AssessmentRecord, MetricKind, MAX_COMPOSITE_SCORE, METRIC_LEVELS,
};

/// Number of metrics when the optional custom metric participates.
const METRIC_COUNT_WITH_CUSTOM: f64 = 7.0;
const METRIC_COUNT: f64 = 6.0;

/// Composite wellbeing score for one assessment, 0–60.
///
/// The six required metrics sum directly. A present custom value joins as
/// a seventh equally-weighted metric and the average is scaled back onto
/// the 0–60 range, so downstream thresholds hold whether or not custom
/// tracking is enabled.
pub fn composite_score(input: &AssessmentInput) -> AppResult<i64> {
    let mut sum = 0.0;
    for (kind, value) in input.metrics() {
        sum += validate_metric(kind, value)?;
    }

    let score = match input.custom_value {
        Some(raw) => {
            let custom = validate_metric(MetricKind::Custom, raw)?;
            ((sum + custom) / METRIC_COUNT_WITH_CUSTOM * METRIC_COUNT).round() as i64
        }
        None => sum.round() as i64,
    };

    debug!(target: "app::score", score, with_custom = input.custom_value.is_some(), "computed composite score");
    Ok(score)
}

/// Re-derive the composite score of a stored record from its metric
/// fields, for callers persisting edits or verifying backfilled data.
pub fn score_assessment(record: &AssessmentRecord) -> AppResult<i64> {
    composite_score(&AssessmentInput {
        hurt: record.hurt,
        hunger: record.hunger,
        hydration: record.hydration,
        hygiene: record.hygiene,
        happiness: record.happiness,
        mobility: record.mobility,
        custom_value: record.custom_value,
    })
}

fn validate_metric(kind: MetricKind, value: f64) -> AppResult<f64> {
    if METRIC_LEVELS.contains(&value) {
        Ok(value)
    } else {
        Err(AppError::invalid_metric(kind.as_str(), value))
    }
}
