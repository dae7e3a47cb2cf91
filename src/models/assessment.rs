use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid values for every wellbeing metric, custom metric included.
pub const METRIC_LEVELS: [f64; 5] = [0.0, 2.5, 5.0, 7.5, 10.0];

/// Upper bound of the composite score (six metrics at their maximum).
pub const MAX_COMPOSITE_SCORE: i64 = 60;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Hurt,
    Hunger,
    Hydration,
    Hygiene,
    Happiness,
    Mobility,
    Custom,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Hurt => "hurt",
            MetricKind::Hunger => "hunger",
            MetricKind::Hydration => "hydration",
            MetricKind::Hygiene => "hygiene",
            MetricKind::Happiness => "happiness",
            MetricKind::Mobility => "mobility",
            MetricKind::Custom => "custom",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MetricKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "hurt" => Ok(MetricKind::Hurt),
            "hunger" => Ok(MetricKind::Hunger),
            "hydration" => Ok(MetricKind::Hydration),
            "hygiene" => Ok(MetricKind::Hygiene),
            "happiness" => Ok(MetricKind::Happiness),
            "mobility" => Ok(MetricKind::Mobility),
            "custom" => Ok(MetricKind::Custom),
            other => Err(format!("unsupported metric kind: {other}")),
        }
    }
}

/// One stored wellbeing assessment, as the store hands it over.
///
/// `date` (`YYYY-MM-DD`) is the calendar day the assessment represents;
/// `created_at` (RFC 3339) is when the record was actually entered and may
/// differ for backfilled entries. The store guarantees at most one record
/// per subject and calendar `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: i64,
    pub subject_id: i64,
    pub date: String,
    pub created_at: String,
    pub hurt: f64,
    pub hunger: f64,
    pub hydration: f64,
    pub hygiene: f64,
    pub happiness: f64,
    pub mobility: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_value: Option<f64>,
    pub score: i64,
}

impl AssessmentRecord {
    pub fn metrics(&self) -> [(MetricKind, f64); 6] {
        [
            (MetricKind::Hurt, self.hurt),
            (MetricKind::Hunger, self.hunger),
            (MetricKind::Hydration, self.hydration),
            (MetricKind::Hygiene, self.hygiene),
            (MetricKind::Happiness, self.happiness),
            (MetricKind::Mobility, self.mobility),
        ]
    }
}

/// Metric values as entered by the assessment form, before the composite
/// score is derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub hurt: f64,
    pub hunger: f64,
    pub hydration: f64,
    pub hygiene: f64,
    pub happiness: f64,
    pub mobility: f64,
    #[serde(default)]
    pub custom_value: Option<f64>,
}

impl AssessmentInput {
    pub fn metrics(&self) -> [(MetricKind, f64); 6] {
        [
            (MetricKind::Hurt, self.hurt),
            (MetricKind::Hunger, self.hunger),
            (MetricKind::Hydration, self.hydration),
            (MetricKind::Hygiene, self.hygiene),
            (MetricKind::Happiness, self.happiness),
            (MetricKind::Mobility, self.mobility),
        ]
    }
}
