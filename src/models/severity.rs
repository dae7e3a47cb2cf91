use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use crate::error::{AppError, AppResult};
use crate::models::assessment::MAX_COMPOSITE_SCORE;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Low,
    Moderate,
    Good,
    Excellent,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::Good => "good",
            Severity::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cut of a severity ramp: scores strictly below `below` classify as
/// `severity`, unless an earlier cut already matched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCut {
    pub below: i64,
    pub severity: Severity,
}

/// Score-to-severity bucketing policy shared by every consumer.
///
/// Cuts are upper-exclusive and must be strictly increasing; scores at or
/// above the last cut classify as `top`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeverityPolicy {
    cuts: Vec<SeverityCut>,
    top: Severity,
}

impl SeverityPolicy {
    pub fn new(cuts: Vec<SeverityCut>, top: Severity) -> AppResult<Self> {
        if cuts.is_empty() {
            return Err(AppError::validation("severity policy needs at least one cut"));
        }
        let mut previous = 0;
        for cut in &cuts {
            if cut.below <= previous || cut.below > MAX_COMPOSITE_SCORE {
                return Err(AppError::validation_with_details(
                    "severity cuts must be strictly increasing within the score range",
                    json!({ "below": cut.below, "max": MAX_COMPOSITE_SCORE }),
                ));
            }
            previous = cut.below;
        }
        Ok(Self { cuts, top })
    }

    pub fn classify(&self, score: i64) -> Severity {
        for cut in &self.cuts {
            if score < cut.below {
                return cut.severity;
            }
        }
        self.top
    }
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self {
            cuts: vec![
                SeverityCut {
                    below: 6,
                    severity: Severity::Critical,
                },
                SeverityCut {
                    below: 15,
                    severity: Severity::Low,
                },
                SeverityCut {
                    below: 30,
                    severity: Severity::Moderate,
                },
                SeverityCut {
                    below: 45,
                    severity: Severity::Good,
                },
            ],
            top: Severity::Excellent,
        }
    }
}
