use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentFrequency {
    Daily,
    Weekly,
}

impl AssessmentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentFrequency::Daily => "daily",
            AssessmentFrequency::Weekly => "weekly",
        }
    }

    pub fn is_weekly(&self) -> bool {
        matches!(self, AssessmentFrequency::Weekly)
    }
}

impl Default for AssessmentFrequency {
    fn default() -> Self {
        AssessmentFrequency::Daily
    }
}

impl fmt::Display for AssessmentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AssessmentFrequency {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "daily" => Ok(AssessmentFrequency::Daily),
            "weekly" => Ok(AssessmentFrequency::Weekly),
            other => Err(format!("unsupported assessment frequency: {other}")),
        }
    }
}

/// The tracked pet, as the store hands it over.
///
/// Once `paused_at` is set, the visible trend window freezes at the pause
/// point instead of extending to the present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    pub id: i64,
    pub name: String,
    pub assessment_frequency: AssessmentFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tracking_label: Option<String>,
}

impl SubjectRecord {
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn has_custom_tracking(&self) -> bool {
        self.custom_tracking_label.is_some()
    }
}
