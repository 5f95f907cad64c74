//! Advice result produced by the advice engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of advice shown on the result screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    /// A screening question was answered affirmatively
    Urgent,

    /// Highest pain score 0 to 3
    Low,

    /// Highest pain score 4 or 5
    Moderate,

    /// Highest pain score 6 or more
    High,
}

impl AdviceKind {
    /// Classifies the highest VAS score. Boundaries are inclusive:
    /// `..=3` low, `4..=5` moderate, `6..` high.
    pub fn from_pain_score(score: i32) -> Self {
        match score {
            i32::MIN..=3 => AdviceKind::Low,
            4..=5 => AdviceKind::Moderate,
            _ => AdviceKind::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceKind::Urgent => "urgent",
            AdviceKind::Low => "low",
            AdviceKind::Moderate => "moderate",
            AdviceKind::High => "high",
        }
    }
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Localized advice derived from a session's answers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdviceResult {
    pub kind: AdviceKind,

    /// `max(vas_now, vas_after)`; not computed for urgent advice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pain_score: Option<i32>,

    pub short_text: String,

    pub long_text: String,

    /// Functional warnings, ak1 before ak2
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl AdviceResult {
    pub fn is_urgent(&self) -> bool {
        self.kind == AdviceKind::Urgent
    }
}
