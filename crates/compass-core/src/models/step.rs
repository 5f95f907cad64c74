//! Step and question definitions making up the step catalog.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Answer, LocalizedText};
use crate::error::{CompassError, Result};

/// Questionnaire stage a question step belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Referral screening; an affirmative answer ends the flow as urgent
    Screening,

    /// VAS pain scores
    Pain,

    /// Functional (AKNS) questions that only attach warnings
    Akns,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Screening => "screening",
            Stage::Pain => "pain",
            Stage::Akns => "akns",
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "screening" => Ok(Stage::Screening),
            "pain" => Ok(Stage::Pain),
            "akns" | "functional" => Ok(Stage::Akns),
            _ => Err(format!("Invalid stage: {s}")),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared answer type of a question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionType {
    /// Yes / no question
    Boolean,

    /// Integer scale with inclusive bounds
    Scale { min: i32, max: i32 },
}

/// A single question shown on a question step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Unique answer key
    pub id: String,

    #[serde(flatten)]
    pub kind: QuestionType,

    /// Prompt shown to the patient
    pub text: LocalizedText,
}

impl Question {
    /// Checks `answer` against the declared type and range.
    ///
    /// Values are never clamped: anything outside the declared range is
    /// rejected with [`CompassError::InvalidAnswer`].
    pub fn validate(&self, answer: &Answer) -> Result<()> {
        match (self.kind, answer) {
            (QuestionType::Boolean, Answer::Boolean(_)) => Ok(()),
            (QuestionType::Scale { min, max }, Answer::Scale(value)) => {
                if (min..=max).contains(value) {
                    Ok(())
                } else {
                    Err(CompassError::invalid_answer(&self.id)
                        .with_reason(format!("{value} is outside {min}..={max}")))
                }
            }
            (QuestionType::Boolean, Answer::Scale(value)) => Err(CompassError::invalid_answer(
                &self.id,
            )
            .with_reason(format!("expected JA or NEE, got {value}"))),
            (QuestionType::Scale { min, max }, Answer::Boolean(value)) => {
                Err(CompassError::invalid_answer(&self.id)
                    .with_reason(format!("expected an integer in {min}..={max}, got {value}")))
            }
        }
    }
}

/// What a step shows: the landing page or a single question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepKind {
    /// Welcome page shown before the flow starts
    Landing { body: LocalizedText },

    /// One question within a stage
    Question { stage: Stage, question: Question },
}

/// Immutable definition of one step in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepDefinition {
    /// Unique step identifier
    pub id: String,

    /// Heading shown above the step
    pub title: LocalizedText,

    #[serde(flatten)]
    pub kind: StepKind,
}

impl StepDefinition {
    pub fn is_landing(&self) -> bool {
        matches!(self.kind, StepKind::Landing { .. })
    }

    /// Stage of a question step; `None` for the landing step.
    pub fn stage(&self) -> Option<Stage> {
        match &self.kind {
            StepKind::Question { stage, .. } => Some(*stage),
            StepKind::Landing { .. } => None,
        }
    }

    /// The question asked on this step, if any.
    pub fn question(&self) -> Option<&Question> {
        match &self.kind {
            StepKind::Question { question, .. } => Some(question),
            StepKind::Landing { .. } => None,
        }
    }
}
