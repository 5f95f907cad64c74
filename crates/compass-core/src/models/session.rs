//! Session state owned by the flow controller.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Answers, Language};

/// Mutable state of one questionnaire session.
///
/// `current_step_index` is 0 on the landing step, `1..=N` on the flow steps
/// and `N + 1` once the flow is completed. When `urgent` is set the session is
/// in the urgent terminal state regardless of the index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub current_step_index: usize,
    pub language: Language,
    pub answers: Answers,
    pub urgent: bool,
}

impl SessionState {
    /// Creates a fresh session on the landing step.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}

/// Coarse position of a session in the questionnaire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowPhase {
    Landing,
    Screening,
    Pain,
    Functional,
    Completed,
    Urgent,
}

impl FlowPhase {
    /// Whether no further forward navigation is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, FlowPhase::Completed | FlowPhase::Urgent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowPhase::Landing => "landing",
            FlowPhase::Screening => "screening",
            FlowPhase::Pain => "pain",
            FlowPhase::Functional => "functional",
            FlowPhase::Completed => "completed",
            FlowPhase::Urgent => "urgent",
        }
    }
}

impl fmt::Display for FlowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
