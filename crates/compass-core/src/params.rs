//! Parameter structures shared by the front ends.
//!
//! These types carry no framework derives beyond serde. Interface layers wrap
//! them with their own argument types (clap in the CLI) and convert with
//! `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::CompassError,
    models::{Answer, Answers, Language},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the stored result
    pub id: u64,
}

/// Parameters for listing archived results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResults {
    /// Maximum number of results, newest first
    #[serde(default)]
    pub limit: Option<u32>,
    /// Only results recorded in this language
    #[serde(default)]
    pub language: Option<Language>,
}

/// A single `question_id=value` answer given on the command line.
///
/// # Examples
///
/// ```rust
/// use compass_core::{params::AnswerInput, Answer, YesNo};
///
/// let input: AnswerInput = "s1=nee".parse().unwrap();
/// assert_eq!(input.question_id, "s1");
/// assert_eq!(input.value, Answer::Boolean(YesNo::No));
///
/// assert!("vas_now".parse::<AnswerInput>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerInput {
    pub question_id: String,
    pub value: Answer,
}

impl FromStr for AnswerInput {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((id, value)) = s.split_once('=') else {
            return Err(CompassError::invalid_answer(s.trim())
                .with_reason("expected QUESTION_ID=VALUE"));
        };

        let question_id = id.trim();
        if question_id.is_empty() {
            return Err(CompassError::invalid_answer(s.trim()).with_reason("missing question id"));
        }

        let value = value
            .trim()
            .parse::<Answer>()
            .map_err(|e| CompassError::invalid_answer(question_id).with_reason(e))?;

        Ok(Self {
            question_id: question_id.to_string(),
            value,
        })
    }
}

/// Parameters for a one-shot assessment from a full set of answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assess {
    pub answers: Vec<AnswerInput>,
    pub language: Language,
}

impl Assess {
    /// Collects the inputs into an answer map; later duplicates win.
    pub fn answer_map(&self) -> Answers {
        self.answers
            .iter()
            .map(|input| (input.question_id.clone(), input.value))
            .collect()
    }
}
