//! Data models for the questionnaire.
//!
//! This module contains the domain types shared by the flow controller, the
//! advice engine and the archive. Display implementations for the richer
//! views live in [`crate::display`] so presentation stays separate from the
//! data.
//!
//! - [`step`]: immutable step and question definitions
//! - [`answer`]: answer values and the answer map
//! - [`session`]: the mutable session state and its phases
//! - [`advice`]: the advice engine's output
//! - [`record`]: serializable result records for external storage
//!
//! # Examples
//!
//! ```rust
//! use compass_core::models::{Answer, Answers, YesNo};
//!
//! let mut answers = Answers::new();
//! answers.insert("s1", Answer::Boolean(YesNo::No));
//! answers.insert("vas_now", "4".parse::<Answer>().unwrap());
//!
//! assert!(!answers.is_affirmative("s1"));
//! assert_eq!(answers.scale_or_zero("vas_now"), 4);
//! assert_eq!(answers.scale_or_zero("vas_after"), 0);
//! ```

pub mod advice;
pub mod answer;
pub mod language;
pub mod record;
pub mod session;
pub mod step;

#[cfg(test)]
mod tests;

pub use advice::{AdviceKind, AdviceResult};
pub use answer::{Answer, Answers, YesNo};
pub use language::{Language, LocalizedText};
pub use record::{ResultRecord, StoredResult};
pub use session::{FlowPhase, SessionState};
pub use step::{Question, QuestionType, Stage, StepDefinition, StepKind};
