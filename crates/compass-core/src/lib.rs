//! Core library for the Knee Load Compass questionnaire.
//!
//! This crate provides the flow controller that walks a user through the
//! screening, pain and functional questions, the advice engine that turns
//! the answers into a recommendation, the localized content table, and an
//! optional SQLite archive for result records.
//!
//! # Architecture
//!
//! - **Configuration** ([`config`], [`catalog`], [`content`]): immutable step
//!   definitions and texts, validated once at startup
//! - **Session** ([`flow`]): one owned [`FlowController`] per user session,
//!   driven by input events
//! - **Advice** ([`advice`]): a pure function of the answers, the urgent flag
//!   and the language
//! - **Display Wrappers** ([`display`]): markdown views of steps and results
//! - **Archive** ([`archive`], [`db`]): async facade over SQLite storage
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use compass_core::{AdviceKind, Answer, ContentTable, FlowController, Language, StepCatalog, YesNo};
//!
//! # fn main() -> compass_core::Result<()> {
//! let mut flow = FlowController::new(Arc::new(StepCatalog::default()), Language::En);
//! flow.advance()?;
//!
//! for _ in 0..4 {
//!     flow.answer_current(Answer::Boolean(YesNo::No))?;
//!     flow.advance()?;
//! }
//! for score in [2, 5] {
//!     flow.answer_current(Answer::Scale(score))?;
//!     flow.advance()?;
//! }
//! for _ in 0..2 {
//!     flow.answer_current(Answer::Boolean(YesNo::No))?;
//!     flow.advance()?;
//! }
//!
//! let advice = flow.advice(&ContentTable::builtin());
//! assert_eq!(advice.kind, AdviceKind::Moderate);
//! assert_eq!(advice.max_pain_score, Some(5));
//! # Ok(())
//! # }
//! ```

pub mod advice;
pub mod archive;
pub mod catalog;
pub mod config;
pub mod content;
pub mod db;
pub mod display;
pub mod error;
pub mod flow;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use advice::derive_advice;
pub use archive::{ArchiveBuilder, ResultArchive};
pub use catalog::StepCatalog;
pub use config::{CompassBuilder, CompassConfig};
pub use content::{ContentKey, ContentTable};
pub use db::Database;
pub use error::{CompassError, Result};
pub use flow::{is_urgent_answer, FlowController};
pub use models::{
    AdviceKind, AdviceResult, Answer, Answers, FlowPhase, Language, LocalizedText, Question,
    QuestionType, ResultRecord, SessionState, Stage, StepDefinition, StepKind, StoredResult,
    YesNo,
};
pub use params::{AnswerInput, Assess, Id, ListResults};
