//! Serializable result records handed to the archive.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Answers, Language};

/// Snapshot of a finished (or urgent) session for external storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRecord {
    /// When the result was recorded (UTC)
    pub timestamp: Timestamp,

    /// Session language at the time of recording
    pub language: Language,

    /// All answers given
    pub answers: Answers,

    /// Short advice text in the session language
    pub advice_short: String,

    /// Whether the session ended in the urgent state
    pub urgent: bool,
}

/// A result record as stored in the archive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredResult {
    /// Archive row ID
    pub id: u64,

    #[serde(flatten)]
    pub record: ResultRecord,
}
