//! Answer values and the per-session answer map.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The two boolean sentinels. They serialize as `JA` / `NEE`, the form
/// stored in result records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum YesNo {
    /// Affirmative answer
    #[serde(rename = "JA")]
    Yes,

    /// Negative answer
    #[serde(rename = "NEE")]
    No,
}

impl YesNo {
    /// Serialized sentinel.
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "JA",
            YesNo::No => "NEE",
        }
    }

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "j" | "yes" | "y" | "true" => Ok(YesNo::Yes),
            "nee" | "n" | "no" | "false" => Ok(YesNo::No),
            _ => Err(format!("Invalid yes/no answer: {s}")),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded answer to a single question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Answer {
    /// Answer to a boolean question
    Boolean(YesNo),

    /// Answer to a scale question
    Scale(i32),
}

impl Answer {
    /// True only for an affirmative boolean answer.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Answer::Boolean(YesNo::Yes))
    }

    /// The scale value, if this is a scale answer.
    pub fn as_scale(&self) -> Option<i32> {
        match self {
            Answer::Scale(value) => Some(*value),
            Answer::Boolean(_) => None,
        }
    }
}

impl From<YesNo> for Answer {
    fn from(value: YesNo) -> Self {
        Answer::Boolean(value)
    }
}

impl From<i32> for Answer {
    fn from(value: i32) -> Self {
        Answer::Scale(value)
    }
}

impl FromStr for Answer {
    type Err = String;

    /// Parses raw user input: an integer becomes a scale answer, anything
    /// else must be a yes/no word.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Ok(Answer::Scale(value));
        }
        trimmed.parse::<YesNo>().map(Answer::Boolean)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Boolean(value) => write!(f, "{value}"),
            Answer::Scale(value) => write!(f, "{value}"),
        }
    }
}

/// Answers keyed by question ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or overwrites the answer for `question_id`.
    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) -> Option<Answer> {
        self.0.insert(question_id.into(), answer)
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.0.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Whether `question_id` was answered affirmatively.
    pub fn is_affirmative(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(Answer::is_affirmative)
    }

    /// Scale value for `question_id`, or 0 when absent or not a scale.
    pub fn scale_or_zero(&self, question_id: &str) -> i32 {
        self.get(question_id).and_then(Answer::as_scale).unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Answer)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, Answer)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
