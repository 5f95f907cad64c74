//! Supported languages and per-language text.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the supported content languages.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Dutch
    #[default]
    Nl,

    /// English
    En,
}

impl Language {
    /// All supported languages, in the order the content table is checked.
    pub const ALL: [Language; 2] = [Language::Nl, Language::En];

    /// Short code used in serialized records and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Nl => "nl",
            Language::En => "en",
        }
    }

    /// The other language of the pair, used by the language toggle.
    pub fn toggled(self) -> Self {
        match self {
            Language::Nl => Language::En,
            Language::En => Language::Nl,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nl" | "dutch" | "nederlands" => Ok(Language::Nl),
            "en" | "english" | "engels" => Ok(Language::En),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

/// A piece of text available in every supported language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedText {
    pub nl: String,
    pub en: String,
}

impl LocalizedText {
    /// Creates a text from its Dutch and English variants.
    pub fn new(nl: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            nl: nl.into(),
            en: en.into(),
        }
    }

    /// Returns the variant for `language`.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Nl => &self.nl,
            Language::En => &self.en,
        }
    }
}
