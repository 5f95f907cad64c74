//! Collection wrapper types: stored result history and the step catalog.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::{
    catalog::StepCatalog,
    models::{Language, QuestionType, StepKind, StoredResult},
};

/// Newtype wrapper for displaying archived results, newest first.
///
/// # Examples
///
/// ```rust
/// use compass_core::display::StoredResults;
///
/// let results = StoredResults(vec![]);
/// assert_eq!(results.to_string(), "No saved results.\n");
/// ```
pub struct StoredResults(pub Vec<StoredResult>);

impl StoredResults {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoredResult> {
        self.0.iter()
    }
}

impl Index<usize> for StoredResults {
    type Output = StoredResult;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for StoredResults {
    type Item = StoredResult;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for StoredResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved results.");
        }
        for stored in &self.0 {
            let record = &stored.record;
            let marker = if record.urgent { " (urgent)" } else { "" };
            writeln!(
                f,
                "## {}. {} [{}]{marker}",
                stored.id,
                LocalDateTime(&record.timestamp),
                record.language
            )?;
            writeln!(f)?;
            writeln!(f, "{}", record.advice_short)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The step catalog listed in one language.
pub struct CatalogView<'a> {
    pub catalog: &'a StepCatalog,
    pub language: Language,
}

impl fmt::Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.catalog.steps().iter().enumerate() {
            match &step.kind {
                StepKind::Landing { .. } => {
                    writeln!(f, "{index}. **{}** (landing)", step.title.get(self.language))?;
                }
                StepKind::Question { stage, question } => {
                    let answer_type = match question.kind {
                        QuestionType::Boolean => "ja/nee".to_string(),
                        QuestionType::Scale { min, max } => format!("{min}-{max}"),
                    };
                    writeln!(
                        f,
                        "{index}. **{}** ({stage}, `{}`: {answer_type})",
                        step.title.get(self.language),
                        question.id
                    )?;
                    writeln!(f, "   {}", question.text.get(self.language))?;
                }
            }
        }
        Ok(())
    }
}
