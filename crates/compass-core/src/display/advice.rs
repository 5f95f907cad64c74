//! Result views: the markdown advice page and the plain share text.

use std::fmt;

use crate::{
    catalog::{StepCatalog, AK1, AK2, VAS_AFTER, VAS_NOW},
    content::{ContentKey, ContentTable},
    models::{AdviceResult, Language, SessionState},
};

/// Markdown result page for a finished or urgent session.
///
/// The urgent page shows only the referral advice. The regular page adds the
/// pain subtitle, warnings and a score breakdown listing both VAS scores and
/// the functional answers.
pub struct AdviceView<'a> {
    advice: &'a AdviceResult,
    state: &'a SessionState,
    catalog: &'a StepCatalog,
    content: &'a ContentTable,
}

impl<'a> AdviceView<'a> {
    pub fn new(
        advice: &'a AdviceResult,
        state: &'a SessionState,
        catalog: &'a StepCatalog,
        content: &'a ContentTable,
    ) -> Self {
        Self {
            advice,
            state,
            catalog,
            content,
        }
    }
}

impl fmt::Display for AdviceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = self.state.language;
        let text = |key| self.content.text(language, key);

        if self.advice.is_urgent() {
            writeln!(
                f,
                "# {} ({})",
                text(ContentKey::ResultTitle),
                text(ContentKey::Urgent)
            )?;
        } else {
            writeln!(f, "# {}", text(ContentKey::ResultTitle))?;
            if let Some(subtitle) = pain_subtitle(self.advice, language, self.content) {
                writeln!(f)?;
                writeln!(f, "{subtitle}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "## {}", self.advice.short_text)?;
        writeln!(f)?;
        writeln!(f, "{}", self.advice.long_text)?;

        for warning in &self.advice.warnings {
            writeln!(f)?;
            writeln!(f, "> **{warning}**")?;
        }

        if self.advice.is_urgent() {
            writeln!(f)?;
            writeln!(
                f,
                "**{}** {}",
                text(ContentKey::ScoreAkns),
                text(ContentKey::AknsYes)
            )?;
        } else {
            writeln!(f)?;
            writeln!(f, "### {}", text(ContentKey::ResultBreakdown))?;
            writeln!(f)?;
            for (label, value) in breakdown(self.state, self.catalog, self.content) {
                writeln!(f, "- **{label}** {value}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "*{}*", text(ContentKey::GeneralDisclaimer))
    }
}

/// Plain-text summary of a result, suitable for pasting into a message.
pub struct ShareText<'a> {
    advice: &'a AdviceResult,
    state: &'a SessionState,
    catalog: &'a StepCatalog,
    content: &'a ContentTable,
}

impl<'a> ShareText<'a> {
    pub fn new(
        advice: &'a AdviceResult,
        state: &'a SessionState,
        catalog: &'a StepCatalog,
        content: &'a ContentTable,
    ) -> Self {
        Self {
            advice,
            state,
            catalog,
            content,
        }
    }
}

impl fmt::Display for ShareText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = self.state.language;
        let text = |key| self.content.text(language, key);

        writeln!(
            f,
            "{} - {}",
            text(ContentKey::Title),
            text(ContentKey::Subtitle)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", text(ContentKey::ResultTitle))?;
        if let Some(subtitle) = pain_subtitle(self.advice, language, self.content) {
            writeln!(f, "{subtitle}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.advice.short_text)?;
        writeln!(f, "{}", self.advice.long_text)?;
        writeln!(f)?;
        for warning in &self.advice.warnings {
            writeln!(f, "{warning}")?;
        }

        if !self.advice.is_urgent() {
            writeln!(f)?;
            writeln!(f, "{}", text(ContentKey::ResultBreakdown))?;
            for (label, value) in breakdown(self.state, self.catalog, self.content) {
                writeln!(f, "{label} {value}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f, "{}", text(ContentKey::GeneralDisclaimer))
    }
}

fn pain_subtitle(
    advice: &AdviceResult,
    language: Language,
    content: &ContentTable,
) -> Option<String> {
    advice.max_pain_score.map(|score| {
        content.format(
            language,
            ContentKey::ResultSubtitlePain,
            &[("score", score.to_string())],
        )
    })
}

/// `(label, value)` rows of the score breakdown.
fn breakdown(
    state: &SessionState,
    catalog: &StepCatalog,
    content: &ContentTable,
) -> Vec<(String, String)> {
    let language = state.language;
    let score = |id| {
        state
            .answers
            .get(id)
            .map_or_else(|| "-".to_string(), ToString::to_string)
    };

    let mut rows = vec![
        (
            content.text(language, ContentKey::ScoreNow).into_owned(),
            score(VAS_NOW),
        ),
        (
            content.text(language, ContentKey::ScoreAfter).into_owned(),
            score(VAS_AFTER),
        ),
    ];

    for id in [AK1, AK2] {
        let label = catalog
            .find_question(id)
            .map_or_else(|| id.to_string(), |(_, _, question)| {
                question.text.get(language).to_string()
            });
        let key = if state.answers.is_affirmative(id) {
            ContentKey::AknsYes
        } else {
            ContentKey::AknsNo
        };
        rows.push((format!("{label}:"), content.text(language, key).into_owned()));
    }
    rows
}
