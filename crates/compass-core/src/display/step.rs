//! Markdown view of the step a session is on.

use std::fmt;

use super::advice::AdviceView;
use crate::{
    content::{ContentKey, ContentTable},
    flow::FlowController,
    models::{QuestionType, StepKind},
};

const PROGRESS_WIDTH: usize = 16;

/// Renders whatever the session currently shows: the landing page, a
/// question with its counter and progress bar, or the result.
pub struct StepView<'a> {
    flow: &'a FlowController,
    content: &'a ContentTable,
}

impl<'a> StepView<'a> {
    pub fn new(flow: &'a FlowController, content: &'a ContentTable) -> Self {
        Self { flow, content }
    }
}

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = self.flow.language();
        let text = |key| self.content.text(language, key);

        let Some(step) = self.flow.current_step() else {
            let advice = self.flow.advice(self.content);
            return write!(
                f,
                "{}",
                AdviceView::new(&advice, self.flow.state(), self.flow.catalog(), self.content)
            );
        };

        match &step.kind {
            StepKind::Landing { body } => {
                writeln!(f, "# {}", text(ContentKey::Title))?;
                writeln!(f)?;
                writeln!(f, "{}", text(ContentKey::Subtitle))?;
                writeln!(f)?;
                writeln!(f, "## {}", step.title.get(language))?;
                writeln!(f)?;
                writeln!(f, "{}", body.get(language))?;
                writeln!(f)?;
                writeln!(f, "**{}**", text(ContentKey::GeneralDisclaimer))?;
                writeln!(f)?;
                writeln!(f, "{}", text(ContentKey::StartQuizPrompt))
            }
            StepKind::Question { question, .. } => {
                if let Some((current, total)) = self.flow.step_position() {
                    let counter = self.content.format(
                        language,
                        ContentKey::StepCounter,
                        &[("current", current.to_string()), ("total", total.to_string())],
                    );
                    writeln!(f, "{counter} {}", ProgressBar(self.flow.progress()))?;
                    writeln!(f)?;
                }
                writeln!(f, "## {}", step.title.get(language))?;
                writeln!(f)?;
                writeln!(f, "{}", question.text.get(language))?;
                writeln!(f)?;
                match question.kind {
                    QuestionType::Boolean => writeln!(
                        f,
                        "`ja` = {} / `nee` = {}",
                        text(ContentKey::Yes),
                        text(ContentKey::No)
                    )?,
                    QuestionType::Scale { min, max } => {
                        writeln!(
                            f,
                            "`{min}` = {} ... `{max}` = {}",
                            text(ContentKey::NoPain),
                            text(ContentKey::WorstPain)
                        )?;
                        writeln!(f, "*{}*", text(ContentKey::VasMicrocopy))?;
                    }
                }
                if let Some(answer) = self.flow.state().answers.get(&question.id) {
                    writeln!(f)?;
                    writeln!(f, "> {answer}")?;
                }
                Ok(())
            }
        }
    }
}

/// Text progress bar for a fraction between 0 and 1.
pub struct ProgressBar(pub f64);

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = (self.0.clamp(0.0, 1.0) * PROGRESS_WIDTH as f64).round() as usize;
        write!(
            f,
            "[{}{}] {:>3}%",
            "#".repeat(filled),
            "-".repeat(PROGRESS_WIDTH - filled),
            (self.0.clamp(0.0, 1.0) * 100.0).round() as u32
        )
    }
}
