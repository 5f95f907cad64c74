//! Flow controller: the questionnaire state machine.
//!
//! ```text
//! Landing(0) ─▶ Screening(1..=4) ─▶ Pain(5..=6) ─▶ Functional(7..=8) ─▶ Completed(9)
//!                     │
//!                     └─ affirmative screening answer ─▶ Urgent
//! ```
//!
//! A [`FlowController`] owns one session. It is a plain value: create one per
//! user session and feed it input events one at a time. The urgent rule is
//! checked in two places, when a screening answer is submitted and when the
//! last screening step is left, and both use [`is_urgent_answer`].
//!
//! Leaving `Urgent` is possible through [`FlowController::restart`] and also
//! through [`FlowController::retreat`], which clears the flag and steps back
//! into the screening questions.

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, info};

use crate::{
    advice::derive_advice,
    catalog::StepCatalog,
    content::ContentTable,
    error::{CompassError, Result},
    models::{
        AdviceResult, Answer, FlowPhase, Language, ResultRecord, SessionState, Stage,
        StepDefinition,
    },
    params::Assess,
};

/// Whether `answer` on a step of `stage` sends the session to the urgent
/// terminal state.
pub fn is_urgent_answer(stage: Option<Stage>, answer: &Answer) -> bool {
    stage == Some(Stage::Screening) && answer.is_affirmative()
}

/// State machine over the step catalog for a single session.
#[derive(Debug, Clone)]
pub struct FlowController {
    catalog: Arc<StepCatalog>,
    state: SessionState,
}

impl FlowController {
    /// Starts a session on the landing step.
    pub fn new(catalog: Arc<StepCatalog>, language: Language) -> Self {
        Self {
            catalog,
            state: SessionState::new(language),
        }
    }

    /// Runs a full set of answers through a fresh session, step by step, and
    /// returns the session in its terminal state.
    ///
    /// Answers the flow never reaches (for example after an urgent screening
    /// answer) are ignored.
    ///
    /// # Errors
    ///
    /// - [`CompassError::UnknownQuestion`] for an answer ID not in the catalog
    /// - [`CompassError::StepIncomplete`] when a reached question has no answer
    /// - [`CompassError::InvalidAnswer`] for a type or range mismatch
    pub fn replay(catalog: Arc<StepCatalog>, params: &Assess) -> Result<Self> {
        let answers = params.answer_map();
        if let Some((id, _)) = answers
            .iter()
            .find(|(id, _)| catalog.find_question(id).is_none())
        {
            return Err(CompassError::UnknownQuestion { id: id.clone() });
        }

        let mut flow = Self::new(catalog, params.language);
        while !flow.is_finished() {
            let pending = flow
                .current_step()
                .and_then(StepDefinition::question)
                .map(|question| question.id.clone());
            if let Some(question_id) = pending {
                if let Some(answer) = answers.get(&question_id) {
                    flow.submit_answer(&question_id, *answer)?;
                    if flow.is_finished() {
                        break;
                    }
                }
            }
            flow.advance()?;
        }
        Ok(flow)
    }

    /// Read-only snapshot of the session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn is_urgent(&self) -> bool {
        self.state.urgent
    }

    /// Index one past the last flow step.
    fn completed_index(&self) -> usize {
        self.catalog.flow_len() + 1
    }

    /// The step being displayed, or `None` in a terminal state.
    pub fn current_step(&self) -> Option<&StepDefinition> {
        if self.state.urgent {
            return None;
        }
        self.catalog.get(self.state.current_step_index)
    }

    /// Where the session is in the questionnaire.
    pub fn phase(&self) -> FlowPhase {
        if self.state.urgent {
            return FlowPhase::Urgent;
        }
        match self.current_step() {
            None => FlowPhase::Completed,
            Some(step) => match step.stage() {
                None => FlowPhase::Landing,
                Some(Stage::Screening) => FlowPhase::Screening,
                Some(Stage::Pain) => FlowPhase::Pain,
                Some(Stage::Akns) => FlowPhase::Functional,
            },
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase().is_terminal()
    }

    /// Fraction of the flow done: 0 on the landing step, `index / N` on the
    /// flow steps and 1 in terminal states.
    pub fn progress(&self) -> f64 {
        if self.is_finished() {
            return 1.0;
        }
        self.state.current_step_index as f64 / self.catalog.flow_len() as f64
    }

    /// `(current, total)` for the step counter while on a flow step.
    pub fn step_position(&self) -> Option<(usize, usize)> {
        match self.phase() {
            FlowPhase::Screening | FlowPhase::Pain | FlowPhase::Functional => {
                Some((self.state.current_step_index, self.catalog.flow_len()))
            }
            _ => None,
        }
    }

    /// Records an answer to the question on the current step.
    ///
    /// The value must match the question's type and range; nothing is
    /// clamped. An affirmative screening answer sets the urgent flag at once.
    ///
    /// # Errors
    ///
    /// - [`CompassError::SessionClosed`] on the landing step or in a terminal
    ///   state
    /// - [`CompassError::UnknownQuestion`] for an ID not in the catalog
    /// - [`CompassError::QuestionNotOnCurrentStep`] for a question of another
    ///   step
    /// - [`CompassError::InvalidAnswer`] for a type or range mismatch
    pub fn submit_answer(&mut self, question_id: &str, answer: Answer) -> Result<FlowPhase> {
        let Some(step) = self.current_step().filter(|step| !step.is_landing()) else {
            return Err(CompassError::SessionClosed);
        };
        let Some(question) = step.question().filter(|question| question.id == question_id)
        else {
            return Err(match self.catalog.find_question(question_id) {
                Some(_) => CompassError::QuestionNotOnCurrentStep {
                    id: question_id.to_string(),
                    step: step.id.clone(),
                },
                None => CompassError::UnknownQuestion {
                    id: question_id.to_string(),
                },
            });
        };
        question.validate(&answer)?;

        let urgent = is_urgent_answer(step.stage(), &answer);
        debug!("Answer {question_id} = {answer}");
        self.state.answers.insert(question_id, answer);

        if urgent {
            info!("Screening question {question_id} answered affirmatively, urgent advice");
            self.state.urgent = true;
        }
        Ok(self.phase())
    }

    /// Records an answer to whatever question the current step asks.
    pub fn answer_current(&mut self, answer: Answer) -> Result<FlowPhase> {
        let Some(question_id) = self
            .current_step()
            .and_then(StepDefinition::question)
            .map(|question| question.id.clone())
        else {
            return Err(CompassError::SessionClosed);
        };
        self.submit_answer(&question_id, answer)
    }

    /// True on the landing step, or when the current question has an answer.
    /// Always false in terminal states.
    pub fn can_advance(&self) -> bool {
        match self.current_step() {
            None => false,
            Some(step) => match step.question() {
                None => true,
                Some(question) => self.state.answers.contains(&question.id),
            },
        }
    }

    /// Moves to the next step.
    ///
    /// Leaving the last screening step with any affirmative screening answer
    /// ends the flow as urgent without moving. Advancing past the last flow
    /// step completes the flow. In a terminal state this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CompassError::StepIncomplete`] when the current question has
    /// no answer; the state is left unchanged.
    pub fn advance(&mut self) -> Result<FlowPhase> {
        let Some(step) = self.current_step() else {
            return Ok(self.phase());
        };
        if !self.can_advance() {
            return Err(CompassError::StepIncomplete {
                step: step.id.clone(),
            });
        }

        if Some(self.state.current_step_index) == self.catalog.screening_end()
            && self.screening_triggered()
        {
            info!("Leaving screening with an affirmative answer, urgent advice");
            self.state.urgent = true;
            return Ok(FlowPhase::Urgent);
        }

        self.state.current_step_index =
            (self.state.current_step_index + 1).min(self.completed_index());
        let phase = self.phase();
        if phase == FlowPhase::Completed {
            info!("Questionnaire completed");
        } else {
            debug!("Advanced to step {}", self.state.current_step_index);
        }
        Ok(phase)
    }

    fn screening_triggered(&self) -> bool {
        self.catalog.screening_questions().any(|question| {
            self.state
                .answers
                .get(&question.id)
                .is_some_and(|answer| is_urgent_answer(Some(Stage::Screening), answer))
        })
    }

    /// Moves one step back and clears the urgent flag.
    ///
    /// The landing step cannot be re-entered: on the landing step this does
    /// nothing and elsewhere the index never drops below 1.
    pub fn retreat(&mut self) -> FlowPhase {
        if self.state.current_step_index == 0 {
            return self.phase();
        }
        if self.state.urgent {
            debug!("Urgent state cleared by navigating back");
        }
        self.state.current_step_index = self.state.current_step_index.saturating_sub(1).max(1);
        self.state.urgent = false;
        self.phase()
    }

    /// Returns to the landing step with no answers. The language is kept.
    pub fn restart(&mut self) {
        debug!("Session restarted");
        self.state = SessionState::new(self.state.language);
    }

    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;
    }

    /// Switches between Dutch and English and returns the new language.
    pub fn toggle_language(&mut self) -> Language {
        self.state.language = self.state.language.toggled();
        self.state.language
    }

    /// Advice for the current answers in the session language.
    pub fn advice(&self, content: &ContentTable) -> AdviceResult {
        derive_advice(
            &self.state.answers,
            self.state.urgent,
            self.state.language,
            content,
        )
    }

    /// Serializable record of the session for external storage.
    pub fn result_record(&self, content: &ContentTable, timestamp: Timestamp) -> ResultRecord {
        ResultRecord {
            timestamp,
            language: self.state.language,
            answers: self.state.answers.clone(),
            advice_short: self.advice(content).short_text,
            urgent: self.state.urgent,
        }
    }
}
