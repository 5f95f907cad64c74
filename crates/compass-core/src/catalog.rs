//! The ordered step catalog driving the questionnaire.
//!
//! A [`StepCatalog`] is immutable configuration: the canonical flow order,
//! with the landing step at index 0 followed by one question step per
//! question. Construction validates the structural invariants so the flow
//! controller can rely on them:
//!
//! - index 0 is the landing step and no other step is a landing step
//! - step IDs and question IDs are unique
//! - scale ranges satisfy `min <= max`
//! - screening steps form a single block starting at index 1
//! - `vas_now` and `vas_after` are scale questions and `ak1` and `ak2` are
//!   yes/no questions, since the advice engine reads them

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CompassError, IoResultExt, Result},
    models::{LocalizedText, Question, QuestionType, Stage, StepDefinition, StepKind},
};

/// Answer key of the current pain score.
pub const VAS_NOW: &str = "vas_now";
/// Answer key of the pain score after activity.
pub const VAS_AFTER: &str = "vas_after";
/// Answer key of "pain worsens with walking or stairs".
pub const AK1: &str = "ak1";
/// Answer key of "pain worsens with jumping or running".
pub const AK2: &str = "ak2";

/// Validated, ordered list of step definitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<StepDefinition>", into = "Vec<StepDefinition>")]
pub struct StepCatalog {
    steps: Vec<StepDefinition>,
    screening_end: Option<usize>,
}

impl StepCatalog {
    /// Builds a catalog after checking its invariants.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self> {
        match steps.first() {
            Some(step) if step.is_landing() => {}
            Some(step) => {
                return Err(CompassError::invalid_catalog(format!(
                    "step 0 ('{}') must be the landing step",
                    step.id
                )))
            }
            None => return Err(CompassError::invalid_catalog("catalog has no steps")),
        }
        if steps.len() < 2 {
            return Err(CompassError::invalid_catalog("catalog has no question steps"));
        }

        let mut step_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        for (index, step) in steps.iter().enumerate() {
            if !step_ids.insert(step.id.as_str()) {
                return Err(CompassError::invalid_catalog(format!(
                    "duplicate step id '{}'",
                    step.id
                )));
            }
            match &step.kind {
                StepKind::Landing { .. } if index > 0 => {
                    return Err(CompassError::invalid_catalog(format!(
                        "landing step '{}' found at index {index}",
                        step.id
                    )))
                }
                StepKind::Landing { .. } => {}
                StepKind::Question { question, .. } => {
                    if !question_ids.insert(question.id.as_str()) {
                        return Err(CompassError::invalid_catalog(format!(
                            "duplicate question id '{}'",
                            question.id
                        )));
                    }
                    if let QuestionType::Scale { min, max } = question.kind {
                        if min > max {
                            return Err(CompassError::invalid_catalog(format!(
                                "question '{}' has an empty range {min}..={max}",
                                question.id
                            )));
                        }
                    }
                }
            }
        }

        let screening_end = Self::screening_block_end(&steps)?;
        Self::check_advice_questions(&steps)?;

        Ok(Self {
            steps,
            screening_end,
        })
    }

    /// The advice engine reads both VAS scores and both functional answers,
    /// so those questions must exist with the types it expects.
    fn check_advice_questions(steps: &[StepDefinition]) -> Result<()> {
        for (question_id, expects_scale) in
            [(VAS_NOW, true), (VAS_AFTER, true), (AK1, false), (AK2, false)]
        {
            let kind = steps
                .iter()
                .filter_map(StepDefinition::question)
                .find(|question| question.id == question_id)
                .map(|question| question.kind);
            match kind {
                None => {
                    return Err(CompassError::invalid_catalog(format!(
                        "required question '{question_id}' is missing"
                    )))
                }
                Some(QuestionType::Scale { .. }) if !expects_scale => {
                    return Err(CompassError::invalid_catalog(format!(
                        "question '{question_id}' must be a yes/no question"
                    )))
                }
                Some(QuestionType::Boolean) if expects_scale => {
                    return Err(CompassError::invalid_catalog(format!(
                        "question '{question_id}' must be a scale question"
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Returns the index of the last screening step, checking that the
    /// screening steps are contiguous and start right after the landing step.
    fn screening_block_end(steps: &[StepDefinition]) -> Result<Option<usize>> {
        let indices: Vec<usize> = steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.stage() == Some(Stage::Screening))
            .map(|(index, _)| index)
            .collect();

        let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
            return Ok(None);
        };
        if first != 1 || last - first + 1 != indices.len() {
            return Err(CompassError::invalid_catalog(
                "screening steps must form one block starting at index 1",
            ));
        }
        Ok(Some(last))
    }

    /// Parses and validates a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let steps: Vec<StepDefinition> = serde_json::from_str(json)?;
        Self::new(steps)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).fs_context(path)?;
        Self::from_json(&json)
    }

    /// All steps in flow order.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of question steps (N); the completed state sits at index N + 1.
    pub fn flow_len(&self) -> usize {
        self.steps.len() - 1
    }

    /// Index of the last screening step, if the catalog has any.
    pub fn screening_end(&self) -> Option<usize> {
        self.screening_end
    }

    /// Finds the step asking `question_id`, with its index.
    pub fn find_question(&self, question_id: &str) -> Option<(usize, &StepDefinition, &Question)> {
        self.steps.iter().enumerate().find_map(|(index, step)| {
            step.question()
                .filter(|question| question.id == question_id)
                .map(|question| (index, step, question))
        })
    }

    /// All questions of the screening stage.
    pub fn screening_questions(&self) -> impl Iterator<Item = &Question> {
        self.steps
            .iter()
            .filter(|step| step.stage() == Some(Stage::Screening))
            .filter_map(StepDefinition::question)
    }

    /// The built-in Knee Load Compass catalog: landing, four screening
    /// questions, two VAS scores and two functional questions.
    pub fn knee_load_compass() -> Self {
        let steps = vec![
            StepDefinition {
                id: "landing".to_string(),
                title: LocalizedText::new("Knie belasting compas", "Knee Load Compass"),
                kind: StepKind::Landing {
                    body: LocalizedText::new(
                        "Welkom, deze tool helpt u advies te geven bij PFPS. De informatie is geen medisch advies.",
                        "Welcome, this tool helps provide advice regarding PFPS. The information provided is not medical advice.",
                    ),
                },
            },
            boolean_step(
                "screening_s1",
                Stage::Screening,
                LocalizedText::new("Screening (1/4)", "Screening (1/4)"),
                "s1",
                LocalizedText::new(
                    "Zijn uw klachten veranderd sinds het krijgen van de diagnose PFPS?",
                    "Have your symptoms changed since being diagnosed with PFPS?",
                ),
            ),
            boolean_step(
                "screening_s2",
                Stage::Screening,
                LocalizedText::new("Screening (2/4)", "Screening (2/4)"),
                "s2",
                LocalizedText::new(
                    "Heeft u recent een val of ander trauma gehad wat uw kniepijn beïnvloed heeft?",
                    "Have you recently had a fall or other trauma affecting your knee pain?",
                ),
            ),
            boolean_step(
                "screening_s3",
                Stage::Screening,
                LocalizedText::new("Screening (3/4)", "Screening (3/4)"),
                "s3",
                LocalizedText::new(
                    "Is uw knie opgezwollen, blauw of ziet er anders uit dan normaal?",
                    "Is your knee swollen, bruised, or does it look different than normal?",
                ),
            ),
            boolean_step(
                "screening_s4",
                Stage::Screening,
                LocalizedText::new("Screening (4/4)", "Screening (4/4)"),
                "s4",
                LocalizedText::new(
                    "Heeft u naast kniepijn nog andere aandoeningen of klachten?",
                    "Do you have other conditions or complaints besides knee pain?",
                ),
            ),
            vas_step(
                "pain_vas_now",
                LocalizedText::new("Pijnmeting (1/2)", "Pain Measurement (1/2)"),
                VAS_NOW,
                LocalizedText::new(
                    "Als u een cijfer van 0 t/m 10 moet geven aan de pijn die u nu ervaart, waarbij 0 geen pijn is en 10 de ergste pijn die u zich kunt voorstellen, welk cijfer zou dat zijn?",
                    "If you had to give a number from 0 to 10 for the pain you are currently experiencing, where 0 is no pain and 10 is the worst pain imaginable, what number would that be?",
                ),
            ),
            vas_step(
                "pain_vas_after",
                LocalizedText::new("Pijnmeting (2/2)", "Pain Measurement (2/2)"),
                VAS_AFTER,
                LocalizedText::new(
                    "Als u een cijfer van 0 t/m 10 moet geven aan de pijn die u ervaarde, waarbij 0 geen pijn is en 10 de ergste pijn die u zich kunt voorstellen, na de laatste keer dat u iets actiefs gedaan had welk cijfer zou dat zijn?",
                    "If you had to give a number from 0 to 10 for the pain you experienced after the last time you did something active, what number would that be?",
                ),
            ),
            boolean_step(
                "akns_ak1",
                Stage::Akns,
                LocalizedText::new("Activiteiten & Functie (1/2)", "Activities & Function (1/2)"),
                AK1,
                LocalizedText::new(
                    "Wordt de pijn erger bij lopen of traplopen of andere matige inspanning?",
                    "Does the pain worsen with walking, climbing stairs, or other moderate exertion?",
                ),
            ),
            boolean_step(
                "akns_ak2",
                Stage::Akns,
                LocalizedText::new("Activiteiten & Functie (2/2)", "Activities & Function (2/2)"),
                AK2,
                LocalizedText::new(
                    "Wordt de pijn erger bij springen, rennen of andere activiteiten waarbij u de knie veel gebruikt?",
                    "Does the pain worsen with jumping, running, or other activities where you use your knee extensively?",
                ),
            ),
        ];

        Self {
            steps,
            screening_end: Some(4),
        }
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::knee_load_compass()
    }
}

impl TryFrom<Vec<StepDefinition>> for StepCatalog {
    type Error = CompassError;

    fn try_from(steps: Vec<StepDefinition>) -> Result<Self> {
        Self::new(steps)
    }
}

impl From<StepCatalog> for Vec<StepDefinition> {
    fn from(catalog: StepCatalog) -> Self {
        catalog.steps
    }
}

fn boolean_step(
    id: &str,
    stage: Stage,
    title: LocalizedText,
    question_id: &str,
    text: LocalizedText,
) -> StepDefinition {
    StepDefinition {
        id: id.to_string(),
        title,
        kind: StepKind::Question {
            stage,
            question: Question {
                id: question_id.to_string(),
                kind: QuestionType::Boolean,
                text,
            },
        },
    }
}

fn vas_step(id: &str, title: LocalizedText, question_id: &str, text: LocalizedText) -> StepDefinition {
    StepDefinition {
        id: id.to_string(),
        title,
        kind: StepKind::Question {
            stage: Stage::Pain,
            question: Question {
                id: question_id.to_string(),
                kind: QuestionType::Scale { min: 0, max: 10 },
                text,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let builtin = StepCatalog::knee_load_compass();
        let validated = StepCatalog::new(builtin.steps().to_vec()).unwrap();
        assert_eq!(validated, builtin);
        assert_eq!(builtin.len(), 9);
        assert_eq!(builtin.flow_len(), 8);
        assert_eq!(builtin.screening_end(), Some(4));
        assert_eq!(builtin.screening_questions().count(), 4);
    }

    #[test]
    fn test_find_question() {
        let catalog = StepCatalog::default();
        let (index, step, question) = catalog.find_question(VAS_AFTER).unwrap();
        assert_eq!(index, 6);
        assert_eq!(step.id, "pain_vas_after");
        assert_eq!(question.kind, QuestionType::Scale { min: 0, max: 10 });
        assert!(catalog.find_question("missing").is_none());
    }

    #[test]
    fn test_rejects_missing_landing() {
        let mut steps = StepCatalog::default().steps().to_vec();
        steps.remove(0);
        let err = StepCatalog::new(steps).unwrap_err();
        assert!(err.to_string().contains("must be the landing step"));
    }

    #[test]
    fn test_rejects_duplicate_question_ids() {
        let mut steps = StepCatalog::default().steps().to_vec();
        let mut copy = steps[2].clone();
        copy.id = "screening_copy".to_string();
        steps.insert(3, copy);
        let err = StepCatalog::new(steps).unwrap_err();
        assert!(err.to_string().contains("duplicate question id 's2'"));
    }

    #[test]
    fn test_rejects_split_screening_block() {
        let mut steps = StepCatalog::default().steps().to_vec();
        let screening = steps.remove(4);
        steps.push(screening);
        let err = StepCatalog::new(steps).unwrap_err();
        assert!(err.to_string().contains("one block"));
    }

    #[test]
    fn test_rejects_empty_range() {
        let mut steps = StepCatalog::default().steps().to_vec();
        if let StepKind::Question { question, .. } = &mut steps[5].kind {
            question.kind = QuestionType::Scale { min: 5, max: 1 };
        }
        let err = StepCatalog::new(steps).unwrap_err();
        assert!(err.to_string().contains("empty range"));
    }

    fn set_question(steps: &mut [StepDefinition], index: usize, id: &str, kind: QuestionType) {
        if let StepKind::Question { question, .. } = &mut steps[index].kind {
            question.id = id.to_string();
            question.kind = kind;
        }
    }

    #[test]
    fn test_rejects_renamed_pain_questions() {
        let mut steps = StepCatalog::default().steps().to_vec();
        set_question(&mut steps, 5, "pain_now", QuestionType::Scale { min: 0, max: 10 });
        let err = StepCatalog::new(steps).unwrap_err();
        assert!(matches!(err, CompassError::InvalidCatalog { .. }));
        assert!(err.to_string().contains("'vas_now' is missing"));

        let mut steps = StepCatalog::default().steps().to_vec();
        set_question(&mut steps, 6, "pain_after", QuestionType::Scale { min: 0, max: 10 });
        let err = StepCatalog::new(steps).unwrap_err();
        assert!(err.to_string().contains("'vas_after' is missing"));
    }

    #[test]
    fn test_rejects_renamed_functional_questions() {
        for (index, id) in [(7, AK1), (8, AK2)] {
            let mut steps = StepCatalog::default().steps().to_vec();
            set_question(&mut steps, index, "renamed", QuestionType::Boolean);
            let err = StepCatalog::new(steps).unwrap_err();
            assert!(
                err.to_string().contains(&format!("'{id}' is missing")),
                "{err}"
            );
        }
    }

    #[test]
    fn test_rejects_wrong_advice_question_types() {
        let mut steps = StepCatalog::default().steps().to_vec();
        set_question(&mut steps, 5, VAS_NOW, QuestionType::Boolean);
        let err = StepCatalog::new(steps).unwrap_err();
        assert!(err.to_string().contains("'vas_now' must be a scale question"));

        let mut steps = StepCatalog::default().steps().to_vec();
        set_question(&mut steps, 8, AK2, QuestionType::Scale { min: 0, max: 1 });
        let err = StepCatalog::new(steps).unwrap_err();
        assert!(err.to_string().contains("'ak2' must be a yes/no question"));
    }

    #[test]
    fn test_json_with_renamed_pain_question_is_rejected() {
        let json = serde_json::to_string(&StepCatalog::default())
            .unwrap()
            .replace("\"vas_now\"", "\"pain_now\"");
        let err = StepCatalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CompassError::InvalidCatalog { .. }));
    }

    #[test]
    fn test_json_round_trip_revalidates() {
        let catalog = StepCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed = StepCatalog::from_json(&json).unwrap();
        assert_eq!(parsed, catalog);

        assert!(StepCatalog::from_json("[]").is_err());
    }
}
