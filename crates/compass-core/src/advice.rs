//! Advice engine: a pure mapping from answers to localized advice.

use crate::{
    catalog::{AK1, AK2, VAS_AFTER, VAS_NOW},
    content::{ContentKey, ContentTable},
    models::{AdviceKind, AdviceResult, Answers, Language},
};

/// Derives the advice for a set of answers.
///
/// Urgent sessions short-circuit to the fixed urgent advice without a score
/// or warnings. Otherwise the highest of the two VAS scores (absent scores
/// count as 0) selects the advice, and each affirmative functional question
/// adds a warning, ak1 before ak2. The result depends only on the arguments.
///
/// # Examples
///
/// ```rust
/// use compass_core::{derive_advice, AdviceKind, Answer, Answers, ContentTable, Language};
///
/// let answers: Answers = [("vas_now", Answer::Scale(6)), ("vas_after", Answer::Scale(1))]
///     .into_iter()
///     .collect();
/// let advice = derive_advice(&answers, false, Language::En, &ContentTable::builtin());
///
/// assert_eq!(advice.kind, AdviceKind::High);
/// assert_eq!(advice.max_pain_score, Some(6));
/// ```
pub fn derive_advice(
    answers: &Answers,
    urgent: bool,
    language: Language,
    content: &ContentTable,
) -> AdviceResult {
    if urgent {
        return AdviceResult {
            kind: AdviceKind::Urgent,
            max_pain_score: None,
            short_text: content.text(language, ContentKey::AdviceUrgentShort).into_owned(),
            long_text: content.text(language, ContentKey::AdviceUrgentLong).into_owned(),
            warnings: Vec::new(),
        };
    }

    let max_pain_score = answers
        .scale_or_zero(VAS_NOW)
        .max(answers.scale_or_zero(VAS_AFTER));
    let kind = AdviceKind::from_pain_score(max_pain_score);
    let (short_key, long_key) = advice_keys(kind);

    let warnings = [(AK1, ContentKey::WarningWalkStairs), (AK2, ContentKey::WarningRunJump)]
        .into_iter()
        .filter(|(question_id, _)| answers.is_affirmative(question_id))
        .map(|(_, key)| content.text(language, key).into_owned())
        .collect();

    AdviceResult {
        kind,
        max_pain_score: Some(max_pain_score),
        short_text: content.text(language, short_key).into_owned(),
        long_text: content.text(language, long_key).into_owned(),
        warnings,
    }
}

fn advice_keys(kind: AdviceKind) -> (ContentKey, ContentKey) {
    match kind {
        AdviceKind::Urgent => (ContentKey::AdviceUrgentShort, ContentKey::AdviceUrgentLong),
        AdviceKind::Low => (ContentKey::AdviceLowShort, ContentKey::AdviceLowLong),
        AdviceKind::Moderate => (
            ContentKey::AdviceModerateShort,
            ContentKey::AdviceModerateLong,
        ),
        AdviceKind::High => (ContentKey::AdviceHighShort, ContentKey::AdviceHighLong),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{Answer, YesNo};

    fn answers(vas_now: i32, vas_after: i32, ak1: YesNo, ak2: YesNo) -> Answers {
        [
            (VAS_NOW, Answer::Scale(vas_now)),
            (VAS_AFTER, Answer::Scale(vas_after)),
            (AK1, Answer::Boolean(ak1)),
            (AK2, Answer::Boolean(ak2)),
        ]
        .into_iter()
        .collect()
    }

    fn advise(answers: &Answers) -> AdviceResult {
        derive_advice(answers, false, Language::En, &ContentTable::builtin())
    }

    #[test]
    fn test_pain_boundaries() {
        let cases = [
            (3, AdviceKind::Low),
            (4, AdviceKind::Moderate),
            (5, AdviceKind::Moderate),
            (6, AdviceKind::High),
        ];
        for (score, expected) in cases {
            let result = advise(&answers(score, 0, YesNo::No, YesNo::No));
            assert_eq!(result.kind, expected, "score {score}");
            assert_eq!(result.max_pain_score, Some(score));
        }
    }

    #[test]
    fn test_classification_uses_maximum_only() {
        let now_high = advise(&answers(6, 1, YesNo::No, YesNo::No));
        let after_high = advise(&answers(1, 6, YesNo::No, YesNo::No));
        assert_eq!(now_high.kind, AdviceKind::High);
        assert_eq!(now_high, after_high);
    }

    #[test]
    fn test_missing_scores_default_to_zero() {
        let result = advise(&Answers::new());
        assert_eq!(result.kind, AdviceKind::Low);
        assert_eq!(result.max_pain_score, Some(0));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_single_warning_in_every_pain_class() {
        for score in [2, 5, 8] {
            let result = advise(&answers(score, score, YesNo::Yes, YesNo::No));
            assert_eq!(result.warnings.len(), 1, "score {score}");
            assert!(result.warnings[0].contains("walking or stair climbing"));
        }
    }

    #[test]
    fn test_warnings_keep_question_order() {
        let result = advise(&answers(0, 0, YesNo::Yes, YesNo::Yes));
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("walking"));
        assert!(result.warnings[1].contains("jumping"));
    }

    #[test]
    fn test_urgent_short_circuits() {
        let result = derive_advice(
            &answers(9, 9, YesNo::Yes, YesNo::Yes),
            true,
            Language::Nl,
            &ContentTable::builtin(),
        );
        assert_eq!(result.kind, AdviceKind::Urgent);
        assert_eq!(result.max_pain_score, None);
        assert!(result.warnings.is_empty());
        assert!(result.short_text.contains("huisarts"));
    }

    #[test]
    fn test_advice_is_idempotent() {
        let input = answers(4, 2, YesNo::No, YesNo::Yes);
        assert_eq!(advise(&input), advise(&input));
    }

    #[test]
    fn test_missing_text_yields_placeholder() {
        let table = ContentTable::lenient(HashMap::new());
        let result = derive_advice(&Answers::new(), false, Language::En, &table);
        assert_eq!(result.short_text, "[MISSING TEXT: ADVICE_LOW_SHORT]");
    }
}
