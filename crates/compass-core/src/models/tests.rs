#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{
        AdviceKind, Answer, Answers, FlowPhase, Language, LocalizedText, Question, QuestionType,
        ResultRecord, Stage, StepDefinition, StepKind, StoredResult, YesNo,
    };

    fn scale_question() -> Question {
        Question {
            id: "vas_now".to_string(),
            kind: QuestionType::Scale { min: 0, max: 10 },
            text: LocalizedText::new("Pijn nu?", "Pain now?"),
        }
    }

    fn boolean_question() -> Question {
        Question {
            id: "s1".to_string(),
            kind: QuestionType::Boolean,
            text: LocalizedText::new("Veranderd?", "Changed?"),
        }
    }

    #[test]
    fn test_yes_no_parsing_accepts_both_languages() {
        assert_eq!("JA".parse::<YesNo>().unwrap(), YesNo::Yes);
        assert_eq!("yes".parse::<YesNo>().unwrap(), YesNo::Yes);
        assert_eq!(" n ".parse::<YesNo>().unwrap(), YesNo::No);
        assert_eq!("Nee".parse::<YesNo>().unwrap(), YesNo::No);
        assert!("maybe".parse::<YesNo>().is_err());
    }

    #[test]
    fn test_answer_parsing_prefers_integers() {
        assert_eq!("7".parse::<Answer>().unwrap(), Answer::Scale(7));
        assert_eq!("-1".parse::<Answer>().unwrap(), Answer::Scale(-1));
        assert_eq!("ja".parse::<Answer>().unwrap(), Answer::Boolean(YesNo::Yes));
        assert!("seven".parse::<Answer>().is_err());
    }

    #[test]
    fn test_scale_validation_rejects_out_of_range() {
        let question = scale_question();
        assert!(question.validate(&Answer::Scale(0)).is_ok());
        assert!(question.validate(&Answer::Scale(10)).is_ok());

        let err = question.validate(&Answer::Scale(11)).unwrap_err();
        assert!(err.to_string().contains("11 is outside 0..=10"));
        assert!(question.validate(&Answer::Scale(-1)).is_err());
        assert!(question.validate(&Answer::Boolean(YesNo::Yes)).is_err());
    }

    #[test]
    fn test_boolean_validation_rejects_numbers() {
        let question = boolean_question();
        assert!(question.validate(&Answer::Boolean(YesNo::No)).is_ok());
        let err = question.validate(&Answer::Scale(1)).unwrap_err();
        assert!(err.to_string().contains("expected JA or NEE"));
    }

    #[test]
    fn test_answers_serialize_with_sentinels() {
        let answers: Answers = [
            ("s1", Answer::Boolean(YesNo::No)),
            ("ak1", Answer::Boolean(YesNo::Yes)),
            ("vas_now", Answer::Scale(5)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"ak1":"JA","s1":"NEE","vas_now":5}"#);

        let parsed: Answers = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, answers);
    }

    #[test]
    fn test_step_definition_json_shape() {
        let step = StepDefinition {
            id: "pain_vas_now".to_string(),
            title: LocalizedText::new("Pijnmeting (1/2)", "Pain Measurement (1/2)"),
            kind: StepKind::Question {
                stage: Stage::Pain,
                question: scale_question(),
            },
        };

        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["kind"], "question");
        assert_eq!(value["stage"], "pain");
        assert_eq!(value["question"]["type"], "scale");
        assert_eq!(value["question"]["max"], 10);

        let parsed: StepDefinition = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, step);
        assert_eq!(parsed.stage(), Some(Stage::Pain));
        assert!(!parsed.is_landing());
    }

    #[test]
    fn test_advice_kind_thresholds() {
        assert_eq!(AdviceKind::from_pain_score(0), AdviceKind::Low);
        assert_eq!(AdviceKind::from_pain_score(3), AdviceKind::Low);
        assert_eq!(AdviceKind::from_pain_score(4), AdviceKind::Moderate);
        assert_eq!(AdviceKind::from_pain_score(5), AdviceKind::Moderate);
        assert_eq!(AdviceKind::from_pain_score(6), AdviceKind::High);
        assert_eq!(AdviceKind::from_pain_score(10), AdviceKind::High);
    }

    #[test]
    fn test_language_round_trip() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("nl".parse::<Language>().unwrap(), Language::Nl);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Nl.toggled(), Language::En);
        assert_eq!(Language::default(), Language::Nl);
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), r#""en""#);
    }

    #[test]
    fn test_flow_phase_terminal() {
        assert!(FlowPhase::Completed.is_terminal());
        assert!(FlowPhase::Urgent.is_terminal());
        assert!(!FlowPhase::Screening.is_terminal());
        assert!(!FlowPhase::Landing.is_terminal());
    }

    #[test]
    fn test_stored_result_flattens_record() {
        let stored = StoredResult {
            id: 3,
            record: ResultRecord {
                timestamp: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
                language: Language::En,
                answers: Answers::new(),
                advice_short: "Advice: Take it easy today.".to_string(),
                urgent: false,
            },
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["language"], "en");
        assert_eq!(value["urgent"], false);
        assert_eq!(value["timestamp"], "2022-01-01T00:00:00Z");
    }
}
