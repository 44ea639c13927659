//! Property tests for the evaluation engine.
mod common;
use common::*;
use hyoka::condition::evaluate;
use hyoka::prelude::*;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = QuestionKind> {
    prop_oneof![
        Just(QuestionKind::ShortText),
        Just(QuestionKind::LongText),
        Just(QuestionKind::SingleChoice),
        Just(QuestionKind::MultiChoice),
        Just(QuestionKind::Dropdown),
        Just(QuestionKind::File),
    ]
}

fn answer_strategy() -> impl Strategy<Value = AnswerValue> {
    prop_oneof![
        Just(AnswerValue::Blank),
        "[a-z0-9 ]{0,12}".prop_map(AnswerValue::Text),
        (-1000.0..1000.0f64).prop_map(AnswerValue::Number),
        prop::collection::vec("[a-c]", 0..4).prop_map(AnswerValue::Choices),
    ]
}

fn full_settings(pattern: &str) -> QuestionEvaluationSettings {
    QuestionEvaluationSettings {
        mandatory: Some(pattern_gate(pattern, true)),
        scoring: Some(points_table(&[("a", 4), ("b", 6), ("c", -2)], Some(8))),
        auto_tagging: Some(tagging(vec![
            TaggingRule::new(ConditionKind::Contains, "a", ["has_a"]),
            TaggingRule::new(ConditionKind::GreaterThan, "10", ["large"]),
        ])),
        triggers: Some(stage_triggers()),
    }
}

proptest! {
    #[test]
    fn prop_no_settings_is_inert(kind in kind_strategy(), answer in answer_strategy()) {
        let result = evaluate_question(None, kind, &answer);
        prop_assert_eq!(result, QuestionEvaluationResult::default());
    }

    #[test]
    fn prop_blank_required_answer_always_disqualifies(
        kind in kind_strategy(),
        pattern in "[a-z]{1,4}",
    ) {
        let result = evaluate_question(Some(&full_settings(&pattern)), kind, &AnswerValue::Blank);
        prop_assert!(result.disqualified);
        prop_assert_eq!(result.disqualify_reason, Some(DisqualifyReason::BlankRequiredAnswer));
    }

    #[test]
    fn prop_evaluation_is_deterministic(kind in kind_strategy(), answer in answer_strategy()) {
        let settings = full_settings("[a-z]+");
        let first = evaluate_question(Some(&settings), kind, &answer);
        let second = evaluate_question(Some(&settings), kind, &answer);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_points_never_exceed_max(
        table in prop::collection::btree_map("[a-d]", 0i64..50, 0..4),
        selected in prop::collection::vec("[a-d]", 0..6),
        max in 1i64..40,
    ) {
        let settings = QuestionEvaluationSettings {
            scoring: Some(ScoringConfig {
                enabled: true,
                points_per_answer: Some(table),
                max_points: Some(max),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = evaluate_question(
            Some(&settings),
            QuestionKind::MultiChoice,
            &AnswerValue::Choices(selected),
        );
        prop_assert!(result.points_awarded <= max);
        prop_assert!(result.points_awarded >= 0);
    }

    #[test]
    fn prop_matching_rules_union_their_tags(
        first in prop::collection::btree_set("[a-e]", 0..4),
        second in prop::collection::btree_set("[a-e]", 0..4),
    ) {
        let settings = QuestionEvaluationSettings {
            auto_tagging: Some(tagging(vec![
                TaggingRule::new(ConditionKind::Contains, "rust", first.clone()),
                TaggingRule::new(ConditionKind::Contains, "go", second.clone()),
            ])),
            ..Default::default()
        };
        let result = evaluate_question(
            Some(&settings),
            QuestionKind::LongText,
            &AnswerValue::text("rust and go"),
        );
        let expected: std::collections::BTreeSet<String> = first.union(&second).cloned().collect();
        prop_assert_eq!(result.tags_applied, expected);
    }

    #[test]
    fn prop_trigger_follows_gate_verdict(kind in kind_strategy(), answer in answer_strategy()) {
        let triggers = stage_triggers();
        let result = evaluate_question(Some(&full_settings("[a-z]+")), kind, &answer);
        if result.disqualified {
            prop_assert_eq!(result.triggered_action, triggers.on_fail);
        } else {
            prop_assert_eq!(result.triggered_action, triggers.on_pass);
        }
    }

    #[test]
    fn prop_numeric_conditions_reject_words(word in "[a-zA-Z]{1,10}") {
        let answer = AnswerValue::text(word);
        prop_assert!(!evaluate(ConditionKind::GreaterThan, "0", &answer));
        prop_assert!(!evaluate(ConditionKind::LessThan, "0", &answer));
        prop_assert!(!evaluate(ConditionKind::InRange, "-100,100", &answer));
    }
}
