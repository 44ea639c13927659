//! Tests for normalization, form compilation and linting.
mod common;
use common::*;
use hyoka::prelude::*;
use serde_json::json;

fn disabled_settings() -> QuestionEvaluationSettings {
    QuestionEvaluationSettings {
        mandatory: Some(MandatoryConfig {
            enabled: false,
            disqualify_if_blank: true,
            ..Default::default()
        }),
        scoring: Some(points_table(&[("yes", 1)], None)),
        auto_tagging: Some(AutoTaggingConfig {
            enabled: false,
            rules: vec![TaggingRule::new(ConditionKind::Equals, "x", ["y"])],
        }),
        triggers: None,
    }
}

#[test]
fn test_normalize_drops_disabled_sub_configs() {
    let canonical = normalize(disabled_settings());
    assert!(canonical.mandatory().is_none());
    assert!(canonical.auto_tagging().is_none());
    assert!(canonical.triggers().is_none());
    assert_eq!(canonical.scoring(), disabled_settings().scoring.as_ref());
}

#[test]
fn test_normalize_is_idempotent() {
    let once = normalize(disabled_settings());
    let twice = normalize(once.clone().into_inner());
    assert_eq!(once, twice);
}

#[test]
fn test_canonical_json_omits_disabled_keys() {
    let json = disabled_settings().to_canonical_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["scoring".to_string()]);
}

#[test]
fn test_canonical_json_omits_unset_action_fields() {
    let settings = QuestionEvaluationSettings {
        triggers: Some(TriggersConfig {
            enabled: true,
            on_pass: Some(stage_action("Screening")),
            on_fail: None,
        }),
        ..Default::default()
    };
    let value: serde_json::Value =
        serde_json::from_str(&settings.to_canonical_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({ "triggers": { "enabled": true, "onPass": { "moveToStage": "Screening" } } })
    );
}

#[test]
fn test_fully_disabled_settings_are_empty() {
    let settings = QuestionEvaluationSettings {
        triggers: Some(TriggersConfig::default()),
        ..Default::default()
    };
    assert!(normalize(settings).is_empty());
}

#[test]
fn test_form_normalize_prunes_every_question() {
    let mut form = ApplicationForm {
        questions: vec![
            ApplicationQuestion::new("a", QuestionKind::SingleChoice).with_evaluation(disabled_settings()),
            ApplicationQuestion::new("b", QuestionKind::File),
        ],
    };
    form.normalize();
    let evaluation = form.questions[0].evaluation.as_ref().unwrap();
    assert!(evaluation.mandatory.is_none());
    assert!(evaluation.auto_tagging.is_none());
    assert!(form.questions[1].evaluation.is_none());
}

#[test]
fn test_compiles_sample_form_without_diagnostics() {
    let compiled = compile(create_sample_form());
    assert_eq!(compiled.questions.len(), 3);
    assert!(compiled.diagnostics.is_empty());
    assert!(compiled.question("resume").unwrap().is_inert());
    assert!(compiled.question("notice_period").unwrap().gate.is_some());
}

#[test]
fn test_lenient_compile_records_diagnostics() {
    let question = ApplicationQuestion::new("years", QuestionKind::ShortText).with_evaluation(
        QuestionEvaluationSettings {
            mandatory: Some(pattern_gate("([", false)),
            auto_tagging: Some(tagging(vec![TaggingRule::new(
                ConditionKind::InRange,
                "10,1",
                ["senior"],
            )])),
            ..Default::default()
        },
    );
    let compiled = compile(ApplicationForm {
        questions: vec![question],
    });

    assert!(compiled.has_errors());
    let question = compiled.question("years").unwrap();
    assert!(question.gate.as_ref().unwrap().correct_pattern.is_none());
    assert!(question.tagging.as_ref().unwrap().rules.is_empty());
    assert!(
        compiled
            .diagnostics
            .iter()
            .all(|d| d.question_id == "years")
    );
}

#[test]
fn test_strict_compile_rejects_invalid_configuration() {
    let question = ApplicationQuestion::new("years", QuestionKind::ShortText).with_evaluation(
        QuestionEvaluationSettings {
            auto_tagging: Some(tagging(vec![TaggingRule::new(
                ConditionKind::Contains,
                "",
                ["oops"],
            )])),
            ..Default::default()
        },
    );
    let result = Compiler::builder(ApplicationForm {
        questions: vec![question],
    })
    .strict(true)
    .build()
    .compile();

    match result {
        Err(CompileError::InvalidConfiguration {
            question_id,
            diagnostic,
        }) => {
            assert_eq!(question_id, "years");
            assert_eq!(diagnostic.location, "autoTagging.rules[0]");
            assert_eq!(diagnostic.severity, Severity::Error);
        }
        other => panic!("Expected InvalidConfiguration error, got {:?}", other),
    }
}

#[test]
fn test_strict_compile_allows_warnings() {
    let question = ApplicationQuestion::new("q", QuestionKind::ShortText).with_evaluation(
        QuestionEvaluationSettings {
            triggers: Some(TriggersConfig {
                enabled: true,
                ..Default::default()
            }),
            ..Default::default()
        },
    );
    let compiled = Compiler::builder(ApplicationForm {
        questions: vec![question],
    })
    .strict(true)
    .build()
    .compile()
    .unwrap();
    assert_eq!(compiled.diagnostics.len(), 1);
    assert!(!compiled.has_errors());
}

#[test]
fn test_duplicate_question_ids_are_rejected() {
    let form = ApplicationForm {
        questions: vec![
            ApplicationQuestion::new("dup", QuestionKind::ShortText),
            ApplicationQuestion::new("dup", QuestionKind::File),
        ],
    };
    let result = Compiler::builder(form).build().compile();
    assert!(matches!(result, Err(CompileError::DuplicateQuestion(id)) if id == "dup"));
}

#[test]
fn test_lint_flags_stored_disabled_sub_configs() {
    let question = ApplicationQuestion::new("a", QuestionKind::SingleChoice)
        .with_evaluation(disabled_settings());
    let diagnostics = lint(&question);
    let locations: Vec<_> = diagnostics.iter().map(|d| d.location.as_str()).collect();
    assert_eq!(locations, vec!["mandatory", "autoTagging"]);
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
}

#[test]
fn test_lint_clean_question() {
    let form = create_sample_form();
    for question in &form.questions {
        assert!(lint(question).is_empty(), "{} should lint clean", question.id);
    }
}

#[test]
fn test_form_from_builder_json() {
    let form = ApplicationForm::from_json(
        &json!({
            "questions": [{
                "id": "skills",
                "title": "Which languages do you use?",
                "kind": "multi_choice",
                "options": ["rust", "go", "php"],
                "evaluation": {
                    "scoring": {
                        "enabled": true,
                        "pointsPerAnswer": { "rust": 5, "go": 3 },
                        "maxPoints": 6
                    },
                    "autoTagging": {
                        "enabled": true,
                        "rules": [{ "condition": "equals", "value": "rust", "tags": ["systems"] }]
                    }
                }
            }]
        })
        .to_string(),
    )
    .unwrap();

    let evaluator = Evaluator::new(compile(form));
    let result = evaluator
        .evaluate("skills", &AnswerValue::choices(["rust", "go"]))
        .unwrap();
    assert_eq!(result.points_awarded, 6);
    assert_eq!(result.tags_applied, set(&["systems"]));
}
