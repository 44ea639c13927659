//! Common test utilities for building question settings and forms.
use hyoka::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

#[allow(dead_code)]
pub fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Mandatory gate for a free-text question checked against `pattern`.
#[allow(dead_code)]
pub fn pattern_gate(pattern: &str, disqualify_if_blank: bool) -> MandatoryConfig {
    MandatoryConfig {
        enabled: true,
        disqualify_if_blank,
        disqualify_if_incorrect: Some(true),
        correct_pattern: Some(pattern.to_string()),
        ..Default::default()
    }
}

/// Mandatory gate for a choice question accepting only `correct`.
#[allow(dead_code)]
pub fn choice_gate(correct: &[&str]) -> MandatoryConfig {
    MandatoryConfig {
        enabled: true,
        disqualify_if_blank: true,
        disqualify_if_incorrect: Some(true),
        correct_answers: Some(set(correct)),
        ..Default::default()
    }
}

/// Scoring with a per-option points table.
#[allow(dead_code)]
pub fn points_table(entries: &[(&str, i64)], max_points: Option<i64>) -> ScoringConfig {
    ScoringConfig {
        enabled: true,
        points_per_answer: Some(
            entries
                .iter()
                .map(|(value, points)| (value.to_string(), *points))
                .collect::<BTreeMap<_, _>>(),
        ),
        max_points,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn tagging(rules: Vec<TaggingRule>) -> AutoTaggingConfig {
    AutoTaggingConfig {
        enabled: true,
        rules,
    }
}

#[allow(dead_code)]
pub fn stage_action(stage: &str) -> TriggerAction {
    TriggerAction {
        move_to_stage: Some(stage.to_string()),
        ..Default::default()
    }
}

/// Triggers that move passing candidates to "Screening" and failing ones to "Rejected".
#[allow(dead_code)]
pub fn stage_triggers() -> TriggersConfig {
    TriggersConfig {
        enabled: true,
        on_pass: Some(stage_action("Screening")),
        on_fail: Some(TriggerAction {
            move_to_stage: Some("Rejected".to_string()),
            send_rejection_email: Some(true),
            ..Default::default()
        }),
    }
}

/// A three-question form: a notice-period text question, a relocation choice
/// question and an informational file upload.
#[allow(dead_code)]
pub fn create_sample_form() -> ApplicationForm {
    let notice = ApplicationQuestion::new("notice_period", QuestionKind::ShortText).with_evaluation(
        QuestionEvaluationSettings {
            mandatory: Some(pattern_gate(r"\d+ (days|weeks)", true)),
            scoring: Some(ScoringConfig {
                enabled: true,
                points_for_correct: Some(5),
                points_for_incorrect: Some(0),
                ..Default::default()
            }),
            triggers: Some(stage_triggers()),
            ..Default::default()
        },
    );

    let relocate = ApplicationQuestion::new("relocate", QuestionKind::SingleChoice).with_evaluation(
        QuestionEvaluationSettings {
            scoring: Some(points_table(&[("yes", 10), ("no", 0)], Some(10))),
            auto_tagging: Some(tagging(vec![TaggingRule::new(
                ConditionKind::Equals,
                "yes",
                ["mobile"],
            )])),
            ..Default::default()
        },
    );

    let resume = ApplicationQuestion::new("resume", QuestionKind::File);

    ApplicationForm {
        questions: vec![notice, relocate, resume],
    }
}

#[allow(dead_code)]
pub fn compile(form: ApplicationForm) -> CompiledForm {
    Compiler::builder(form)
        .build()
        .compile()
        .expect("form should compile")
}
