use crate::compiler::{CompiledForm, CompiledQuestion, Diagnostics};
use crate::data::Submission;
use crate::question::{AnswerValue, QuestionKind};
use crate::settings::{QuestionEvaluationSettings, TriggerAction, normalize_optional, settings_from_json};
use ahash::AHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod gate;
pub mod scoring;
pub mod tagging;
pub mod triggers;

pub use gate::{DisqualifyReason, GateOutcome, MandatoryGate};
pub use scoring::{ScoreOutcome, ScoringPlan};
pub use tagging::{CompiledRule, TaggingPlan};
pub use triggers::{PlannedAction, TriggerPlan};

/// The outcome of evaluating one answer against its question's settings.
///
/// Created fresh per evaluation and owned by the caller, which folds the results of
/// a whole application into its own verdict.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionEvaluationResult {
    pub disqualified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disqualify_reason: Option<DisqualifyReason>,
    pub points_awarded: i64,
    /// The scoring pass verdict, present only when a pass threshold is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    pub tags_applied: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_action: Option<TriggerAction>,
}

impl CompiledQuestion {
    /// Runs gate, scoring, tagging and trigger dispatch, in that order.
    pub fn evaluate(&self, answer: &AnswerValue) -> QuestionEvaluationResult {
        let gate = gate::check(self.gate.as_ref(), self.kind, answer);
        let score = scoring::score(self.scoring.as_ref(), self.gate.as_ref(), self.kind, answer);
        let tags = tagging::tag(self.tagging.as_ref(), answer);
        let action = triggers::dispatch(self.triggers.as_ref(), &gate);

        tracing::trace!(
            question = %self.id,
            disqualified = gate.disqualified,
            points = score.points,
            tags = tags.len(),
            "Evaluated answer"
        );

        QuestionEvaluationResult {
            disqualified: gate.disqualified,
            disqualify_reason: gate.reason,
            points_awarded: score.points,
            passed: score.passed,
            tags_applied: tags,
            triggered_action: action,
        }
    }
}

/// Evaluates one answer against optional, not yet compiled settings.
///
/// `None` settings, or settings whose sub-configs are all disabled, yield the inert
/// result. Configuration that fails to compile is ignored.
pub fn evaluate_question(
    settings: Option<&QuestionEvaluationSettings>,
    kind: QuestionKind,
    answer: &AnswerValue,
) -> QuestionEvaluationResult {
    let canonical = normalize_optional(settings);
    let mut diagnostics = Diagnostics::new("");
    let plan = CompiledQuestion::from_canonical("", kind, &canonical, false, &mut diagnostics);
    plan.evaluate(answer)
}

/// Like [`evaluate_question`], reading the settings from raw JSON. Malformed settings
/// count as "no evaluation configured".
pub fn evaluate_question_json(
    settings: &serde_json::Value,
    kind: QuestionKind,
    answer: &AnswerValue,
) -> QuestionEvaluationResult {
    evaluate_question(settings_from_json(settings).as_ref(), kind, answer)
}

/// One question's result within a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOutcome {
    pub question_id: String,
    pub result: QuestionEvaluationResult,
}

/// Evaluates answers against a compiled form.
///
/// An `Evaluator` holds no mutable state and can be shared across threads.
pub struct Evaluator {
    form: CompiledForm,
    index: AHashMap<String, usize>,
}

impl Evaluator {
    pub fn new(form: CompiledForm) -> Self {
        let index = form
            .questions
            .iter()
            .enumerate()
            .map(|(position, question)| (question.id.clone(), position))
            .collect();
        Self { form, index }
    }

    pub fn form(&self) -> &CompiledForm {
        &self.form
    }

    /// Evaluates one answer. Returns `None` if the form has no such question.
    pub fn evaluate(&self, question_id: &str, answer: &AnswerValue) -> Option<QuestionEvaluationResult> {
        self.index
            .get(question_id)
            .map(|&position| self.form.questions[position].evaluate(answer))
    }

    /// Evaluates every question of the form in parallel, in form order.
    ///
    /// Questions the submission does not answer are evaluated as blank. Answers to
    /// questions that are not on the form are ignored.
    pub fn evaluate_submission(&self, submission: &Submission) -> Vec<QuestionOutcome> {
        let blank = AnswerValue::Blank;
        self.form
            .questions
            .par_iter()
            .map(|question| {
                let answer = submission.answers.get(&question.id).unwrap_or(&blank);
                QuestionOutcome {
                    question_id: question.id.clone(),
                    result: question.evaluate(answer),
                }
            })
            .collect()
    }
}
