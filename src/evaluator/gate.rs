use crate::compiler::Diagnostics;
use crate::condition::Pattern;
use crate::question::{AnswerValue, QuestionKind};
use crate::settings::MandatoryConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Why an answer disqualified the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisqualifyReason {
    BlankRequiredAnswer,
    IncorrectAnswer,
    PatternMismatch,
}

impl DisqualifyReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DisqualifyReason::BlankRequiredAnswer => "blank_required_answer",
            DisqualifyReason::IncorrectAnswer => "incorrect_answer",
            DisqualifyReason::PatternMismatch => "pattern_mismatch",
        }
    }
}

impl fmt::Display for DisqualifyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The gate's verdict for one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateOutcome {
    pub disqualified: bool,
    pub reason: Option<DisqualifyReason>,
}

impl GateOutcome {
    pub const PASS: GateOutcome = GateOutcome {
        disqualified: false,
        reason: None,
    };

    fn fail(reason: DisqualifyReason) -> Self {
        Self {
            disqualified: true,
            reason: Some(reason),
        }
    }
}

/// Compiled form of a question's `mandatory` sub-config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MandatoryGate {
    pub disqualify_if_blank: bool,
    pub disqualify_if_incorrect: bool,
    pub correct_answers: BTreeSet<String>,
    /// `None` when no pattern is configured or the configured one failed to compile.
    pub correct_pattern: Option<Pattern>,
}

impl MandatoryGate {
    pub fn compile(config: &MandatoryConfig, diagnostics: &mut Diagnostics) -> Self {
        let case_sensitive = config.case_sensitive.unwrap_or(true);
        let correct_pattern = match config.correct_pattern.as_deref() {
            None | Some("") => None,
            Some(source) => match Pattern::new(source, case_sensitive) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    diagnostics.error("mandatory.correctPattern", e.to_string());
                    None
                }
            },
        };
        let correct_answers = config.correct_answers.clone().unwrap_or_default();
        let disqualify_if_incorrect = config.disqualify_if_incorrect.unwrap_or(false);

        if disqualify_if_incorrect && correct_answers.is_empty() && correct_pattern.is_none() {
            diagnostics.warning(
                "mandatory.disqualifyIfIncorrect",
                "no correctAnswers or correctPattern configured; correctness is never checked",
            );
        }

        Self {
            disqualify_if_blank: config.disqualify_if_blank,
            disqualify_if_incorrect,
            correct_answers,
            correct_pattern,
        }
    }

    /// Applies the blank and correctness rules to an answer.
    pub fn check(&self, kind: QuestionKind, answer: &AnswerValue) -> GateOutcome {
        if answer.is_blank() {
            return if self.disqualify_if_blank {
                GateOutcome::fail(DisqualifyReason::BlankRequiredAnswer)
            } else {
                GateOutcome::PASS
            };
        }

        if !self.disqualify_if_incorrect {
            return GateOutcome::PASS;
        }

        match self.is_correct(kind, answer) {
            Some(false) if kind.is_choice() => GateOutcome::fail(DisqualifyReason::IncorrectAnswer),
            Some(false) => GateOutcome::fail(DisqualifyReason::PatternMismatch),
            _ => GateOutcome::PASS,
        }
    }

    /// Whether a non-blank answer is correct, or `None` when no correctness check
    /// applies to this kind of question.
    pub fn is_correct(&self, kind: QuestionKind, answer: &AnswerValue) -> Option<bool> {
        if answer.is_blank() {
            return None;
        }
        if kind.is_choice() {
            if self.correct_answers.is_empty() {
                return None;
            }
            let selected = answer.selected_values();
            return Some(selected.iter().all(|v| self.correct_answers.contains(v)));
        }
        if kind.is_free_text() {
            let pattern = self.correct_pattern.as_ref()?;
            return Some(pattern.is_full_match(&answer.to_string()));
        }
        None
    }
}

/// Runs the gate, or passes everything when no mandatory rules are configured.
pub fn check(gate: Option<&MandatoryGate>, kind: QuestionKind, answer: &AnswerValue) -> GateOutcome {
    gate.map_or(GateOutcome::PASS, |g| g.check(kind, answer))
}
