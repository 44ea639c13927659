use super::gate::MandatoryGate;
use crate::compiler::Diagnostics;
use crate::question::{AnswerValue, QuestionKind};
use crate::settings::ScoringConfig;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Points contributed by one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreOutcome {
    pub points: i64,
    /// `None` unless a pass threshold is configured.
    pub passed: Option<bool>,
}

/// Compiled form of a question's `scoring` sub-config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringPlan {
    pub points_per_answer: AHashMap<String, i64>,
    pub points_for_correct: Option<i64>,
    pub points_for_incorrect: Option<i64>,
    pub max_points: Option<i64>,
    pub min_points_to_pass: Option<i64>,
}

impl ScoringPlan {
    pub fn compile(config: &ScoringConfig, diagnostics: &mut Diagnostics) -> Self {
        if let Some(max) = config.max_points {
            if max <= 0 {
                diagnostics.warning(
                    "scoring.maxPoints",
                    format!("maxPoints {} is not positive and will not clamp the score", max),
                );
            }
            if let Some(min) = config.min_points_to_pass.filter(|min| *min > max && max > 0) {
                diagnostics.warning(
                    "scoring.minPointsToPass",
                    format!("minPointsToPass {} exceeds maxPoints {}; the answer can never pass", min, max),
                );
            }
        }

        Self {
            points_per_answer: config
                .points_per_answer
                .iter()
                .flatten()
                .map(|(value, points)| (value.clone(), *points))
                .collect(),
            points_for_correct: config.points_for_correct,
            points_for_incorrect: config.points_for_incorrect,
            max_points: config.max_points,
            min_points_to_pass: config.min_points_to_pass,
        }
    }

    /// Scores an answer. Free-text correctness reuses the mandatory gate's pattern.
    pub fn score(
        &self,
        gate: Option<&MandatoryGate>,
        kind: QuestionKind,
        answer: &AnswerValue,
    ) -> ScoreOutcome {
        let raw = if answer.is_blank() {
            0
        } else if kind.is_choice() {
            answer
                .selected_values()
                .iter()
                .filter_map(|value| self.points_per_answer.get(value))
                .fold(0i64, |acc, points| acc.saturating_add(*points))
        } else if kind.is_free_text() {
            match gate.and_then(|g| g.is_correct(kind, answer)) {
                Some(true) => self.points_for_correct.unwrap_or(0),
                Some(false) => self.points_for_incorrect.unwrap_or(0),
                None => 0,
            }
        } else {
            0
        };

        let points = match self.max_points {
            Some(max) if max > 0 => raw.clamp(0, max),
            _ => raw,
        };

        ScoreOutcome {
            points,
            passed: self.min_points_to_pass.map(|min| points >= min),
        }
    }
}

/// Scores an answer, or returns zero points and no verdict when scoring is off.
pub fn score(
    plan: Option<&ScoringPlan>,
    gate: Option<&MandatoryGate>,
    kind: QuestionKind,
    answer: &AnswerValue,
) -> ScoreOutcome {
    plan.map_or(ScoreOutcome::default(), |p| p.score(gate, kind, answer))
}
