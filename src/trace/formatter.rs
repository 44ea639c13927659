use crate::evaluator::QuestionEvaluationResult;
use crate::settings::TriggerAction;
use itertools::Itertools;

/// Formats evaluation results into human-readable one-line explanations.
pub struct ResultFormatter;

impl ResultFormatter {
    /// e.g. `disqualified (pattern_mismatch); 0 points; tags: backend; action: move to Rejected`
    pub fn format_result(result: &QuestionEvaluationResult) -> String {
        let mut parts = Vec::with_capacity(4);

        parts.push(match (result.disqualified, result.disqualify_reason) {
            (true, Some(reason)) => format!("disqualified ({})", reason),
            (true, None) => "disqualified".to_string(),
            (false, _) => "passed gate".to_string(),
        });

        let points = match result.passed {
            Some(true) => format!("{} points (pass)", result.points_awarded),
            Some(false) => format!("{} points (below threshold)", result.points_awarded),
            None => format!("{} points", result.points_awarded),
        };
        parts.push(points);

        if !result.tags_applied.is_empty() {
            parts.push(format!("tags: {}", result.tags_applied.iter().join(", ")));
        }

        if let Some(action) = &result.triggered_action {
            parts.push(format!("action: {}", Self::format_action(action)));
        }

        parts.join("; ")
    }

    /// Describes what the pipeline is asked to do. An empty action reads as `none`.
    pub fn format_action(action: &TriggerAction) -> String {
        let mut steps = Vec::new();
        if let Some(stage) = &action.move_to_stage {
            steps.push(format!("move to {}", stage));
        }
        if let Some(tags) = action.add_tags.as_ref().filter(|t| !t.is_empty()) {
            steps.push(format!("add tags [{}]", tags.iter().join(", ")));
        }
        if let Some(invite) = &action.send_assessment_invite {
            steps.push(format!(
                "invite to {} assessment via {}",
                invite.assessment_type, invite.provider
            ));
        }
        if action.send_rejection_email == Some(true) {
            steps.push("send rejection email".to_string());
        }

        if steps.is_empty() {
            "none".to_string()
        } else {
            steps.join(", ")
        }
    }
}
