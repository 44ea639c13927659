use super::gate::GateOutcome;
use crate::compiler::Diagnostics;
use crate::settings::{AssessmentInvite, TriggerAction, TriggersConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A [`TriggerAction`] as stored in compiled artifacts. Every field is always
/// encoded, since the artifact format is positional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlannedAction {
    pub move_to_stage: Option<String>,
    pub add_tags: Option<BTreeSet<String>>,
    pub send_assessment_invite: Option<AssessmentInvite>,
    pub send_rejection_email: Option<bool>,
}

impl From<&TriggerAction> for PlannedAction {
    fn from(action: &TriggerAction) -> Self {
        Self {
            move_to_stage: action.move_to_stage.clone(),
            add_tags: action.add_tags.clone(),
            send_assessment_invite: action.send_assessment_invite.clone(),
            send_rejection_email: action.send_rejection_email,
        }
    }
}

impl From<&PlannedAction> for TriggerAction {
    fn from(action: &PlannedAction) -> Self {
        Self {
            move_to_stage: action.move_to_stage.clone(),
            add_tags: action.add_tags.clone(),
            send_assessment_invite: action.send_assessment_invite.clone(),
            send_rejection_email: action.send_rejection_email,
        }
    }
}

/// Compiled form of a question's `triggers` sub-config.
///
/// Dispatch is a pure function of the gate verdict: `onFail` when disqualified,
/// `onPass` otherwise. Nothing is executed here; the pipeline acts on the intent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TriggerPlan {
    pub on_pass: Option<PlannedAction>,
    pub on_fail: Option<PlannedAction>,
}

impl TriggerPlan {
    pub fn compile(config: &TriggersConfig, diagnostics: &mut Diagnostics) -> Self {
        if config.on_pass.is_none() && config.on_fail.is_none() {
            diagnostics.warning("triggers", "enabled without onPass or onFail actions");
        }
        Self {
            on_pass: config.on_pass.as_ref().map(PlannedAction::from),
            on_fail: config.on_fail.as_ref().map(PlannedAction::from),
        }
    }

    pub fn dispatch(&self, gate: &GateOutcome) -> Option<TriggerAction> {
        let action = if gate.disqualified {
            self.on_fail.as_ref()
        } else {
            self.on_pass.as_ref()
        };
        action.map(TriggerAction::from)
    }
}

pub fn dispatch(plan: Option<&TriggerPlan>, gate: &GateOutcome) -> Option<TriggerAction> {
    plan.and_then(|p| p.dispatch(gate))
}
