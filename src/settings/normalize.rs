use super::definition::*;
use serde::Serialize;

/// Evaluation settings in their canonical stored shape: every sub-config that is
/// present is enabled. Absence is the only representation of "disabled".
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CanonicalSettings(QuestionEvaluationSettings);

impl CanonicalSettings {
    pub fn mandatory(&self) -> Option<&MandatoryConfig> {
        self.0.mandatory.as_ref()
    }

    pub fn scoring(&self) -> Option<&ScoringConfig> {
        self.0.scoring.as_ref()
    }

    pub fn auto_tagging(&self) -> Option<&AutoTaggingConfig> {
        self.0.auto_tagging.as_ref()
    }

    pub fn triggers(&self) -> Option<&TriggersConfig> {
        self.0.triggers.as_ref()
    }

    /// True when no sub-config survived normalization.
    pub fn is_empty(&self) -> bool {
        self.0 == QuestionEvaluationSettings::default()
    }

    pub fn as_settings(&self) -> &QuestionEvaluationSettings {
        &self.0
    }

    pub fn into_inner(self) -> QuestionEvaluationSettings {
        self.0
    }
}

impl From<QuestionEvaluationSettings> for CanonicalSettings {
    fn from(settings: QuestionEvaluationSettings) -> Self {
        normalize(settings)
    }
}

/// Drops every sub-config whose `enabled` flag is off.
///
/// Run on each mutation before the settings are stored or transmitted. Idempotent.
pub fn normalize(settings: QuestionEvaluationSettings) -> CanonicalSettings {
    let QuestionEvaluationSettings {
        mandatory,
        scoring,
        auto_tagging,
        triggers,
    } = settings;

    CanonicalSettings(QuestionEvaluationSettings {
        mandatory: mandatory.filter(|m| m.enabled),
        scoring: scoring.filter(|s| s.enabled),
        auto_tagging: auto_tagging.filter(|t| t.enabled),
        triggers: triggers.filter(|t| t.enabled),
    })
}

/// Normalizes an optional settings object; `None` stays "no evaluation configured".
pub fn normalize_optional(settings: Option<&QuestionEvaluationSettings>) -> CanonicalSettings {
    settings.cloned().map(normalize).unwrap_or_default()
}
