use crate::condition::ConditionKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Evaluation rules attached to one application question, as authored in the form builder.
///
/// Every sub-config carries its own `enabled` flag. The stored form only keeps enabled
/// sub-configs; see [`normalize`](super::normalize).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionEvaluationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<MandatoryConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_tagging: Option<AutoTaggingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<TriggersConfig>,
}

/// Disqualification rules for blank or incorrect answers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub disqualify_if_blank: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disqualify_if_incorrect: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

/// Point values awarded for an answer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_per_answer: Option<BTreeMap<String, i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_for_correct: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_for_incorrect: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_points_to_pass: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoTaggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rules: Vec<TaggingRule>,
}

/// A condition-to-tags mapping. `value` is interpreted according to `condition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggingRule {
    pub condition: ConditionKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl TaggingRule {
    pub fn new<I, S>(condition: ConditionKind, value: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            condition,
            value: value.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            case_sensitive: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggersConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_pass: Option<TriggerAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_fail: Option<TriggerAction>,
}

/// An action bundle for the application pipeline to execute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_to_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_tags: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_assessment_invite: Option<AssessmentInvite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_rejection_email: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInvite {
    pub assessment_type: String,
    pub provider: String,
}
