pub mod answer;
pub mod kind;

pub use answer::*;
pub use kind::*;

use crate::settings::QuestionEvaluationSettings;
use serde::{Deserialize, Serialize};

/// One item of a job's application form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationQuestion {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub kind: QuestionKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<QuestionEvaluationSettings>,
}

impl ApplicationQuestion {
    pub fn new(id: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            title: None,
            kind,
            required: false,
            options: Vec::new(),
            evaluation: None,
        }
    }

    pub fn with_evaluation(mut self, evaluation: QuestionEvaluationSettings) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    /// Prunes disabled sub-configs in place, as done before every save.
    pub fn normalize(&mut self) {
        if let Some(settings) = self.evaluation.take() {
            self.evaluation = Some(crate::settings::normalize(settings).into_inner());
        }
    }
}
