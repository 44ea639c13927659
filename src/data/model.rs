use crate::error::DataError;
use crate::question::{AnswerValue, ApplicationQuestion};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// A job's application form, matching the JSON the form builder persists.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    pub questions: Vec<ApplicationQuestion>,
}

impl ApplicationForm {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, DataError> {
        Self::from_json(&read(path)?)
    }

    /// Prunes disabled sub-configs from every question, as done before saving.
    pub fn normalize(&mut self) {
        self.questions.iter_mut().for_each(ApplicationQuestion::normalize);
    }
}

/// A candidate's answers, keyed by question id.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Submission {
    #[serde(default)]
    pub answers: AHashMap<String, AnswerValue>,
}

impl Submission {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, DataError> {
        Self::from_json(&read(path)?)
    }

    pub fn with_answer(mut self, question_id: impl Into<String>, answer: impl Into<AnswerValue>) -> Self {
        self.answers.insert(question_id.into(), answer.into());
        self
    }
}

fn read(path: &str) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_string(),
        source,
    })
}
