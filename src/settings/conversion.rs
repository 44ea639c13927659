use super::definition::QuestionEvaluationSettings;
use crate::data::ApplicationForm;
use crate::error::DataError;
use serde::Deserialize;

/// A trait for form-builder payloads that can be converted into a Hyoka `ApplicationForm`.
///
/// Implement it on whatever shape your form builder stores, and the compiler can
/// consume it directly.
///
/// # Example
///
/// ```rust
/// use hyoka::data::ApplicationForm;
/// use hyoka::error::DataError;
/// use hyoka::question::{ApplicationQuestion, QuestionKind};
/// use hyoka::settings::IntoForm;
///
/// struct BuilderField { key: String, multiple: bool }
/// struct BuilderPayload { fields: Vec<BuilderField> }
///
/// impl IntoForm for BuilderPayload {
///     fn into_form(self) -> Result<ApplicationForm, DataError> {
///         let questions = self
///             .fields
///             .into_iter()
///             .map(|field| {
///                 let kind = if field.multiple {
///                     QuestionKind::MultiChoice
///                 } else {
///                     QuestionKind::ShortText
///                 };
///                 ApplicationQuestion::new(field.key, kind)
///             })
///             .collect();
///         Ok(ApplicationForm { questions })
///     }
/// }
/// ```
pub trait IntoForm {
    /// Consumes the payload and converts it into an application form.
    fn into_form(self) -> Result<ApplicationForm, DataError>;
}

impl IntoForm for ApplicationForm {
    fn into_form(self) -> Result<ApplicationForm, DataError> {
        Ok(self)
    }
}

/// Reads evaluation settings out of an arbitrary JSON value.
///
/// A value that does not have the settings shape is treated as "no evaluation
/// configured" and yields `None`.
pub fn settings_from_json(value: &serde_json::Value) -> Option<QuestionEvaluationSettings> {
    if value.is_null() {
        return None;
    }
    match QuestionEvaluationSettings::deserialize(value) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!("Ignoring malformed evaluation settings: {}", e);
            None
        }
    }
}

impl QuestionEvaluationSettings {
    /// Parses settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the canonical (normalized) form of these settings.
    pub fn to_canonical_json(&self) -> Result<String, DataError> {
        let canonical = super::normalize(self.clone());
        Ok(serde_json::to_string(&canonical)?)
    }
}
