use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate's raw answer to one question.
///
/// Decoding from JSON is lenient: anything that is not a string, number, boolean
/// or list of strings is read as [`AnswerValue::Blank`] instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum AnswerValue {
    #[default]
    Blank,
    Text(String),
    Number(f64),
    Choices(Vec<String>),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Choices(values.into_iter().map(Into::into).collect())
    }

    /// Whitespace-only text and lists without a non-blank entry count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Blank => true,
            AnswerValue::Text(text) => text.trim().is_empty(),
            AnswerValue::Number(n) => !n.is_finite(),
            AnswerValue::Choices(values) => values.iter().all(|v| v.trim().is_empty()),
        }
    }

    /// The option values a choice question receives from this answer.
    pub fn selected_values(&self) -> Vec<String> {
        match self {
            AnswerValue::Blank => Vec::new(),
            AnswerValue::Choices(values) => values
                .iter()
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .collect(),
            other if other.is_blank() => Vec::new(),
            other => vec![other.to_string()],
        }
    }

    /// The string forms a condition is tested against, one per selected value.
    pub(crate) fn string_forms(&self) -> Vec<String> {
        if self.is_blank() {
            return Vec::new();
        }
        match self {
            AnswerValue::Choices(_) => self.selected_values(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Blank => Ok(()),
            AnswerValue::Text(text) => write!(f, "{}", text),
            AnswerValue::Number(n) => f.write_str(&format_number(*n)),
            AnswerValue::Choices(values) => write!(f, "{}", values.join(", ")),
        }
    }
}

/// Integral values print without a fractional part, so `5.0` reads as `5`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

impl From<serde_json::Value> for AnswerValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(text) => AnswerValue::Text(text),
            Value::Number(n) => n.as_f64().map_or(AnswerValue::Blank, AnswerValue::Number),
            Value::Bool(b) => AnswerValue::Text(b.to_string()),
            Value::Array(items) => AnswerValue::Choices(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        Value::Number(n) => Some(n.as_f64().map_or_else(|| n.to_string(), format_number)),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Null | Value::Object(_) => AnswerValue::Blank,
        }
    }
}

impl From<AnswerValue> for serde_json::Value {
    fn from(answer: AnswerValue) -> Self {
        match answer {
            AnswerValue::Blank => serde_json::Value::Null,
            AnswerValue::Text(text) => serde_json::Value::String(text),
            AnswerValue::Number(n) => serde_json::Number::from_f64(n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            AnswerValue::Choices(values) => {
                serde_json::Value::Array(values.into_iter().map(serde_json::Value::String).collect())
            }
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}
