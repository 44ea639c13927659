use crate::question::ApplicationQuestion;
use crate::settings::QuestionEvaluationSettings;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The offending piece of configuration is ignored at evaluation time.
    Error,
    /// Honored as written, but probably not what the author meant.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A configuration problem found while compiling a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub question_id: String,
    /// Path of the offending field inside the evaluation settings, e.g. `autoTagging.rules[1]`.
    pub location: String,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}: {}",
            self.severity, self.question_id, self.location, self.message
        )
    }
}

/// Collects diagnostics for one question while its plans are compiled.
#[derive(Debug)]
pub struct Diagnostics {
    question_id: String,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new(question_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, location.into(), message.into());
    }

    pub fn warning(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, location.into(), message.into());
    }

    fn push(&mut self, severity: Severity, location: String, message: String) {
        self.entries.push(Diagnostic {
            question_id: self.question_id.clone(),
            location,
            severity,
            message,
        });
    }

    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.entries.iter().find(|d| d.severity == Severity::Error)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

/// Flags sub-configs that are stored while disabled. They are legal input but not
/// the canonical stored shape.
pub(crate) fn check_canonical(settings: &QuestionEvaluationSettings, diagnostics: &mut Diagnostics) {
    let disabled = [
        ("mandatory", settings.mandatory.as_ref().map(|c| c.enabled)),
        ("scoring", settings.scoring.as_ref().map(|c| c.enabled)),
        ("autoTagging", settings.auto_tagging.as_ref().map(|c| c.enabled)),
        ("triggers", settings.triggers.as_ref().map(|c| c.enabled)),
    ];
    for (location, enabled) in disabled {
        if enabled == Some(false) {
            diagnostics.warning(location, "disabled sub-config is stored; normalize before saving");
        }
    }
}

/// Lints one question the way the form builder does at save time.
///
/// Returns every diagnostic, errors and warnings alike. An empty list means the
/// question's evaluation settings are clean.
pub fn lint(question: &ApplicationQuestion) -> Vec<Diagnostic> {
    let mut diagnostics = Diagnostics::new(&question.id);
    if let Some(settings) = &question.evaluation {
        check_canonical(settings, &mut diagnostics);
    }
    super::CompiledQuestion::compile(question, false, &mut diagnostics);
    diagnostics.into_vec()
}
