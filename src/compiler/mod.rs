use crate::data::ApplicationForm;
use crate::error::CompileError;
use crate::evaluator::{MandatoryGate, ScoringPlan, TaggingPlan, TriggerPlan};
use crate::question::{ApplicationQuestion, QuestionKind};
use crate::settings::{CanonicalSettings, normalize_optional};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

mod lint;

pub use lint::{Diagnostic, Diagnostics, Severity, lint};

/// The evaluation plan for one question: its canonical settings with every
/// condition and pattern compiled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledQuestion {
    pub id: String,
    pub kind: QuestionKind,
    pub gate: Option<MandatoryGate>,
    pub scoring: Option<ScoringPlan>,
    pub tagging: Option<TaggingPlan>,
    pub triggers: Option<TriggerPlan>,
}

impl CompiledQuestion {
    /// Compiles a question, recording problems instead of failing.
    pub fn compile(
        question: &ApplicationQuestion,
        tagging_case_sensitive: bool,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let settings = normalize_optional(question.evaluation.as_ref());
        Self::from_canonical(
            &question.id,
            question.kind,
            &settings,
            tagging_case_sensitive,
            diagnostics,
        )
    }

    pub fn from_canonical(
        id: &str,
        kind: QuestionKind,
        settings: &CanonicalSettings,
        tagging_case_sensitive: bool,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            gate: settings
                .mandatory()
                .map(|config| MandatoryGate::compile(config, diagnostics)),
            scoring: settings
                .scoring()
                .map(|config| ScoringPlan::compile(config, diagnostics)),
            tagging: settings
                .auto_tagging()
                .map(|config| TaggingPlan::compile(config, tagging_case_sensitive, diagnostics)),
            triggers: settings
                .triggers()
                .map(|config| TriggerPlan::compile(config, diagnostics)),
        }
    }

    /// True when no sub-config is active; every answer evaluates to the inert result.
    pub fn is_inert(&self) -> bool {
        self.gate.is_none() && self.scoring.is_none() && self.tagging.is_none() && self.triggers.is_none()
    }
}

/// A whole application form, compiled and ready for evaluation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompiledForm {
    pub questions: Vec<CompiledQuestion>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledForm {
    pub fn question(&self, id: &str) -> Option<&CompiledQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Compiles application forms into [`CompiledForm`]s.
///
/// In the default lenient mode, broken configuration (an invalid regex, a rule with
/// an empty value, a malformed range) is dropped and reported as a diagnostic, so
/// one misconfigured question never blocks evaluating a submission. Strict mode is
/// the save-time check: the first error aborts compilation.
pub struct Compiler {
    form: ApplicationForm,
    strict: bool,
    tagging_case_sensitive: bool,
}

pub struct CompilerBuilder {
    form: ApplicationForm,
    strict: bool,
    tagging_case_sensitive: bool,
}

impl CompilerBuilder {
    pub fn new(form: ApplicationForm) -> Self {
        Self {
            form,
            strict: false,
            tagging_case_sensitive: false,
        }
    }

    /// Fail on the first configuration error instead of degrading.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Case sensitivity for tagging rules that do not set `caseSensitive` themselves.
    pub fn tagging_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.tagging_case_sensitive = case_sensitive;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            form: self.form,
            strict: self.strict,
            tagging_case_sensitive: self.tagging_case_sensitive,
        }
    }
}

impl Compiler {
    pub fn builder(form: ApplicationForm) -> CompilerBuilder {
        CompilerBuilder::new(form)
    }

    pub fn compile(&self) -> Result<CompiledForm, CompileError> {
        let mut seen = AHashSet::new();
        let mut questions = Vec::with_capacity(self.form.questions.len());
        let mut all_diagnostics = Vec::new();

        for question in &self.form.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CompileError::DuplicateQuestion(question.id.clone()));
            }

            let mut diagnostics = Diagnostics::new(&question.id);
            if let Some(settings) = &question.evaluation {
                lint::check_canonical(settings, &mut diagnostics);
            }
            let compiled =
                CompiledQuestion::compile(question, self.tagging_case_sensitive, &mut diagnostics);

            if self.strict {
                if let Some(diagnostic) = diagnostics.first_error() {
                    return Err(CompileError::InvalidConfiguration {
                        question_id: question.id.clone(),
                        diagnostic: diagnostic.clone(),
                    });
                }
            }

            for diagnostic in diagnostics.into_vec() {
                tracing::warn!("{}", diagnostic);
                all_diagnostics.push(diagnostic);
            }
            questions.push(compiled);
        }

        tracing::debug!(
            questions = questions.len(),
            diagnostics = all_diagnostics.len(),
            strict = self.strict,
            "Compiled application form"
        );

        Ok(CompiledForm {
            questions,
            diagnostics: all_diagnostics,
        })
    }
}
