//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the hyoka crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use hyoka::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let form = ApplicationForm::from_file("path/to/form.json")?;
//! let submission = Submission::from_file("path/to/submission.json")?;
//!
//! let compiled = Compiler::builder(form).build().compile()?;
//! let evaluator = Evaluator::new(compiled);
//!
//! for outcome in evaluator.evaluate_submission(&submission) {
//!     println!("{}: {}", outcome.question_id, ResultFormatter::format_result(&outcome.result));
//! }
//! # Ok(())
//! # }
//! ```

// Core compilation and evaluation
pub use crate::compiler::{CompiledForm, CompiledQuestion, Compiler, Diagnostic, Severity, lint};
pub use crate::evaluator::{
    DisqualifyReason, Evaluator, QuestionEvaluationResult, QuestionOutcome, evaluate_question,
    evaluate_question_json,
};

// Conditions
pub use crate::condition::{Condition, ConditionKind};

// Questions, answers and settings
pub use crate::data::{ApplicationForm, Submission};
pub use crate::question::{AnswerValue, ApplicationQuestion, QuestionKind};
pub use crate::settings::{
    AssessmentInvite, AutoTaggingConfig, CanonicalSettings, FormArtifact, IntoForm,
    MandatoryConfig, QuestionEvaluationSettings, ScoringConfig, TaggingRule, TriggerAction,
    TriggersConfig, normalize,
};

// Error types
pub use crate::error::{ArtifactError, CompileError, ConditionError, DataError};

// Result formatting
pub use crate::trace::ResultFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
