//! # Hyoka - Application Question Evaluation Engine
//!
//! **Hyoka** judges a candidate's answers to a job's application-form questions.
//! Each question may carry evaluation settings authored in the form builder; for
//! every answer the engine decides:
//!
//! - whether the answer **disqualifies** the application (blank or incorrect answers),
//! - how many **points** it contributes, and whether it reaches a pass threshold,
//! - which **tags** it attaches to the candidate,
//! - which **trigger action** (stage move, tags, assessment invite, rejection email)
//!   the application pipeline should execute.
//!
//! The engine is pure: it reads settings and answers and returns a fresh
//! [`QuestionEvaluationResult`](evaluator::QuestionEvaluationResult). Executing
//! actions and persisting outcomes belongs to the caller.
//!
//! ## Core Workflow
//!
//! 1.  **Load the form**: parse the form builder's JSON into an `ApplicationForm`,
//!     or implement `IntoForm` for your own payload.
//! 2.  **Compile**: `Compiler::builder(form).build().compile()` normalizes the settings
//!     and compiles every condition and pattern once. Broken configuration becomes a
//!     `Diagnostic` (or an error, in strict mode).
//! 3.  **Evaluate**: create an `Evaluator` from the compiled form and run it against
//!     any number of submissions, from any number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use hyoka::prelude::*;
//! use std::collections::BTreeMap;
//!
//! fn main() -> Result<()> {
//!     let settings = QuestionEvaluationSettings {
//!         scoring: Some(ScoringConfig {
//!             enabled: true,
//!             points_per_answer: Some(BTreeMap::from([
//!                 ("yes".to_string(), 10),
//!                 ("no".to_string(), 0),
//!             ])),
//!             max_points: Some(10),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     };
//!     let question = ApplicationQuestion::new("relocate", QuestionKind::SingleChoice)
//!         .with_evaluation(settings);
//!
//!     let form = ApplicationForm { questions: vec![question] };
//!     let evaluator = Evaluator::new(Compiler::builder(form).build().compile()?);
//!
//!     let result = evaluator
//!         .evaluate("relocate", &AnswerValue::text("yes"))
//!         .expect("question exists");
//!     assert_eq!(result.points_awarded, 10);
//!     println!("{}", ResultFormatter::format_result(&result));
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod condition;
pub mod data;
pub mod error;
pub mod evaluator;
pub mod prelude;
pub mod question;
pub mod settings;
pub mod trace;
