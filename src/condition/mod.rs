//! Typed predicates evaluated against a candidate's answer.
//!
//! Rule values arrive as untyped strings. [`Condition::compile`] turns a
//! `(ConditionKind, value)` pair into a typed condition once, so a bad threshold
//! or regex is reported when the form is compiled instead of on every evaluation.

mod pattern;

pub use pattern::Pattern;

use crate::error::ConditionError;
use crate::question::AnswerValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The predicate kinds a tagging rule may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    Equals,
    Contains,
    Matches,
    GreaterThan,
    LessThan,
    InRange,
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConditionKind::Equals => "equals",
            ConditionKind::Contains => "contains",
            ConditionKind::Matches => "matches",
            ConditionKind::GreaterThan => "greater_than",
            ConditionKind::LessThan => "less_than",
            ConditionKind::InRange => "in_range",
        };
        write!(f, "{}", name)
    }
}

/// A compiled condition. String kinds carry text, numeric kinds carry numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    Equals { value: String, case_sensitive: bool },
    Contains { value: String, case_sensitive: bool },
    Matches(Pattern),
    GreaterThan(f64),
    LessThan(f64),
    InRange { min: f64, max: f64 },
}

impl Condition {
    /// Compiles an untyped rule value for the given kind.
    pub fn compile(
        kind: ConditionKind,
        value: &str,
        case_sensitive: bool,
    ) -> Result<Self, ConditionError> {
        if value.trim().is_empty() {
            return Err(ConditionError::EmptyValue);
        }
        let condition = match kind {
            ConditionKind::Equals => Condition::Equals {
                value: fold_case(value, case_sensitive),
                case_sensitive,
            },
            ConditionKind::Contains => Condition::Contains {
                value: fold_case(value, case_sensitive),
                case_sensitive,
            },
            ConditionKind::Matches => Condition::Matches(Pattern::new(value, case_sensitive)?),
            ConditionKind::GreaterThan => Condition::GreaterThan(threshold(kind, value)?),
            ConditionKind::LessThan => Condition::LessThan(threshold(kind, value)?),
            ConditionKind::InRange => {
                let (min, max) = parse_range(value)
                    .ok_or_else(|| ConditionError::MalformedRange(value.to_string()))?;
                Condition::InRange { min, max }
            }
        };
        Ok(condition)
    }

    pub fn kind(&self) -> ConditionKind {
        match self {
            Condition::Equals { .. } => ConditionKind::Equals,
            Condition::Contains { .. } => ConditionKind::Contains,
            Condition::Matches(_) => ConditionKind::Matches,
            Condition::GreaterThan(_) => ConditionKind::GreaterThan,
            Condition::LessThan(_) => ConditionKind::LessThan,
            Condition::InRange { .. } => ConditionKind::InRange,
        }
    }

    /// Tests the answer. A multi-value answer matches when any selected value does;
    /// a blank answer never matches.
    pub fn matches(&self, answer: &AnswerValue) -> bool {
        answer
            .string_forms()
            .iter()
            .any(|form| self.test_str(form))
    }

    fn test_str(&self, input: &str) -> bool {
        match self {
            Condition::Equals {
                value,
                case_sensitive,
            } => fold_case(input, *case_sensitive) == *value,
            Condition::Contains {
                value,
                case_sensitive,
            } => fold_case(input, *case_sensitive).contains(value.as_str()),
            Condition::Matches(pattern) => pattern.is_full_match(input),
            Condition::GreaterThan(threshold) => parse_number(input).is_some_and(|n| n > *threshold),
            Condition::LessThan(threshold) => parse_number(input).is_some_and(|n| n < *threshold),
            Condition::InRange { min, max } => {
                parse_number(input).is_some_and(|n| n >= *min && n <= *max)
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Equals { value, .. } => write!(f, "equals \"{}\"", value),
            Condition::Contains { value, .. } => write!(f, "contains \"{}\"", value),
            Condition::Matches(pattern) => write!(f, "matches {}", pattern),
            Condition::GreaterThan(n) => write!(f, "> {}", n),
            Condition::LessThan(n) => write!(f, "< {}", n),
            Condition::InRange { min, max } => write!(f, "in [{}, {}]", min, max),
        }
    }
}

/// Evaluates one predicate against an answer, case-sensitively.
///
/// Never fails: a target that cannot be compiled for `kind` evaluates to `false`.
pub fn evaluate(kind: ConditionKind, target: &str, answer: &AnswerValue) -> bool {
    Condition::compile(kind, target, true).is_ok_and(|condition| condition.matches(answer))
}

fn fold_case(input: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        input.to_string()
    } else {
        input.to_lowercase()
    }
}

fn threshold(kind: ConditionKind, value: &str) -> Result<f64, ConditionError> {
    parse_number(value).ok_or_else(|| ConditionError::NotANumber {
        condition: kind.to_string(),
        value: value.to_string(),
    })
}

/// Parses a finite number, ignoring surrounding whitespace.
pub(crate) fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Parses `"min,max"` with `min <= max`.
fn parse_range(value: &str) -> Option<(f64, f64)> {
    let (min, max) = value.split_once(',')?;
    let min = parse_number(min)?;
    let max = parse_number(max)?;
    (min <= max).then_some((min, max))
}
