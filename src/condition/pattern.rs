use crate::error::ConditionError;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A compiled regular expression with full-match semantics.
///
/// The source is anchored as `\A(?:source)\z`, so a pattern only matches when it
/// covers the whole answer. Serialized as its source and flags; deserializing
/// recompiles it.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "PatternSource", into = "PatternSource")]
pub struct Pattern {
    source: String,
    case_sensitive: bool,
    regex: Regex,
}

#[derive(Clone, Serialize, Deserialize)]
struct PatternSource {
    source: String,
    case_sensitive: bool,
}

impl Pattern {
    pub fn new(source: &str, case_sensitive: bool) -> Result<Self, ConditionError> {
        if source.is_empty() {
            return Err(ConditionError::EmptyValue);
        }
        let build = |pattern: &str| {
            RegexBuilder::new(pattern)
                .case_insensitive(!case_sensitive)
                .build()
                .map_err(|e| ConditionError::InvalidPattern {
                    pattern: source.to_string(),
                    message: e.to_string(),
                })
        };
        // The bare source must parse on its own, or unbalanced groups could
        // close the anchoring group.
        build(source)?;
        let regex = build(&format!(r"\A(?:{})\z", source))?;
        Ok(Self {
            source: source.to_string(),
            case_sensitive,
            regex,
        })
    }

    /// True iff the pattern matches the entire input.
    pub fn is_full_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl TryFrom<PatternSource> for Pattern {
    type Error = ConditionError;

    fn try_from(raw: PatternSource) -> Result<Self, Self::Error> {
        Pattern::new(&raw.source, raw.case_sensitive)
    }
}

impl From<Pattern> for PatternSource {
    fn from(pattern: Pattern) -> Self {
        PatternSource {
            source: pattern.source,
            case_sensitive: pattern.case_sensitive,
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_sensitive == other.case_sensitive
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("case_sensitive", &self.case_sensitive)
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)?;
        if !self.case_sensitive {
            write!(f, "i")?;
        }
        Ok(())
    }
}
