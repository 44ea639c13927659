use serde::{Deserialize, Serialize};
use std::fmt;

/// The input type of an application-form question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    ShortText,
    LongText,
    SingleChoice,
    MultiChoice,
    Dropdown,
    File,
}

impl QuestionKind {
    /// Questions answered by picking one or more option values.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            QuestionKind::SingleChoice | QuestionKind::MultiChoice | QuestionKind::Dropdown
        )
    }

    /// Questions answered with free text, checked against a correctness pattern.
    pub fn is_free_text(self) -> bool {
        matches!(self, QuestionKind::ShortText | QuestionKind::LongText)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionKind::ShortText => "short_text",
            QuestionKind::LongText => "long_text",
            QuestionKind::SingleChoice => "single_choice",
            QuestionKind::MultiChoice => "multi_choice",
            QuestionKind::Dropdown => "dropdown",
            QuestionKind::File => "file",
        };
        write!(f, "{}", name)
    }
}
