use serde::Deserialize;
use thiserror::Error;

/// Number of options every question carries.
pub const NUM_OPTIONS: usize = 4;

/// A single multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; NUM_OPTIONS],
    #[serde(alias = "ans")]
    pub correct_option: String,
}

/// Reasons a question record is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),

    #[error("correct option {0:?} is not one of the options")]
    CorrectOptionMissing(String),
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: [&str; NUM_OPTIONS],
        correct_option: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let question = Self {
            text: text.into(),
            options: options.map(str::to_string),
            correct_option: correct_option.into(),
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks the record invariants: non-empty text, distinct options and
    /// `correct_option` being one of them.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        if self.option_position(&self.correct_option).is_none() {
            return Err(QuestionError::CorrectOptionMissing(
                self.correct_option.clone(),
            ));
        }

        Ok(())
    }

    pub fn option_position(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option == option
    }
}
