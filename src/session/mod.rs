//! Quiz session state: the question bank, the navigation cursor and the
//! recorded answers.

mod answers;
mod navigation;

pub use answers::{AnswerOutcome, AnswerStore};
pub use navigation::Navigator;

use thiserror::Error;

use crate::models::{Question, QuestionError};

/// Reasons a question list cannot back a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQuiz {
    #[error("a quiz needs at least one question")]
    Empty,

    #[error("question {} is invalid: {source}", .index + 1)]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// One run through a question bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    navigator: Navigator,
    answers: AnswerStore,
}

impl QuizSession {
    /// Every question must pass [`Question::validate`].
    pub fn new(questions: Vec<Question>) -> Result<Self, InvalidQuiz> {
        if questions.is_empty() {
            return Err(InvalidQuiz::Empty);
        }
        for (index, question) in questions.iter().enumerate() {
            question
                .validate()
                .map_err(|source| InvalidQuiz::InvalidQuestion { index, source })?;
        }
        let navigator = Navigator::new(questions.len());
        Ok(Self {
            questions,
            navigator,
            answers: AnswerStore::new(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.navigator.current()]
    }

    pub fn is_first(&self) -> bool {
        self.navigator.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.navigator.is_last()
    }

    pub fn advance(&mut self) -> bool {
        self.navigator.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.navigator.retreat()
    }

    pub fn record_answer(&mut self, index: usize, option: &str) -> AnswerOutcome {
        self.answers.record(&self.questions, index, option)
    }

    /// Records `option` for the question under the cursor.
    pub fn answer_current(&mut self, option: &str) -> AnswerOutcome {
        let index = self.navigator.current();
        self.record_answer(index, option)
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index)
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.answers.is_correct(&self.questions, index)
    }

    pub fn score(&self) -> usize {
        self.answers.score()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    pub fn rewind(&mut self) {
        self.navigator.reset();
    }

    /// Clears answers and score and moves back to the first question.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.navigator.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> QuizSession {
        QuizSession::new(vec![
            Question::new("one", ["a", "b", "c", "d"], "a").unwrap(),
            Question::new("two", ["a", "b", "c", "d"], "b").unwrap(),
            Question::new("three", ["a", "b", "c", "d"], "c").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        assert_eq!(QuizSession::new(Vec::new()).unwrap_err(), InvalidQuiz::Empty);
    }

    #[test]
    fn test_invalid_question_is_rejected() {
        let questions = vec![
            Question::new("fine", ["a", "b", "c", "d"], "a").unwrap(),
            Question {
                text: "broken".to_string(),
                options: ["a", "a", "c", "d"].map(str::to_string),
                correct_option: "a".to_string(),
            },
        ];
        assert_eq!(
            QuizSession::new(questions).unwrap_err(),
            InvalidQuiz::InvalidQuestion {
                index: 1,
                source: QuestionError::DuplicateOption("a".to_string()),
            }
        );
    }

    #[test]
    fn test_answer_current_follows_cursor() {
        let mut s = session();
        s.advance();
        assert_eq!(s.answer_current("b"), AnswerOutcome::Correct);
        assert_eq!(s.answer(1), Some("b"));
        assert_eq!(s.answer(0), None);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut s = session();
        s.answer_current("a");
        s.advance();
        s.advance();
        s.reset();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.answered_count(), 0);
    }

    #[test]
    fn test_rewind_keeps_answers() {
        let mut s = session();
        s.advance();
        s.answer_current("c");
        s.rewind();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.answer(1), Some("c"));
    }
}
