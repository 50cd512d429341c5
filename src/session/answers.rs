use std::collections::BTreeMap;

use tracing::debug;

use crate::models::Question;

/// What happened when an answer was offered to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    /// The question already had an answer; nothing changed.
    AlreadyAnswered,
    /// The index or the option did not match the question bank; nothing changed.
    Ignored,
}

/// Selected option per question index, together with the running score.
///
/// The score lives next to the map so both change in the same call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    answers: BTreeMap<usize, String>,
    score: usize,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first answer for `index`. Later answers for the same
    /// index are ignored.
    pub fn record(&mut self, questions: &[Question], index: usize, option: &str) -> AnswerOutcome {
        let Some(question) = questions.get(index) else {
            debug!(index, "answer for unknown question ignored");
            return AnswerOutcome::Ignored;
        };

        if question.option_position(option).is_none() {
            debug!(index, option, "answer not among the options ignored");
            return AnswerOutcome::Ignored;
        }

        if self.answers.contains_key(&index) {
            debug!(index, "question already answered");
            return AnswerOutcome::AlreadyAnswered;
        }

        let correct = question.is_correct(option);
        self.answers.insert(index, option.to_string());
        if correct {
            self.score += 1;
        }

        debug!(index, correct, score = self.score, "answer recorded");
        if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// False when unanswered.
    pub fn is_correct(&self, questions: &[Question], index: usize) -> bool {
        match (self.get(index), questions.get(index)) {
            (Some(answer), Some(question)) => question.is_correct(answer),
            _ => false,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.answers.iter().map(|(&index, answer)| (index, answer.as_str()))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
        self.score = 0;
    }
}
