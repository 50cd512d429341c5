//! Render-agnostic projection of the quiz session.
//!
//! Everything a surface needs to draw the current question is derived here
//! from [`QuizSession`]; the surface only decides where and how.

use crate::controller::SummaryEntry;
use crate::session::QuizSession;

pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Visual state of a single option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Unselected,
    CorrectSelected,
    WrongSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub label: char,
    pub text: &'a str,
    pub state: OptionState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub text: &'a str,
    /// In original order.
    pub options: Vec<OptionView<'a>>,
    /// Shown after a wrong choice.
    pub feedback: Option<String>,
    /// Options are disabled once the question has an answer.
    pub locked: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl QuestionView<'_> {
    pub fn indicator(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

pub fn question_view(session: &QuizSession) -> QuestionView<'_> {
    let index = session.current_index();
    let question = session.current_question();
    let answer = session.answer(index);

    let options = question
        .options
        .iter()
        .zip(OPTION_LABELS)
        .map(|(option, label)| {
            let state = match answer {
                Some(chosen) if chosen == option && question.is_correct(option) => {
                    OptionState::CorrectSelected
                }
                Some(chosen) if chosen == option => OptionState::WrongSelected,
                _ => OptionState::Unselected,
            };
            OptionView {
                label,
                text: option.as_str(),
                state,
            }
        })
        .collect();

    let feedback = match answer {
        Some(_) if !session.is_correct(index) => Some(feedback_text(&question.correct_option)),
        _ => None,
    };

    QuestionView {
        number: index + 1,
        total: session.total_questions(),
        text: &question.text,
        options,
        feedback,
        locked: answer.is_some(),
        can_go_back: !session.is_first(),
        can_go_forward: !session.is_last(),
    }
}

pub fn feedback_text(correct_option: &str) -> String {
    format!("\u{2705} Correct Answer: {}", correct_option)
}

pub fn summary_question_line(entry: &SummaryEntry) -> String {
    format!("{}  {}", entry.number, entry.question)
}

pub fn summary_answer_line(entry: &SummaryEntry) -> String {
    format!("\u{2192} {}", entry.correct_option)
}
