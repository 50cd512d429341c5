//! Session lifecycle: start, submit with confirmation, restart and home.

use tracing::{debug, info};

use crate::models::{Question, SessionState};
use crate::session::{AnswerOutcome, InvalidQuiz, QuizSession};

/// One line of the post-submit summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    /// 1-based question number.
    pub number: usize,
    pub question: String,
    pub correct_option: String,
}

/// Score and summary frozen at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub score: usize,
    pub total: usize,
    pub answered: usize,
    /// Reported separately; unanswered questions are not counted as wrong.
    pub unanswered: usize,
    pub summary: Vec<SummaryEntry>,
}

impl FinalReport {
    fn from_session(session: &QuizSession) -> Self {
        let summary = session
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| SummaryEntry {
                number: index + 1,
                question: question.text.clone(),
                correct_option: question.correct_option.clone(),
            })
            .collect();

        let total = session.total_questions();
        let answered = session.answered_count();
        Self {
            score: session.score(),
            total,
            answered,
            unanswered: total - answered,
            summary,
        }
    }

    pub fn score_text(&self) -> String {
        format!("You scored: {} / {}", self.score, self.total)
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Owns the quiz session and drives it through its states. Calls that do
/// not apply to the current state are ignored and return `false`.
#[derive(Debug, Clone)]
pub struct SessionController {
    state: SessionState,
    session: QuizSession,
    report: Option<FinalReport>,
}

impl SessionController {
    pub fn new(questions: Vec<Question>) -> Result<Self, InvalidQuiz> {
        Ok(Self {
            state: SessionState::NotStarted,
            session: QuizSession::new(questions)?,
            report: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Present once the quiz is finished.
    pub fn report(&self) -> Option<&FinalReport> {
        self.report.as_ref()
    }

    fn transition(&mut self, from: SessionState, to: SessionState, action: &str) -> bool {
        if self.state != from {
            debug!(action, state = ?self.state, "transition not allowed");
            return false;
        }
        info!(action, ?from, ?to, "session transition");
        self.state = to;
        true
    }

    /// Moves to the first question without touching recorded answers.
    pub fn start(&mut self) -> bool {
        if !self.transition(SessionState::NotStarted, SessionState::InProgress, "start") {
            return false;
        }
        self.session.rewind();
        true
    }

    pub fn request_submit(&mut self) -> bool {
        self.transition(
            SessionState::InProgress,
            SessionState::AwaitingSubmitConfirmation,
            "request_submit",
        )
    }

    pub fn cancel_submit(&mut self) -> bool {
        self.transition(
            SessionState::AwaitingSubmitConfirmation,
            SessionState::InProgress,
            "cancel_submit",
        )
    }

    /// Submission is allowed with unanswered questions.
    pub fn confirm_submit(&mut self) -> bool {
        if !self.transition(
            SessionState::AwaitingSubmitConfirmation,
            SessionState::Finished,
            "confirm_submit",
        ) {
            return false;
        }
        let report = FinalReport::from_session(&self.session);
        info!(
            score = report.score,
            total = report.total,
            unanswered = report.unanswered,
            "quiz submitted"
        );
        self.report = Some(report);
        true
    }

    pub fn restart(&mut self) -> bool {
        if !self.transition(SessionState::Finished, SessionState::InProgress, "restart") {
            return false;
        }
        self.clear();
        true
    }

    pub fn go_home(&mut self) -> bool {
        if !self.transition(SessionState::Finished, SessionState::NotStarted, "go_home") {
            return false;
        }
        self.clear();
        true
    }

    fn clear(&mut self) {
        self.session.reset();
        self.report = None;
    }

    pub fn next_question(&mut self) -> bool {
        self.state == SessionState::InProgress && self.session.advance()
    }

    pub fn previous_question(&mut self) -> bool {
        self.state == SessionState::InProgress && self.session.retreat()
    }

    /// Answers the current question with the option at `position`.
    pub fn select_option(&mut self, position: usize) -> AnswerOutcome {
        if self.state != SessionState::InProgress {
            return AnswerOutcome::Ignored;
        }
        let Some(option) = self.session.current_question().options.get(position).cloned() else {
            return AnswerOutcome::Ignored;
        };
        self.session.answer_current(&option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_questions;
    use crate::models::QuestionError;

    fn controller() -> SessionController {
        SessionController::new(default_questions()).unwrap()
    }

    fn position_of(c: &SessionController, index: usize, option: &str) -> usize {
        c.session().questions()[index].option_position(option).unwrap()
    }

    #[test]
    fn test_rejects_unlisted_correct_option() {
        let broken = Question {
            text: "Pick one".to_string(),
            options: ["a", "b", "c", "d"].map(str::to_string),
            correct_option: "zzz".to_string(),
        };
        let err = SessionController::new(vec![broken]).unwrap_err();
        assert_eq!(
            err,
            InvalidQuiz::InvalidQuestion {
                index: 0,
                source: QuestionError::CorrectOptionMissing("zzz".to_string()),
            }
        );
        assert_eq!(
            err.to_string(),
            "question 1 is invalid: correct option \"zzz\" is not one of the options"
        );
    }

    #[test]
    fn test_full_lifecycle() {
        let mut c = controller();
        assert_eq!(c.state(), SessionState::NotStarted);
        assert!(c.start());
        assert_eq!(c.state(), SessionState::InProgress);
        assert!(c.request_submit());
        assert!(c.cancel_submit());
        assert_eq!(c.state(), SessionState::InProgress);
        assert!(c.request_submit());
        assert!(c.confirm_submit());
        assert_eq!(c.state(), SessionState::Finished);
        assert!(c.go_home());
        assert_eq!(c.state(), SessionState::NotStarted);
    }

    #[test]
    fn test_wrong_state_calls_are_ignored() {
        let mut c = controller();
        assert!(!c.request_submit());
        assert!(!c.confirm_submit());
        assert!(!c.restart());
        assert!(!c.next_question());
        assert_eq!(c.select_option(0), AnswerOutcome::Ignored);
        c.start();
        assert!(!c.start());
        assert!(!c.confirm_submit());
        assert!(!c.go_home());
        assert_eq!(c.state(), SessionState::InProgress);
    }

    #[test]
    fn test_navigation_frozen_while_confirming() {
        let mut c = controller();
        c.start();
        c.request_submit();
        assert!(!c.next_question());
        assert_eq!(c.select_option(0), AnswerOutcome::Ignored);
        assert_eq!(c.session().current_index(), 0);
    }

    #[test]
    fn test_one_correct_one_wrong_of_ten() {
        let mut c = controller();
        c.start();
        let correct = position_of(&c, 0, "Manage hardware resources");
        assert_eq!(c.select_option(correct), AnswerOutcome::Correct);
        c.next_question();
        let wrong = position_of(&c, 1, "Windows");
        assert_eq!(c.select_option(wrong), AnswerOutcome::Wrong);
        c.request_submit();
        c.confirm_submit();

        let report = c.report().unwrap();
        assert_eq!(report.score_text(), "You scored: 1 / 10");
        assert_eq!(report.answered, 2);
        assert_eq!(report.unanswered, 8);
        assert_eq!(report.summary.len(), 10);
        assert_eq!(report.summary[1].number, 2);
        assert_eq!(report.summary[1].correct_option, "Linux");
    }

    #[test]
    fn test_restart_clears_answers_and_returns_to_first() {
        let mut c = controller();
        c.start();
        c.select_option(0);
        c.next_question();
        c.next_question();
        c.request_submit();
        c.confirm_submit();
        assert!(c.restart());
        assert_eq!(c.state(), SessionState::InProgress);
        assert_eq!(c.session().current_index(), 0);
        assert_eq!(c.session().score(), 0);
        assert_eq!(c.session().answer(0), None);
        assert!(c.report().is_none());
    }

    #[test]
    fn test_home_then_start_begins_fresh() {
        let mut c = controller();
        c.start();
        c.select_option(0);
        assert_eq!(c.session().answer(0), Some("Manage hardware resources"));
        c.next_question();
        c.request_submit();
        c.confirm_submit();
        c.go_home();
        c.start();
        assert_eq!(c.session().current_index(), 0);
        assert_eq!(c.session().answer(0), None);
    }

    #[test]
    fn test_report_is_frozen_after_submit() {
        let mut c = controller();
        c.start();
        c.request_submit();
        c.confirm_submit();
        assert_eq!(c.select_option(0), AnswerOutcome::Ignored);
        assert_eq!(c.report().unwrap().score, 0);
    }
}
