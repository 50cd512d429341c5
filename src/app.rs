use chrono::{Datelike, Local, Timelike};
use tracing::debug;

use crate::clock::{format_date, ClockFace, ClockState};
use crate::controller::{FinalReport, SessionController};
use crate::models::{Question, SessionState, NUM_OPTIONS};
use crate::session::{AnswerOutcome, InvalidQuiz};
use crate::view::{question_view, QuestionView};

/// Single owner of everything the terminal shows: the quiz controller, the
/// clock and the cursors that only exist on screen.
pub struct App {
    controller: SessionController,
    clock: ClockState,
    clock_face: ClockFace,
    date_line: String,
    option_cursor: usize,
    summary_scroll: usize,
    pub should_quit: bool,
}

impl App {
    pub fn with_questions(questions: Vec<Question>, use_24h: bool) -> Result<Self, InvalidQuiz> {
        let clock = ClockState::new(use_24h);
        let now = Local::now();
        Ok(Self {
            controller: SessionController::new(questions)?,
            clock,
            clock_face: clock.face(&now),
            date_line: format_date(&now),
            option_cursor: 0,
            summary_scroll: 0,
            should_quit: false,
        })
    }

    pub fn state(&self) -> SessionState {
        self.controller.state()
    }

    pub fn current_view(&self) -> QuestionView<'_> {
        question_view(self.controller.session())
    }

    pub fn report(&self) -> Option<&FinalReport> {
        self.controller.report()
    }

    pub fn total_questions(&self) -> usize {
        self.controller.session().total_questions()
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn summary_scroll(&self) -> usize {
        self.summary_scroll
    }

    pub fn clock_face(&self) -> &ClockFace {
        &self.clock_face
    }

    pub fn date_line(&self) -> &str {
        &self.date_line
    }

    pub fn uses_24h(&self) -> bool {
        self.clock.use_24h
    }

    pub fn tick_clock<T: Timelike>(&mut self, now: &T) {
        self.clock_face = self.clock.face(now);
    }

    pub fn refresh_date<D: Datelike>(&mut self, today: &D) {
        self.date_line = format_date(today);
    }

    pub fn toggle_clock_mode(&mut self) {
        self.clock.toggle();
        debug!(use_24h = self.clock.use_24h, "clock mode toggled");
        self.tick_clock(&Local::now());
    }

    pub fn start_quiz(&mut self) {
        if self.controller.start() {
            self.option_cursor = 0;
        }
    }

    pub fn select_next_option(&mut self) {
        self.option_cursor = (self.option_cursor + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.option_cursor = (self.option_cursor + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    pub fn choose_option_under_cursor(&mut self) -> AnswerOutcome {
        self.controller.select_option(self.option_cursor)
    }

    /// Picks the option at `position` directly (the A-D keys).
    pub fn choose_option(&mut self, position: usize) -> AnswerOutcome {
        let outcome = self.controller.select_option(position);
        if outcome != AnswerOutcome::Ignored {
            self.option_cursor = position;
        }
        outcome
    }

    pub fn next_question(&mut self) {
        if self.controller.next_question() {
            self.option_cursor = 0;
        }
    }

    pub fn previous_question(&mut self) {
        if self.controller.previous_question() {
            self.option_cursor = 0;
        }
    }

    pub fn request_submit(&mut self) {
        self.controller.request_submit();
    }

    pub fn confirm_submit(&mut self) {
        if self.controller.confirm_submit() {
            self.summary_scroll = 0;
        }
    }

    pub fn cancel_submit(&mut self) {
        self.controller.cancel_submit();
    }

    pub fn restart(&mut self) {
        if self.controller.restart() {
            self.option_cursor = 0;
        }
    }

    pub fn go_home(&mut self) {
        if self.controller.go_home() {
            self.option_cursor = 0;
        }
    }

    pub fn scroll_summary_down(&mut self) {
        let entries = self.report().map_or(0, |r| r.summary.len());
        // two lines per entry
        let max_scroll = (entries * 2).saturating_sub(1);
        self.summary_scroll = (self.summary_scroll + 1).min(max_scroll);
    }

    pub fn scroll_summary_up(&mut self) {
        self.summary_scroll = self.summary_scroll.saturating_sub(1);
    }
}
