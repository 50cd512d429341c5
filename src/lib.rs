//! # quiz-clock
//!
//! A terminal multiple-choice quiz with a live clock.
//!
//! The quiz core ([`SessionController`], [`QuizSession`]) and the clock
//! formatting ([`format_clock`], [`format_date`]) are plain state and pure
//! functions; the terminal screens are a projection of them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_clock::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Built-in question bank, 12-hour clock
//!     let quiz = Quiz::with_default_questions(false)?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod clock;
mod controller;
mod data;
mod models;
mod session;
pub mod terminal;
pub mod ui;
pub mod view;

use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

pub use app::App;
pub use clock::{format_clock, format_date, ClockFace, ClockState};
pub use controller::{FinalReport, SessionController, SummaryEntry};
pub use data::{default_questions, load_questions_from_json, validate_questions, LoadError};
pub use models::{Question, QuestionError, SessionState, NUM_OPTIONS};
pub use session::{AnswerOutcome, AnswerStore, InvalidQuiz, Navigator, QuizSession};

const CLOCK_TICK: Duration = Duration::from_secs(1);
const DATE_TICK: Duration = Duration::from_secs(60 * 60);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    InvalidBank(#[from] InvalidQuiz),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>, use_24h: bool) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::with_questions(questions, use_24h)?,
        })
    }

    pub fn with_default_questions(use_24h: bool) -> Result<Self, QuizError> {
        Self::new(default_questions(), use_24h)
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_clock::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json", true).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, use_24h: bool) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Self::new(questions, use_24h)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        info!(questions = self.app.total_questions(), "starting quiz");
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        let restored = terminal::restore();
        info!("quiz closed");
        first_error(result, restored)
    }
}

async fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    let mut events = EventStream::new();
    let mut clock_tick = time::interval(CLOCK_TICK);
    clock_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut date_tick = time::interval(DATE_TICK);
    date_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = clock_tick.tick() => app.tick_clock(&Local::now()),
            _ = date_tick.tick() => app.refresh_date(&Local::now()),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if handle_input(app, key.code) {
                        app.should_quit = true;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}

/// The event-loop error wins over a failed terminal restore.
fn first_error(result: Result<(), QuizError>, restored: io::Result<()>) -> Result<(), QuizError> {
    result?;
    restored?;
    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('t') | KeyCode::Char('T')) {
        app.toggle_clock_mode();
        return false;
    }

    match app.state() {
        SessionState::NotStarted => handle_welcome_input(app, key),
        SessionState::InProgress => handle_quiz_input(app, key),
        SessionState::AwaitingSubmitConfirmation => handle_confirm_input(app, key),
        SessionState::Finished => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.choose_option_under_cursor();
            false
        }
        KeyCode::Char(c @ 'a'..='d') => {
            app.choose_option(c as usize - 'a' as usize);
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_question();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_question();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.request_submit();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_confirm_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_submit(),
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') => {
            app.cancel_submit()
        }
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_summary_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_summary_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
