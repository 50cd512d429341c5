mod question;

pub use question::{Question, QuestionError, NUM_OPTIONS};

/// Where the quiz is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Home screen, no quiz running.
    #[default]
    NotStarted,
    /// Answering questions.
    InProgress,
    /// Submit was requested and waits for a yes/no.
    AwaitingSubmitConfirmation,
    /// Submitted; the score and summary are frozen.
    Finished,
}
