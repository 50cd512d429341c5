mod bank;
mod loader;

pub use bank::default_questions;
pub use loader::{load_questions_from_json, validate_questions, LoadError};
