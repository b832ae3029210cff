//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur while parsing a persisted vocabulary entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing \" -> \" delimiter in entry: {entry}")]
    MissingDelimiter { entry: String },

    #[error("empty source or target in entry: {entry}")]
    EmptyField { entry: String },
}

/// Errors that can occur while building or advancing a quiz session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("no saved vocabulary to build a quiz from")]
    EmptyVocabulary,

    #[error("answer {0:?} is not one of the current question's options")]
    InvalidAnswerSubmission(String),

    #[error("quiz session is already finished")]
    SessionFinished,
}
