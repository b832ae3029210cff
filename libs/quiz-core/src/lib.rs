//! Core quiz library shared by the Hebrew practice backend.
//!
//! Provides:
//! - Parser for persisted `"<source> -> <target>"` vocabulary entries
//! - Multiple-choice quiz session construction and scoring
//! - Hebrew transliteration for pronunciation hints
//! - Shared types (VocabularyEntry, Question, QuizStatus, etc.)

pub mod error;
pub mod parser;
pub mod session;
pub mod transliterate;
pub mod types;

pub use error::{ParseError, QuizError, Result};
pub use parser::{parse_entry, parse_saved_list};
pub use session::{build_session, build_session_with_rng, INITIAL_ATTEMPTS, MAX_QUESTIONS};
pub use transliterate::transliterate;
pub use types::{DistractorPool, EntryKind, Question, QuizSession, QuizStatus, VocabularyEntry};
