//! Quiz session construction and scoring.
//!
//! A session is a fixed, randomized deck of multiple-choice questions with
//! a session-wide pool of 3 attempts. All transitions are pure
//! value-to-value transformations; the caller owns the session and is
//! responsible for serializing submissions against it.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::parser::parse_saved_list;
use crate::types::{DistractorPool, Question, QuizSession, QuizStatus, VocabularyEntry};

/// Maximum number of questions drawn into one session.
pub const MAX_QUESTIONS: usize = 15;

/// Attempts shared across the whole session. A correct answer never
/// replenishes the pool.
pub const INITIAL_ATTEMPTS: u32 = 3;

/// Distractors drawn per question when the pool allows.
const DISTRACTORS_PER_QUESTION: usize = 3;

/// Build a session from the raw persisted list using thread-local
/// randomness.
pub fn build_session(
    raw_entries: &[String],
    pool: &DistractorPool,
    max_questions: usize,
) -> Result<QuizSession> {
    build_session_with_rng(raw_entries, pool, max_questions, &mut rand::thread_rng())
}

/// Build a session with caller-supplied randomness.
///
/// Malformed entries are skipped during parsing; `EmptyVocabulary` is
/// returned when no valid entry remains, since a session must hold at
/// least one question.
pub fn build_session_with_rng(
    raw_entries: &[String],
    pool: &DistractorPool,
    max_questions: usize,
    rng: &mut impl Rng,
) -> Result<QuizSession> {
    let mut entries = parse_saved_list(raw_entries);
    if entries.is_empty() {
        return Err(QuizError::EmptyVocabulary);
    }

    entries.shuffle(rng);
    entries.truncate(max_questions);

    let questions = entries
        .into_iter()
        .map(|entry| build_question(entry, pool, rng))
        .collect();

    Ok(QuizSession {
        questions,
        current_index: 0,
        attempts_remaining: INITIAL_ATTEMPTS,
        status: QuizStatus::InProgress,
    })
}

/// Assemble one question: classify the entry, draw unique distractors of
/// the matching kind, and shuffle the options.
fn build_question(entry: VocabularyEntry, pool: &DistractorPool, rng: &mut impl Rng) -> Question {
    let kind = entry.kind();

    let mut seen = HashSet::new();
    let candidates: Vec<&str> = pool
        .candidates(kind)
        .iter()
        .map(String::as_str)
        .filter(|d| *d != entry.target && seen.insert(*d))
        .collect();

    let mut options = vec![entry.target.clone()];
    options.extend(
        candidates
            .choose_multiple(rng, DISTRACTORS_PER_QUESTION)
            .map(|d| d.to_string()),
    );
    options.shuffle(rng);

    Question {
        prompt: entry.source,
        correct_answer: entry.target,
        options,
        kind,
    }
}

impl QuizSession {
    /// Apply one answer submission and return the next session state.
    ///
    /// A correct answer advances to the next question, or wins the session
    /// on the last one. A wrong answer burns one attempt from the shared
    /// pool and re-presents the same question; the third cumulative wrong
    /// answer loses the session.
    pub fn submit_answer(&self, chosen: &str) -> Result<QuizSession> {
        if self.status != QuizStatus::InProgress {
            return Err(QuizError::SessionFinished);
        }
        let question = self.current_question().ok_or(QuizError::SessionFinished)?;
        if !question.options.iter().any(|o| o == chosen) {
            return Err(QuizError::InvalidAnswerSubmission(chosen.to_string()));
        }

        let mut next = self.clone();
        if chosen == question.correct_answer {
            if self.current_index + 1 == self.questions.len() {
                next.status = QuizStatus::Won;
            } else {
                next.current_index += 1;
            }
        } else {
            next.attempts_remaining -= 1;
            if next.attempts_remaining == 0 {
                next.status = QuizStatus::Lost;
            }
        }
        Ok(next)
    }

    /// Restart with the same deck: same question order, same option order,
    /// counters back to their initial values.
    pub fn reset(&self) -> QuizSession {
        QuizSession {
            questions: self.questions.clone(),
            current_index: 0,
            attempts_remaining: INITIAL_ATTEMPTS,
            status: QuizStatus::InProgress,
        }
    }
}
