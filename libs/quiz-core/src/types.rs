//! Core types for the Hebrew practice quiz.

use serde::{Deserialize, Serialize};

/// Whether the Hebrew side of an entry is a single word or a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Word,
    Sentence,
}

/// A saved translation pair: an English phrase and its Hebrew translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub source: String,
    pub target: String,
}

impl VocabularyEntry {
    /// Classify by whitespace in the target text: no whitespace means a
    /// single word, anything else is a sentence.
    pub fn kind(&self) -> EntryKind {
        if self.target.contains(char::is_whitespace) {
            EntryKind::Sentence
        } else {
            EntryKind::Word
        }
    }
}

/// One multiple-choice question derived from a vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The source text shown to the user.
    pub prompt: String,
    pub correct_answer: String,
    /// The correct answer plus up to 3 distractors, order randomized.
    /// Contains no duplicates; may hold fewer than 4 entries when the
    /// distractor pool cannot supply 3 unique alternatives.
    pub options: Vec<String>,
    pub kind: EntryKind,
}

/// Session outcome state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    InProgress,
    Won,
    Lost,
}

/// A fixed deck of questions plus progression counters.
///
/// The question sequence is fixed at construction; only `submit_answer`
/// and `reset` mutate the counters, always by returning a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    pub questions: Vec<Question>,
    /// 0-based index of the question currently presented.
    pub current_index: usize,
    /// Shared across the whole session, not per-question.
    pub attempts_remaining: u32,
    pub status: QuizStatus,
}

impl QuizSession {
    /// The question currently presented to the user.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Progress fraction for rendering, `(current_index + 1) / len`.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.questions.len() as f64
    }

    pub fn is_over(&self) -> bool {
        self.status != QuizStatus::InProgress
    }
}

/// Static pools of plausible wrong answers, split by entry kind.
///
/// Loaded once at startup; no network call happens at quiz time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistractorPool {
    pub words: Vec<String>,
    pub sentences: Vec<String>,
}

impl DistractorPool {
    /// The candidate subset matching an entry kind.
    pub fn candidates(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Word => &self.words,
            EntryKind::Sentence => &self.sentences,
        }
    }
}
