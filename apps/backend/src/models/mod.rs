//! Database models and API types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from quiz-core
pub use quiz_core::types::{
    DistractorPool, EntryKind, Question, QuizSession, QuizStatus, VocabularyEntry,
};

// === Database Entity Types ===

/// Saved entry row: one `"<source> -> <target>"` string per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSavedEntry {
    pub id: i64,
    pub user_id: String,
    pub entry: String,
    pub created_at: DateTime<Utc>,
}

// === API Types ===

/// One saved pair with its pronunciation hint, as rendered in the word
/// tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedWord {
    pub english: String,
    pub hebrew: String,
    pub pronunciation: String,
    pub kind: EntryKind,
}

impl SavedWord {
    /// Build from a parsed vocabulary entry.
    pub fn from_entry(entry: &VocabularyEntry) -> Self {
        Self {
            english: entry.source.clone(),
            hebrew: entry.target.clone(),
            pronunciation: quiz_core::transliterate(&entry.target),
            kind: entry.kind(),
        }
    }
}

/// GET /api/words/{user_id} response: words and sentences listed
/// separately, the way the saved-list view renders them.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedListResponse {
    pub words: Vec<SavedWord>,
    pub sentences: Vec<SavedWord>,
}

/// POST / DELETE /api/words/{user_id} payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordPayload {
    pub english: String,
    pub hebrew: String,
}

impl WordPayload {
    /// The persisted `"<source> -> <target>"` form.
    pub fn to_entry_string(&self) -> String {
        format!("{} -> {}", self.english.trim(), self.hebrew.trim())
    }
}

/// Client-facing projection of one question; the correct answer is
/// withheld.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub prompt: String,
    pub options: Vec<String>,
    pub kind: EntryKind,
}

/// Client-facing projection of a session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub current_question: Option<QuestionView>,
    pub current_index: usize,
    pub question_count: usize,
    pub attempts_remaining: u32,
    pub status: QuizStatus,
    pub progress: f64,
}

impl SessionView {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            current_question: session.current_question().map(|q| QuestionView {
                prompt: q.prompt.clone(),
                options: q.options.clone(),
                kind: q.kind,
            }),
            current_index: session.current_index,
            question_count: session.questions.len(),
            attempts_remaining: session.attempts_remaining,
            status: session.status,
            progress: session.progress(),
        }
    }
}

/// POST /api/quiz/{user_id} response.
#[derive(Debug, Serialize, Deserialize)]
pub struct StartQuizResponse {
    pub session_id: Uuid,
    pub view: SessionView,
}

/// POST /api/quiz/session/{id}/answer payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub option: String,
}

/// POST /api/quiz/session/{id}/answer response.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub view: SessionView,
}

/// One flash card in the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashCard {
    pub id: u32,
    pub image: String,
    pub english: String,
    pub hebrew: String,
}

/// Catalog of flash cards grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardCatalog {
    pub categories: BTreeMap<String, Vec<FlashCard>>,
}

impl CardCatalog {
    pub fn category_names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    pub fn get(&self, category: &str) -> Option<&[FlashCard]> {
        self.categories.get(category).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_word_carries_pronunciation() {
        let entry = VocabularyEntry {
            source: "Hello".to_string(),
            target: "שלום".to_string(),
        };
        let word = SavedWord::from_entry(&entry);
        assert_eq!(word.english, "Hello");
        assert_eq!(word.hebrew, "שלום");
        assert_eq!(word.pronunciation, "ShLOM");
        assert_eq!(word.kind, EntryKind::Word);
    }

    #[test]
    fn word_payload_formats_the_stored_entry() {
        let payload = WordPayload {
            english: " Hello ".to_string(),
            hebrew: " שלום ".to_string(),
        };
        assert_eq!(payload.to_entry_string(), "Hello -> שלום");
    }

    #[test]
    fn session_view_withholds_the_correct_answer() {
        let session = QuizSession {
            questions: vec![Question {
                prompt: "Hello".to_string(),
                correct_answer: "שלום".to_string(),
                options: vec!["שלום".to_string(), "כלב".to_string()],
                kind: EntryKind::Word,
            }],
            current_index: 0,
            attempts_remaining: 3,
            status: QuizStatus::InProgress,
        };

        let view = SessionView::from_session(&session);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["current_question"].get("correct_answer").is_none());
        assert_eq!(json["question_count"], 1);
        assert_eq!(json["status"], "in_progress");
    }
}
