//! Saved word list endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use quiz_core::parser::DELIMITER;
use quiz_core::{parse_saved_list, EntryKind};

use crate::error::{ApiError, Result};
use crate::models::{SavedListResponse, SavedWord, WordPayload};
use crate::AppState;

/// GET /api/words/{user_id}
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SavedListResponse>> {
    let raw = state.db.list_entry_strings(&user_id).await?;
    let entries = parse_saved_list(&raw);

    let (words, sentences): (Vec<_>, Vec<_>) = entries
        .iter()
        .map(SavedWord::from_entry)
        .partition(|w| w.kind == EntryKind::Word);

    Ok(Json(SavedListResponse { words, sentences }))
}

/// POST /api/words/{user_id}
pub async fn add(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<WordPayload>,
) -> Result<(StatusCode, Json<SavedWord>)> {
    let word = validate(&payload)?;

    let entry = payload.to_entry_string();
    if !state.db.add_entry(&user_id, &entry).await? {
        return Err(ApiError::Duplicate(entry));
    }

    tracing::debug!(user_id, entry, "saved entry added");
    Ok((StatusCode::CREATED, Json(word)))
}

/// DELETE /api/words/{user_id}
pub async fn remove(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<WordPayload>,
) -> Result<StatusCode> {
    let entry = payload.to_entry_string();
    if !state.db.remove_entry(&user_id, &entry).await? {
        return Err(ApiError::NotFound(entry));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Check a payload before persisting it. The stored format reserves the
/// `" -> "` delimiter, so neither half may contain it or be empty.
fn validate(payload: &WordPayload) -> Result<SavedWord> {
    let english = payload.english.trim();
    let hebrew = payload.hebrew.trim();

    if english.is_empty() || hebrew.is_empty() {
        return Err(ApiError::BadRequest(
            "english and hebrew must be non-empty".to_string(),
        ));
    }
    if english.contains(DELIMITER) || hebrew.contains(DELIMITER) {
        return Err(ApiError::BadRequest(format!(
            "text may not contain the reserved delimiter {DELIMITER:?}"
        )));
    }

    let parsed = quiz_core::parse_entry(&payload.to_entry_string())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(SavedWord::from_entry(&parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_a_plain_pair() {
        let word = validate(&WordPayload {
            english: "Hello".to_string(),
            hebrew: "שלום".to_string(),
        })
        .unwrap();
        assert_eq!(word.pronunciation, "ShLOM");
    }

    #[test]
    fn validate_rejects_empty_halves() {
        let result = validate(&WordPayload {
            english: "  ".to_string(),
            hebrew: "שלום".to_string(),
        });
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn validate_rejects_the_reserved_delimiter() {
        let result = validate(&WordPayload {
            english: "a -> b".to_string(),
            hebrew: "שלום".to_string(),
        });
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
