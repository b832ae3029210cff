//! Flash card catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::FlashCard;
use crate::AppState;

/// GET /api/cards
pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.cards.category_names())
}

/// GET /api/cards/{category}
pub async fn category_cards(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<FlashCard>>> {
    state
        .cards
        .get(&category)
        .map(|cards| Json(cards.to_vec()))
        .ok_or_else(|| ApiError::NotFound(format!("card category {category}")))
}
