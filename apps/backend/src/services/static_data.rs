//! Static datasets embedded at compile time.
//!
//! The distractor pool and the flash-card catalog are fixed data: they are
//! parsed once at startup and never touched by a network call at quiz time.

use quiz_core::DistractorPool;

use crate::models::CardCatalog;

const DISTRACTORS_JSON: &str = include_str!("../../data/distractors.json");
const CARDS_JSON: &str = include_str!("../../data/cards.json");

/// Distractor pool for quiz construction.
pub fn distractor_pool() -> serde_json::Result<DistractorPool> {
    serde_json::from_str(DISTRACTORS_JSON)
}

/// Flash-card catalog for the browse endpoints.
pub fn card_catalog() -> serde_json::Result<CardCatalog> {
    serde_json::from_str(CARDS_JSON)
}
