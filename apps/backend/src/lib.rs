pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quiz_core::DistractorPool;

use crate::db::Database;
use crate::models::CardCatalog;
use crate::services::sessions::SessionRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub sessions: Arc<SessionRegistry>,
    pub distractors: Arc<DistractorPool>,
    pub cards: Arc<CardCatalog>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:hebrew_practice.db?mode=rwc".to_string());

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    tracing::info!("Loading embedded datasets...");
    let distractors = services::static_data::distractor_pool()?;
    let cards = services::static_data::card_catalog()?;

    let state = AppState {
        db: Arc::new(db),
        sessions: Arc::new(SessionRegistry::default()),
        distractors: Arc::new(distractors),
        cards: Arc::new(cards),
    };

    let app = router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Saved word list routes
        .route("/api/words/{user_id}", get(routes::words::list))
        .route("/api/words/{user_id}", post(routes::words::add))
        .route("/api/words/{user_id}", delete(routes::words::remove))
        // Quiz session routes
        .route("/api/quiz/{user_id}", post(routes::quiz::start))
        .route("/api/quiz/session/{id}", get(routes::quiz::view))
        .route("/api/quiz/session/{id}", delete(routes::quiz::discard))
        .route("/api/quiz/session/{id}/answer", post(routes::quiz::answer))
        .route("/api/quiz/session/{id}/reset", post(routes::quiz::reset))
        // Flash card routes
        .route("/api/cards", get(routes::cards::categories))
        .route("/api/cards/{category}", get(routes::cards::category_cards))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
