//! Common test utilities and fixtures for integration tests.
//!
//! Tests run against an isolated in-memory SQLite database per context,
//! so no external services are required.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use hebrew_practice_backend::db::Database;
use hebrew_practice_backend::services::sessions::SessionRegistry;
use hebrew_practice_backend::services::static_data;
use hebrew_practice_backend::{router, AppState};

/// Test context containing the database handle and the app router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context over a fresh in-memory database.
    pub async fn new() -> Self {
        let db = Database::connect_in_memory()
            .await
            .expect("Failed to open in-memory test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            sessions: Arc::new(SessionRegistry::default()),
            distractors: Arc::new(
                static_data::distractor_pool().expect("embedded distractor data is valid"),
            ),
            cards: Arc::new(static_data::card_catalog().expect("embedded card data is valid")),
        };

        let app = router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Seed saved entries for a user directly through the repository.
    pub async fn seed_entries(&self, user_id: &str, entries: &[&str]) {
        for entry in entries {
            self.db
                .add_entry(user_id, entry)
                .await
                .expect("Failed to seed entry");
        }
    }
}
