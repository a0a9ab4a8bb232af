//! Common test utilities and helpers
//!
//! - `TestBoard` fixture: real router over a fresh in-memory SQLite store
//! - request helpers for notes and comments
//! - assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;

use axum::Router;
use axum_test::TestServer;
use serde_json::Value;
use stickyboard::backend::routes::create_router;
use stickyboard::backend::server::AppState;
use stickyboard::backend::store::SqliteStore;
use stickyboard::shared::{Comment, StickyNote};

/// Frames buffered per relay channel in tests
pub const TEST_RELAY_CAPACITY: usize = 64;

/// Running board: HTTP server, the state behind it and its store
pub struct TestBoard {
    pub server: TestServer,
    pub router: Router,
    pub state: AppState,
    pub store: SqliteStore,
}

impl TestBoard {
    pub async fn new() -> Self {
        let store = SqliteStore::in_memory()
            .await
            .expect("Failed to open in-memory store");
        let state = AppState::with_store(store.clone(), TEST_RELAY_CAPACITY);
        let router = create_router(state.clone(), &[]).expect("Failed to build router");
        let server = TestServer::new(router.clone()).expect("Failed to start test server");

        Self {
            server,
            router,
            state,
            store,
        }
    }

    /// POST a note and return the stored record
    pub async fn create_note(&self, body: Value) -> StickyNote {
        let response = self.server.post("/api/notes").json(&body).await;
        response.assert_status_ok();
        response.json()
    }

    /// POST a comment and return the stored record
    pub async fn create_comment(&self, body: Value) -> Comment {
        let response = self.server.post("/api/comments").json(&body).await;
        response.assert_status_ok();
        response.json()
    }

    pub async fn notes(&self) -> Vec<StickyNote> {
        self.server.get("/api/notes").await.json()
    }

    pub async fn comments(&self, note_id: i64) -> Vec<Comment> {
        self.server
            .get(&format!("/api/comments/note/{note_id}"))
            .await
            .json()
    }

    /// Rows in the comments table, bypassing the API
    pub async fn comment_rows(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(self.store.pool())
            .await
            .expect("Failed to count comments")
    }
}
