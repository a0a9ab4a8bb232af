//! Notes API integration tests
//!
//! Drives `/api/notes` through the real router and SQLite store.

#[macro_use]
mod common;

use axum::http::StatusCode;
use common::TestBoard;
use pretty_assertions::assert_eq;
use serde_json::json;
use stickyboard::shared::NoteType;

#[tokio::test]
async fn test_create_note_with_defaults() {
    let board = TestBoard::new().await;

    let note = board.create_note(json!({ "type": "TEXT" })).await;

    assert_eq!(note.note_type, NoteType::Text);
    assert_eq!(note.content, None);
    assert_eq!((note.position_x, note.position_y), (100.0, 100.0));
    assert_eq!((note.width, note.height), (200, 200));
    assert_eq!(note.color, "#FFEB3B");
    assert_eq!(note.created_by, "Anonymous");
    assert_eq!(note.created_at, note.updated_at);
}

#[tokio::test]
async fn test_create_note_keeps_supplied_fields_and_ignores_ids() {
    let board = TestBoard::new().await;

    let note = board
        .create_note(json!({
            "id": 999,
            "type": "IMAGE",
            "content": "https://example.com/cat.png",
            "positionX": 12.5,
            "positionY": -4.0,
            "width": 320,
            "height": 240,
            "color": "#00FF00",
            "createdBy": "alice",
            "createdAt": "2001-01-01T00:00:00Z"
        }))
        .await;

    assert_ne!(note.id, 999);
    assert_eq!(note.note_type, NoteType::Image);
    assert_eq!(note.content.as_deref(), Some("https://example.com/cat.png"));
    assert_eq!((note.position_x, note.position_y), (12.5, -4.0));
    assert_eq!((note.width, note.height), (320, 240));
    assert_eq!(note.color, "#00FF00");
    assert_eq!(note.created_by, "alice");
    assert!(note.created_at.timestamp() > 978_307_200);
}

#[tokio::test]
async fn test_create_note_stores_coordinates_bit_exact() {
    let board = TestBoard::new().await;
    let x: f64 = -116009090.81996089;
    let y: f64 = 0.1 + 0.2;

    let response = board
        .server
        .post("/api/notes")
        .text(r#"{"type":"TEXT","positionX":-116009090.81996089,"positionY":0.30000000000000004}"#)
        .content_type("application/json")
        .await;
    response.assert_status_ok();

    let (stored_x, stored_y): (f64, f64) =
        sqlx::query_as("SELECT position_x, position_y FROM sticky_notes")
            .fetch_one(board.store.pool())
            .await
            .unwrap();
    assert_eq!(stored_x.to_bits(), x.to_bits());
    assert_eq!(stored_y.to_bits(), y.to_bits());

    let listed = &board.notes().await[0];
    assert_eq!(listed.position_x.to_bits(), x.to_bits());
}

#[tokio::test]
async fn test_list_returns_created_notes() {
    let board = TestBoard::new().await;
    assert!(board.notes().await.is_empty());

    let first = board.create_note(json!({ "type": "TEXT", "content": "a" })).await;
    let second = board.create_note(json!({ "type": "TEXT", "content": "b" })).await;

    let ids: Vec<i64> = board.notes().await.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_create_note_without_type_is_rejected() {
    let board = TestBoard::new().await;

    let response = board
        .server
        .post("/api/notes")
        .json(&json!({ "content": "no type" }))
        .await;

    assert_error_response!(response, StatusCode::BAD_REQUEST);
    assert!(board.notes().await.is_empty());
}

#[tokio::test]
async fn test_malformed_note_body_is_client_error() {
    let board = TestBoard::new().await;

    let response = board
        .server
        .post("/api/notes")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_update_position_moves_only_position() {
    let board = TestBoard::new().await;
    let note = board
        .create_note(json!({ "type": "TEXT", "content": "plan", "color": "#123456" }))
        .await;

    let response = board
        .server
        .put(&format!("/api/notes/{}/position", note.id))
        .add_query_param("x", 10.5)
        .add_query_param("y", 20)
        .await;
    response.assert_status_ok();

    let moved: stickyboard::shared::StickyNote = response.json();
    assert_eq!((moved.position_x, moved.position_y), (10.5, 20.0));
    assert_eq!(moved.content, note.content);
    assert_eq!(moved.color, note.color);
    assert_eq!((moved.width, moved.height), (note.width, note.height));
    assert_eq!(moved.created_at, note.created_at);
    assert!(moved.updated_at >= note.updated_at);

    let stored = board.notes().await;
    assert_eq!((stored[0].position_x, stored[0].position_y), (10.5, 20.0));
}

#[tokio::test]
async fn test_update_position_missing_note_is_404() {
    let board = TestBoard::new().await;

    let response = board
        .server
        .put("/api/notes/4242/position?x=1&y=2")
        .await;

    assert_error_response!(response, StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "4242");
}

#[tokio::test]
async fn test_update_position_rejects_non_numeric() {
    let board = TestBoard::new().await;
    let note = board.create_note(json!({ "type": "TEXT" })).await;

    let response = board
        .server
        .put(&format!("/api/notes/{}/position?x=left&y=2", note.id))
        .await;

    assert!(response.status_code().is_client_error());
    assert_eq!(board.notes().await[0].position_x, 100.0);
}

#[tokio::test]
async fn test_update_position_rejects_non_finite() {
    let board = TestBoard::new().await;
    let note = board.create_note(json!({ "type": "TEXT" })).await;

    for query in ["x=NaN&y=1", "x=1&y=inf", "x=-inf&y=-inf"] {
        let response = board
            .server
            .put(&format!("/api/notes/{}/position?{query}", note.id))
            .await;
        assert_error_response!(response, StatusCode::BAD_REQUEST);
    }

    let stored = &board.notes().await[0];
    assert_eq!((stored.position_x, stored.position_y), (100.0, 100.0));
}

#[tokio::test]
async fn test_delete_note_is_idempotent() {
    let board = TestBoard::new().await;
    let note = board.create_note(json!({ "type": "TEXT" })).await;
    let path = format!("/api/notes/{}", note.id);

    let first = board.server.delete(&path).await;
    first.assert_status_ok();
    assert_eq!(first.text(), "");

    board.server.delete(&path).await.assert_status_ok();
    board.server.delete("/api/notes/777").await.assert_status_ok();

    assert!(board.notes().await.is_empty());
}

#[tokio::test]
async fn test_delete_note_removes_its_comments() {
    let board = TestBoard::new().await;
    let doomed = board.create_note(json!({ "type": "TEXT" })).await;
    let kept = board.create_note(json!({ "type": "TEXT" })).await;

    for i in 0..3 {
        board
            .create_comment(json!({ "stickyNoteId": doomed.id, "content": format!("c{i}") }))
            .await;
    }
    board
        .create_comment(json!({ "stickyNoteId": kept.id, "content": "stays" }))
        .await;

    board
        .server
        .delete(&format!("/api/notes/{}", doomed.id))
        .await
        .assert_status_ok();

    assert!(board.comments(doomed.id).await.is_empty());
    assert_eq!(board.comments(kept.id).await.len(), 1);
    assert_eq!(board.comment_rows().await, 1);
}
