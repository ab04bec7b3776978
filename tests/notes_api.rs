mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

use crate::common::{TestApp, str_field};

fn timestamp(note: &Value, field: &str) -> OffsetDateTime {
    OffsetDateTime::parse(str_field(note, field), &Rfc3339).expect("timestamp is not rfc3339")
}

fn listed(body: &Value) -> &Vec<Value> {
    body.get("notes")
        .and_then(Value::as_array)
        .expect("list response misses notes array")
}

#[tokio::test]
async fn created_note_is_listed_first() {
    let app = TestApp::new();

    let (status, list_json) = app.get_json("/notes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed(&list_json).is_empty());

    let older = app.create_note("First", "one").await;
    let newer = app.create_note("  Second  ", "  two  ").await;

    assert_eq!(str_field(&newer, "title"), "Second");
    assert_eq!(str_field(&newer, "content"), "two");
    assert_eq!(
        timestamp(&newer, "created_at"),
        timestamp(&newer, "updated_at")
    );

    let (status, list_json) = app.get_json("/notes").await;
    assert_eq!(status, StatusCode::OK);
    let notes = listed(&list_json);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0], newer);
    assert_eq!(notes[1], older);
}

#[tokio::test]
async fn content_defaults_to_empty() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/notes", json!({ "title": "Only title" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(str_field(&body["note"], "content"), "");
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_identity() {
    let app = TestApp::new();
    let created = app.create_note("A", "B").await;
    let id = str_field(&created, "id");

    let (status, body) = app
        .put_json(
            &format!("/notes/{id}"),
            json!({ "title": "A2", "content": "B2" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated = &body["note"];
    assert_eq!(str_field(updated, "id"), id);
    assert_eq!(str_field(updated, "title"), "A2");
    assert_eq!(str_field(updated, "content"), "B2");
    assert_eq!(
        timestamp(updated, "created_at"),
        timestamp(&created, "created_at")
    );
    assert!(timestamp(updated, "updated_at") > timestamp(&created, "updated_at"));

    let (_, list_json) = app.get_json("/notes").await;
    let notes = listed(&list_json);
    assert_eq!(notes.len(), 1);
    assert_eq!(str_field(&notes[0], "title"), "A2");
    assert_eq!(str_field(&notes[0], "content"), "B2");
}

#[tokio::test]
async fn updated_note_moves_to_the_top() {
    let app = TestApp::new();
    let first = app.create_note("first", "").await;
    app.create_note("second", "").await;

    let id = str_field(&first, "id");
    let (status, _) = app
        .put_json(&format!("/notes/{id}"), json!({ "title": "first again" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list_json) = app.get_json("/notes").await;
    let notes = listed(&list_json);
    assert_eq!(str_field(&notes[0], "title"), "first again");
    assert_eq!(str_field(&notes[1], "title"), "second");
}

#[tokio::test]
async fn unknown_ids_report_not_found() {
    let app = TestApp::new();
    app.create_note("keep me", "").await;
    let missing = Uuid::new_v4();

    let (status, body) = app
        .put_json(&format!("/notes/{missing}"), json!({ "title": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(str_field(&body, "error"), "Note not found");

    let (status, body) = app.delete_json(&format!("/notes/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(str_field(&body, "error"), "Note not found");

    let (status, _) = app
        .put_json("/notes/not-a-uuid", json!({ "title": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete_json("/notes/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list_json) = app.get_json("/notes").await;
    assert_eq!(listed(&list_json).len(), 1);
}

#[tokio::test]
async fn deleting_twice_reports_not_found_the_second_time() {
    let app = TestApp::new();
    let note = app.create_note("short lived", "").await;
    let path = format!("/notes/{}", str_field(&note, "id"));

    let (status, body) = app.delete_json(&path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, _) = app.delete_json(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list_json) = app.get_json("/notes").await;
    assert!(listed(&list_json).is_empty());
}

#[tokio::test]
async fn create_validates_payload() {
    let app = TestApp::new();

    let cases = [
        (json!({ "title": "   " }), "Title is required"),
        (json!({ "content": "no title" }), "Title is required"),
        (
            json!({ "title": "t".repeat(121) }),
            "Title must be 120 characters or less",
        ),
        (
            json!({ "title": "ok", "content": "c".repeat(5001) }),
            "Content must be 5000 characters or less",
        ),
    ];
    for (payload, message) in cases {
        let (status, body) = app.post_json("/notes", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(str_field(&body, "error"), message);
    }

    let (status, _) = app
        .post_json(
            "/notes",
            json!({ "title": "t".repeat(120), "content": "c".repeat(5000) }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list_json) = app.get_json("/notes").await;
    assert_eq!(listed(&list_json).len(), 1);
}

#[tokio::test]
async fn title_limit_counts_utf16_units_and_trims_bom() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/notes", json!({ "title": "😀".repeat(61) }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(str_field(&body, "error"), "Title must be 120 characters or less");

    let (status, body) = app.post_json("/notes", json!({ "title": "\u{FEFF}" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(str_field(&body, "error"), "Title is required");

    let (status, body) = app
        .post_json("/notes", json!({ "title": "😀".repeat(60) }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(str_field(&body["note"], "title"), "😀".repeat(60));
}

#[tokio::test]
async fn update_validates_before_lookup() {
    let app = TestApp::new();
    let note = app.create_note("valid", "").await;
    let path = format!("/notes/{}", str_field(&note, "id"));

    let (status, body) = app.put_json(&path, json!({ "title": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(str_field(&body, "error"), "Title is required");

    let missing = format!("/notes/{}", Uuid::new_v4());
    let (status, _) = app.put_json(&missing, json!({ "title": " " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list_json) = app.get_json("/notes").await;
    assert_eq!(str_field(&listed(&list_json)[0], "title"), "valid");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::new();

    let (status, body) = app.send_raw(Method::POST, "/notes", "{\"title\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").and_then(Value::as_str).is_some());

    let (status, _) = app.send_raw(Method::POST, "/notes", "[\"title\"]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn notes_are_persisted_as_a_json_array() {
    let app = TestApp::new();
    let note = app.create_note("on disk", "body").await;

    let raw = std::fs::read_to_string(app.data_file()).expect("data file was not written");
    let stored: Value = serde_json::from_str(&raw).expect("data file is not json");
    let stored = stored.as_array().expect("data file is not an array");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], note);
}

#[tokio::test]
async fn storage_failure_is_reported_as_server_error() {
    let app = TestApp::new();
    std::fs::create_dir_all(app.data_file().parent().unwrap()).unwrap();
    std::fs::write(app.data_file(), "not json").unwrap();

    let (status, body) = app.get_json("/notes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(str_field(&body, "error").starts_with("Notes file is corrupt"));

    let (status, _) = app.post_json("/notes", json!({ "title": "x" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
