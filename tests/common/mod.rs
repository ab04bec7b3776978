#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use memo_app::{AppState, app::router::build_router, notes::store::FileNoteStore};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    app: Router,
    data_file: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    /// App backed by a file store in a fresh temporary directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = dir.path().join(".data").join("notes.json");
        let store = FileNoteStore::new(data_file.clone());

        Self {
            app: build_router(AppState::new(Arc::new(store))),
            data_file,
            _dir: dir,
        }
    }

    pub fn data_file(&self) -> &PathBuf {
        &self.data_file
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request_json(Method::POST, path, Some(body)).await
    }

    pub async fn put_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request_json(Method::PUT, path, Some(body)).await
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        self.request_json(Method::GET, path, None).await
    }

    pub async fn delete_json(&self, path: &str) -> (StatusCode, Value) {
        self.request_json(Method::DELETE, path, None).await
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let (status, bytes) = self
            .request(Method::GET, path, None, Body::empty())
            .await;
        let text = String::from_utf8(bytes).expect("response is not valid utf-8 text");
        (status, text)
    }

    /// Sends `body` verbatim with a JSON content type.
    pub async fn send_raw(&self, method: Method, path: &str, body: &str) -> (StatusCode, Value) {
        let (status, bytes) = self
            .request(
                method,
                path,
                Some("application/json"),
                Body::from(body.to_string()),
            )
            .await;
        (status, parse_json(&bytes))
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (content_type, body) = match body {
            Some(body) => (
                Some("application/json"),
                Body::from(serde_json::to_vec(&body).expect("failed to serialize request body")),
            ),
            None => (None, Body::empty()),
        };
        let (status, bytes) = self.request(method, path, content_type, body).await;
        (status, parse_json(&bytes))
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Body,
    ) -> (StatusCode, Vec<u8>) {
        let mut req_builder = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            req_builder = req_builder.header(header::CONTENT_TYPE, content_type);
        }

        let req = req_builder.body(body).expect("failed to build request");
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read response body");

        (status, bytes.to_vec())
    }

    pub async fn create_note(&self, title: &str, content: &str) -> Value {
        let (status, body) = self
            .post_json(
                "/notes",
                serde_json::json!({ "title": title, "content": content }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body.get("note").cloned().expect("create response misses note")
    }
}

fn parse_json(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes).expect("response is not valid json")
}

pub fn str_field<'a>(value: &'a Value, field: &str) -> &'a str {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing string field `{field}` in {value}"))
}
