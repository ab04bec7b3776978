use async_trait::async_trait;
use reqwest::{
    Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{NoteStore, StorageError, StoreResult};
use crate::notes::model::{Note, NoteInput};

const TABLE: &str = "notes";
const COLUMNS: &str = "id,title,content,created_at,updated_at";

/// Reads and writes the hosted `notes` table through the Supabase REST (PostgREST) API.
///
/// Each operation is one HTTP round trip; consistency is left to the database.
pub struct SupabaseNoteStore {
    http_client: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct UpdateRow<'a> {
    title: &'a str,
    content: &'a str,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

#[derive(Deserialize)]
struct PostgrestError {
    message: String,
}

impl SupabaseNoteStore {
    pub fn new(base_url: &str, api_key: &str) -> StoreResult<Self> {
        let key = HeaderValue::from_str(api_key)
            .map_err(|_| StorageError::Configuration("API key is not a valid header".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| StorageError::Configuration("API key is not a valid header".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/rest/v1/{TABLE}", base_url.trim_end_matches('/')),
        })
    }

    fn id_filter(id: Uuid) -> (&'static str, String) {
        ("id", format!("eq.{id}"))
    }
}

/// Turns a non-2xx response into a [`StorageError::Remote`], preferring PostgREST's `message` field.
async fn ensure_success(response: Response, context: &'static str) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "no body".to_string());
    let message = serde_json::from_str::<PostgrestError>(&body)
        .map(|e| e.message)
        .unwrap_or_else(|_| format!("{status}: {body}"));
    Err(StorageError::Remote { context, message })
}

/// Row count from a `Content-Range` header such as `0-0/1` or `*/0`.
fn affected_rows(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("content-range")?
        .to_str()
        .ok()?
        .rsplit('/')
        .next()?
        .parse()
        .ok()
}

fn transport(context: &'static str) -> impl FnOnce(reqwest::Error) -> StorageError {
    move |source| StorageError::Transport { context, source }
}

#[async_trait]
impl NoteStore for SupabaseNoteStore {
    fn backend_name(&self) -> &'static str {
        "supabase"
    }

    async fn list(&self) -> StoreResult<Vec<Note>> {
        const CONTEXT: &str = "Failed to fetch notes";
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[("select", COLUMNS), ("order", "updated_at.desc")])
            .send()
            .await
            .map_err(transport(CONTEXT))?;
        let notes: Vec<Note> = ensure_success(response, CONTEXT)
            .await?
            .json()
            .await
            .map_err(transport(CONTEXT))?;
        tracing::debug!(count = notes.len(), "fetched notes");
        Ok(notes)
    }

    async fn create(&self, input: NoteInput) -> StoreResult<Note> {
        const CONTEXT: &str = "Failed to create note";
        let response = self
            .http_client
            .post(&self.endpoint)
            .query(&[("select", COLUMNS)])
            .header("Prefer", "return=representation")
            .json(&input)
            .send()
            .await
            .map_err(transport(CONTEXT))?;
        let rows: Vec<Note> = ensure_success(response, CONTEXT)
            .await?
            .json()
            .await
            .map_err(transport(CONTEXT))?;
        let note = rows
            .into_iter()
            .next()
            .ok_or_else(|| StorageError::Remote {
                context: CONTEXT,
                message: "insert returned no row".to_string(),
            })?;
        Ok(note)
    }

    async fn update(&self, id: Uuid, input: NoteInput) -> StoreResult<Option<Note>> {
        const CONTEXT: &str = "Failed to update note";
        let row = UpdateRow {
            title: &input.title,
            content: &input.content,
            updated_at: OffsetDateTime::now_utc(),
        };
        let response = self
            .http_client
            .patch(&self.endpoint)
            .query(&[Self::id_filter(id)])
            .query(&[("select", COLUMNS)])
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(transport(CONTEXT))?;
        let rows: Vec<Note> = ensure_success(response, CONTEXT)
            .await?
            .json()
            .await
            .map_err(transport(CONTEXT))?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        const CONTEXT: &str = "Failed to delete note";
        let response = self
            .http_client
            .delete(&self.endpoint)
            .query(&[Self::id_filter(id)])
            .header("Prefer", "return=minimal,count=exact")
            .send()
            .await
            .map_err(transport(CONTEXT))?;
        let response = ensure_success(response, CONTEXT).await?;
        Ok(affected_rows(&response).unwrap_or(0) > 0)
    }
}
