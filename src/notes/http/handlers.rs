use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    notes::{model::NoteInput, validation::parse_note_input},
};

use super::dto::{DeleteNoteResponse, NoteDto, NotePayload, NoteResponse, NotesResponse};

fn read_payload(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<NoteInput> {
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    parse_note_input(&body).map_err(ApiError::BadRequest)
}

/// Ids that are not UUIDs cannot name a stored note.
fn parse_note_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "All notes, most recently updated first", body = NotesResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<NotesResponse>> {
    let notes = state.store.list().await?;

    Ok(Json(NotesResponse {
        notes: notes.into_iter().map(NoteDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = NotePayload,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 400, description = "Invalid note payload", body = crate::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let input = read_payload(payload)?;
    let note = state.store.create(input).await?;
    tracing::info!(id = %note.id, "note created");

    Ok((
        StatusCode::CREATED,
        Json(NoteResponse {
            note: NoteDto::from(note),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    request_body = NotePayload,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Invalid note payload", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<NoteResponse>> {
    let input = read_payload(payload)?;
    let note_id = parse_note_id(&note_id)?;

    let note = state
        .store
        .update(note_id, input)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(NoteResponse {
        note: NoteDto::from(note),
    }))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note deleted", body = DeleteNoteResponse),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> ApiResult<Json<DeleteNoteResponse>> {
    let note_id = parse_note_id(&note_id)?;

    if !state.store.delete(note_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id = %note_id, "note deleted");

    Ok(Json(DeleteNoteResponse { ok: true }))
}
