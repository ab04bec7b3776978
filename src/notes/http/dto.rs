use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::notes::model::Note;

#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct NotePayload {
    /// Required, 1..=120 characters after trimming.
    pub title: String,
    /// Up to 5000 characters after trimming. Defaults to empty.
    pub content: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct NoteDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct NotesResponse {
    pub notes: Vec<NoteDto>,
}

#[derive(Serialize, ToSchema)]
pub struct NoteResponse {
    pub note: NoteDto,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteNoteResponse {
    pub ok: bool,
}
