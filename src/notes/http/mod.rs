use axum::{
    Router,
    routing::{get, put},
};

use crate::AppState;
mod dto;
pub(crate) mod handlers;

pub use dto::{DeleteNoteResponse, NoteDto, NotePayload, NoteResponse, NotesResponse};
pub use handlers::{create_note, delete_note, list_notes, update_note};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notes).post(create_note))
        .route("/{id}", put(update_note).delete(delete_note))
}
