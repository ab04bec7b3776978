use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Memo API", description = "Minimal note-taking service"),
    paths(
        crate::core::http::handlers::health,
        crate::notes::http::handlers::list_notes,
        crate::notes::http::handlers::create_note,
        crate::notes::http::handlers::update_note,
        crate::notes::http::handlers::delete_note
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::notes::http::NotePayload,
        crate::notes::http::NoteDto,
        crate::notes::http::NotesResponse,
        crate::notes::http::NoteResponse,
        crate::notes::http::DeleteNoteResponse
    )),
    tags(
        (name = "Core", description = "Service endpoints"),
        (name = "Notes", description = "Notes endpoints")
    )
)]
pub struct ApiDoc;
