//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateNoteRequest, ErrorBody, ErrorCode, ErrorDetail, ErrorResponse, NoteView,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::note::create_note,
        super::note::list_notes,
        super::note::get_note,
    ),
    info(
        title = "Keep API",
        version = "0.1.0",
        description = "Keep - a simple note taking service.\n\nSuccess bodies are wrapped as `{message, data}`; errors as `{error: {code, message, details}}`.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Notes", description = "Note creation and retrieval"),
    ),
    components(
        schemas(
            CreateNoteRequest,
            NoteView,
            ErrorResponse,
            ErrorBody,
            ErrorCode,
            ErrorDetail,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_note_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/notes"));
        assert!(doc.paths.paths.contains_key("/notes/{id}"));
    }
}
