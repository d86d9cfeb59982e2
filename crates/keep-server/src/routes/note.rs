//! Note Routes
//!
//! HTTP handlers that delegate to NoteService and wrap every outcome
//! in the response envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::models::{CreateNoteRequest, ErrorResponse, NoteView, SuccessResponse};
use crate::routes::error::ApiError;
use crate::AppState;

type NoteResult<T> = Result<(StatusCode, Json<SuccessResponse<T>>), ApiError>;

/// Create new Note
#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created; `data` holds the NoteView", body = NoteView),
        (status = 400, description = "Missing fields or malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> NoteResult<NoteView> {
    let Json(payload) = payload?;

    let note = state.note_service.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("Note created", note.into())),
    ))
}

/// Get Note by ID
#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID (UUID)")
    ),
    responses(
        (status = 200, description = "Note found; `data` holds the NoteView", body = NoteView),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn get_note(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> NoteResult<NoteView> {
    let Path(id) = id?;
    let note = state.note_service.get_by_id(&id).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::new("Note found", note.into())),
    ))
}

/// List all Notes
#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Notes found; `data` holds the NoteViews", body = Vec<NoteView>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn list_notes(State(state): State<AppState>) -> NoteResult<Vec<NoteView>> {
    let notes = state.note_service.list_all().await?;

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::new(
            "Notes found",
            notes.into_iter().map(NoteView::from).collect(),
        )),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:id", get(get_note))
}
