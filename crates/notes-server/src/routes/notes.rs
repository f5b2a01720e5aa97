//! Note CRUD routes.
//!
//! This module implements the note-related HTTP endpoints:
//! - GET /api/notes - List all notes
//! - GET /api/notes/categories/{categoryId} - List notes in a category
//! - GET /api/notes/{id} - Get a single note
//! - POST /api/notes - Create a note
//! - PUT /api/notes/{id} - Update a note
//! - DELETE /api/notes/{id} - Delete a note
//!
//! Each handler runs its referential checks against the store, performs
//! the primary operation, and converts any failure into an `ApiError`.
//! Store failures (including malformed ids) become the operation's
//! generic 500 with the detail logged server-side only.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use notes_store::{NewNote, Note, NoteUpdate};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::validation::{NotePayload, validate_note_payload};

// ============================================================================
// Response Types
// ============================================================================

/// A note as returned to clients.
///
/// Ids are rendered as 24-char hex strings and timestamps as RFC 3339.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note id.
    pub id: String,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp. Kept at its creation value; updates do not
    /// refresh it.
    pub updated_at: DateTime<Utc>,
    /// Id of the category this note belongs to.
    pub category_id: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.to_hex(),
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
            category_id: note.category_id.to_hex(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes - List all notes.
///
/// # Response
///
/// - 200 OK: array of notes
/// - 500 Internal Server Error: store failure
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<NoteResponse>>> {
    let notes = state.store().list_notes().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list notes");
        ApiError::Persistence("Failed to fetch notes".to_string())
    })?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// GET /api/notes/{id} - Get a single note.
///
/// # Response
///
/// - 200 OK: the note
/// - 404 Not Found: no note with this id
/// - 500 Internal Server Error: store failure or malformed id
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let note = state
        .store()
        .get_note(&id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, note_id = %id, "Failed to fetch note");
            ApiError::Persistence("Failed to fetch note".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound("Note not found".to_string()))?;

    Ok(Json(note.into()))
}

/// POST /api/notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "...", "content": "...", "categoryId": "..." }`
///
/// # Response
///
/// - 201 Created: the created note
/// - 400 Bad Request: incomplete payload
/// - 404 Not Found: referenced category does not exist
/// - 500 Internal Server Error: store failure or malformed category id
async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let valid = validate_note_payload(payload)?;

    let category_exists = state
        .store()
        .category_exists(&valid.category_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, category_id = %valid.category_id, "Failed to create note");
            ApiError::Persistence("Failed to create note".to_string())
        })?;
    if !category_exists {
        return Err(ApiError::NotFound("Category not found".to_string()));
    }

    // The category could be deleted between the check above and this
    // insert; the store enforces no referential constraint.
    let note = state
        .store()
        .insert_note(NewNote {
            title: valid.title,
            content: valid.content,
            category_id: valid.category_id,
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create note");
            ApiError::Persistence("Failed to create note".to_string())
        })?;

    tracing::info!(note_id = %note.id, category_id = %note.category_id, "Note created");

    Ok((StatusCode::CREATED, Json(note.into())))
}

/// PUT /api/notes/{id} - Update a note.
///
/// The full payload is required (same validation as create), but the
/// store-level merge is partial and never touches the timestamps.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: incomplete payload
/// - 404 Not Found: referenced category or note does not exist
/// - 500 Internal Server Error: store failure or malformed id
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NotePayload>,
) -> ApiResult<Json<NoteResponse>> {
    let valid = validate_note_payload(payload)?;

    let category_exists = state
        .store()
        .category_exists(&valid.category_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, category_id = %valid.category_id, "Failed to update note");
            ApiError::Persistence("Failed to update note".to_string())
        })?;
    if !category_exists {
        return Err(ApiError::NotFound("Category not found".to_string()));
    }

    let update = NoteUpdate {
        title: Some(valid.title),
        content: Some(valid.content),
        category_id: Some(valid.category_id),
    };
    let note = state
        .store()
        .update_note(&id, update)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, note_id = %id, "Failed to update note");
            ApiError::Persistence("Failed to update note".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound("Note not found".to_string()))?;

    tracing::info!(note_id = %note.id, "Note updated");

    Ok(Json(note.into()))
}

/// DELETE /api/notes/{id} - Delete a note.
///
/// # Response
///
/// - 204 No Content: deleted, empty body
/// - 404 Not Found: no note with this id
/// - 500 Internal Server Error: store failure or malformed id
async fn delete_note(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    let note = state
        .store()
        .delete_note(&id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, note_id = %id, "Failed to delete note");
            ApiError::Persistence("Failed to delete note".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound("Note not found".to_string()))?;

    tracing::info!(note_id = %note.id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/notes/categories/{categoryId} - List notes in a category.
///
/// # Response
///
/// - 200 OK: array of notes in the category
/// - 404 Not Found: category does not exist
/// - 500 Internal Server Error: store failure or malformed category id
async fn list_notes_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResult<Json<Vec<NoteResponse>>> {
    let category_exists = state
        .store()
        .category_exists(&category_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, category_id = %category_id, "Failed to fetch notes by category");
            ApiError::Persistence("Failed to fetch notes by category".to_string())
        })?;
    if !category_exists {
        return Err(ApiError::NotFound("Category not found".to_string()));
    }

    let notes = state
        .store()
        .list_notes_by_category(&category_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, category_id = %category_id, "Failed to fetch notes by category");
            ApiError::Persistence("Failed to fetch notes by category".to_string())
        })?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/categories/{categoryId}", get(list_notes_by_category))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================
