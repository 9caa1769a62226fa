//! Notes REST API — CRUD endpoints over the in-memory note store.
//!
//! Every response, including the not-found and already-exists cases, is an
//! HTTP 200 message envelope. Clients of the original service key off the
//! `message` field rather than the status code, so the envelope is the
//! compatibility surface here.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::notes::{Note, NoteStoreError};
use crate::AppState;

#[derive(Debug, Serialize)]
struct NoteEnvelope {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<Note>,
}

impl NoteEnvelope {
    fn with_note(message: &'static str, note: Note) -> HttpResponse {
        HttpResponse::Ok().json(NoteEnvelope {
            message,
            note: Some(note),
        })
    }

    fn message_only(message: &'static str) -> HttpResponse {
        HttpResponse::Ok().json(NoteEnvelope {
            message,
            note: None,
        })
    }
}

fn error_envelope(err: NoteStoreError) -> HttpResponse {
    match err {
        NoteStoreError::NotFound => NoteEnvelope::message_only("Note not found"),
        NoteStoreError::AlreadyExists => NoteEnvelope::message_only("note_id already exists"),
    }
}

// --- Create note ---

#[derive(Debug, Deserialize)]
struct CreateNoteRequest {
    title: String,
    content: String,
}

async fn create_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let note_id = path.into_inner();
    let body = body.into_inner();

    let note = Note {
        note_id,
        title: body.title,
        content: body.content,
    };

    match state.notes.create(note) {
        Ok(note) => {
            log::info!("Created note {}", note_id);
            NoteEnvelope::with_note("Note created successfully", note)
        }
        Err(e) => error_envelope(e),
    }
}

// --- View note ---

async fn view_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let note_id = path.into_inner();

    match state.notes.get(note_id) {
        Ok(note) => NoteEnvelope::with_note("Note retrieved successfully", note),
        Err(e) => error_envelope(e),
    }
}

// --- Update note ---

/// Partial update body. A field left out of the JSON (or sent as null) means
/// "no change"; an explicit empty string sets the field to empty.
#[derive(Debug, Deserialize)]
struct UpdateNoteRequest {
    title: Option<String>,
    content: Option<String>,
}

async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    let note_id = path.into_inner();
    let body = body.into_inner();

    match state.notes.update(note_id, body.title, body.content) {
        Ok(note) => {
            log::info!("Updated note {}", note_id);
            NoteEnvelope::with_note("Note updated successfully", note)
        }
        Err(e) => error_envelope(e),
    }
}

// --- Delete note ---

async fn delete_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let note_id = path.into_inner();

    match state.notes.delete(note_id) {
        Ok(()) => {
            log::info!("Deleted note {}", note_id);
            NoteEnvelope::message_only("Note deleted")
        }
        Err(e) => error_envelope(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/create-notes/{note_id}").route(web::post().to(create_note)));
    cfg.service(web::resource("/view-notes/{note_id}").route(web::get().to(view_note)));
    cfg.service(web::resource("/update-notes/{note_id}").route(web::put().to(update_note)));
    cfg.service(web::resource("/delete-notes/{note_id}").route(web::delete().to(delete_note)));
}
