use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notes::application::domain::entities::Note;
use crate::shared::api::ApiMessage;
use crate::AppState;

/// Wire projection of a note
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteDto {
    /// Note ID (UUID)
    pub id: String,

    #[serde(rename = "userId")]
    pub user_id: String,

    pub title: String,

    pub content: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.to_string(),
            user_id: note.user_id.to_string(),
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's notes, newest first", body = [NoteDto]),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    )
)]
#[get("/api/notes")]
pub async fn list_notes_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_notes_use_case.execute(user.user_id).await {
        Ok(notes) => {
            let dtos: Vec<NoteDto> = notes.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(dtos)
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list notes");
            ApiMessage::internal_error()
        }
    }
}
