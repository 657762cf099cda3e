use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notes::application::use_cases::update_note::{UpdateNoteError, UpdateNoteInput};
use crate::shared::api::ApiMessage;
use crate::AppState;

use super::list_notes::NoteDto;

/// Request body for a full note replacement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    #[schema(example = "Groceries")]
    pub title: Option<String>,

    #[schema(example = "milk, eggs, coffee")]
    pub content: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    tag = "notes",
    security(("bearer_auth" = [])),
    request_body = UpdateNoteRequest,
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note updated", body = NoteDto),
        (status = 400, description = "Missing title or content"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No such note for this caller"),
        (status = 500, description = "Internal server error"),
    )
)]
#[put("/api/notes/{id}")]
pub async fn update_note_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<UpdateNoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    // An id that does not parse cannot name an existing note
    let note_id = match path.into_inner().parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => return ApiMessage::not_found("Note not found"),
    };

    let req = req.into_inner();
    let input = UpdateNoteInput {
        title: req.title,
        content: req.content,
    };

    match data
        .update_note_use_case
        .execute(user.user_id, note_id, input)
        .await
    {
        Ok(note) => {
            info!(user_id = %user.user_id, note_id = %note.id, "Note updated");
            HttpResponse::Ok().json(NoteDto::from(note))
        }

        Err(UpdateNoteError::NotFound) => {
            warn!(user_id = %user.user_id, note_id = %note_id, "Update of missing or foreign note");
            ApiMessage::not_found("Note not found")
        }

        Err(err @ (UpdateNoteError::MissingTitle | UpdateNoteError::MissingContent)) => {
            warn!(user_id = %user.user_id, note_id = %note_id, error = %err, "Note update rejected");
            ApiMessage::bad_request(&err.to_string())
        }

        Err(UpdateNoteError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, note_id = %note_id, error = %e, "Repository error during note update");
            ApiMessage::internal_error()
        }
    }
}
