use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notes::application::use_cases::delete_note::DeleteNoteError;
use crate::shared::api::ApiMessage;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "notes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No such note for this caller"),
        (status = 500, description = "Internal server error"),
    )
)]
#[delete("/api/notes/{id}")]
pub async fn delete_note_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let note_id = match path.into_inner().parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => return ApiMessage::not_found("Note not found"),
    };

    match data
        .delete_note_use_case
        .execute(user.user_id, note_id)
        .await
    {
        Ok(()) => {
            info!(user_id = %user.user_id, note_id = %note_id, "Note deleted");
            ApiMessage::ok("Note deleted")
        }

        Err(DeleteNoteError::NotFound) => {
            warn!(user_id = %user.user_id, note_id = %note_id, "Delete of missing or foreign note");
            ApiMessage::not_found("Note not found")
        }

        Err(DeleteNoteError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, note_id = %note_id, error = %e, "Repository error during note deletion");
            ApiMessage::internal_error()
        }
    }
}
