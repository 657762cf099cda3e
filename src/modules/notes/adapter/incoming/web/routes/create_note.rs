use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notes::application::use_cases::create_note::{CreateNoteError, CreateNoteInput};
use crate::shared::api::ApiMessage;
use crate::AppState;

use super::list_notes::NoteDto;

/// Request body for creating a note
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[schema(example = "Groceries")]
    pub title: Option<String>,

    #[schema(example = "milk, eggs, coffee")]
    pub content: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    security(("bearer_auth" = [])),
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteDto),
        (status = 400, description = "Missing title or content"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/api/notes")]
pub async fn create_note_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateNoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = CreateNoteInput {
        title: req.title,
        content: req.content,
    };

    match data.create_note_use_case.execute(user.user_id, input).await {
        Ok(note) => {
            info!(user_id = %user.user_id, note_id = %note.id, "Note created");
            HttpResponse::Created().json(NoteDto::from(note))
        }

        Err(err @ (CreateNoteError::MissingTitle | CreateNoteError::MissingContent)) => {
            warn!(user_id = %user.user_id, error = %err, "Note creation rejected");
            ApiMessage::bad_request(&err.to_string())
        }

        Err(CreateNoteError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Repository error during note creation");
            ApiMessage::internal_error()
        }
    }
}
