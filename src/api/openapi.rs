use crate::api::schemas::MessageResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    AuthTokenResponse, AuthUserDto, EmailAuthRequest, GoogleAuthRequest, SignupRequest,
    VerifyOtpRequest,
};

// Notes
use crate::notes::adapter::incoming::web::routes::{CreateNoteRequest, NoteDto, UpdateNoteRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "1.0.0",
        description = "API documentation for the notes backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup_handler,
        crate::auth::adapter::incoming::web::routes::email_auth_handler,
        crate::auth::adapter::incoming::web::routes::verify_otp_handler,
        crate::auth::adapter::incoming::web::routes::google_auth_handler,

        // Note endpoints
        crate::notes::adapter::incoming::web::routes::list_notes_handler,
        crate::notes::adapter::incoming::web::routes::create_note_handler,
        crate::notes::adapter::incoming::web::routes::update_note_handler,
        crate::notes::adapter::incoming::web::routes::delete_note_handler,
    ),
    components(
        schemas(
            MessageResponse,

            // Auth DTOs
            SignupRequest,
            EmailAuthRequest,
            VerifyOtpRequest,
            GoogleAuthRequest,
            AuthUserDto,
            AuthTokenResponse,

            // Note DTOs
            NoteDto,
            CreateNoteRequest,
            UpdateNoteRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup, OTP, and Google sign-in endpoints"),
        (name = "notes", description = "Note management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
