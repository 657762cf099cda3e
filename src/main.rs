pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;
pub use modules::notes;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::rate_limiter_memory::MemoryRateLimiter;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{RateLimiter, TokenIssuer};
use crate::auth::application::use_cases::{
    email_auth::{EmailAuthUseCase, IEmailAuthUseCase},
    google_auth::{GoogleAuthUseCase, IGoogleAuthUseCase},
    signup_user::{ISignupUserUseCase, SignupUserUseCase},
    verify_otp::{IVerifyOtpUseCase, VerifyOtpUseCase},
};
use crate::config::AppConfig;
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::otp_notifier::OtpNotifier;
use crate::email::application::services::OtpEmailService;
use crate::notes::adapter::outgoing::note_repository_postgres::NoteRepositoryPostgres;
use crate::notes::application::use_cases::{
    create_note::{CreateNoteUseCase, ICreateNoteUseCase},
    delete_note::{DeleteNoteUseCase, IDeleteNoteUseCase},
    list_notes::{IListNotesUseCase, ListNotesUseCase},
    update_note::{IUpdateNoteUseCase, UpdateNoteUseCase},
};
use crate::shared::api::custom_json_config;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub signup_use_case: Arc<dyn ISignupUserUseCase>,
    pub email_auth_use_case: Arc<dyn IEmailAuthUseCase>,
    pub verify_otp_use_case: Arc<dyn IVerifyOtpUseCase>,
    pub google_auth_use_case: Arc<dyn IGoogleAuthUseCase>,
    pub email_auth_rate_limiter: Arc<dyn RateLimiter>,

    pub list_notes_use_case: Arc<dyn IListNotesUseCase>,
    pub create_note_use_case: Arc<dyn ICreateNoteUseCase>,
    pub update_note_use_case: Arc<dyn IUpdateNoteUseCase>,
    pub delete_note_use_case: Arc<dyn IDeleteNoteUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env();

    // SMTP SETUPS
    let smtp_sender = if env == "test" {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &config.email_from)
    } else {
        // Production SMTP
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &config.email_from)
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Signing service fails fast on a bad secret, before any request
    let jwt_service = JwtTokenService::new(JwtConfig::new(
        config.jwt_secret.clone(),
        config.jwt_expiry_secs,
    ));
    let token_issuer_arc: Arc<dyn TokenIssuer> = Arc::new(jwt_service);

    let email_sender_arc: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let otp_notifier_arc: Arc<dyn OtpNotifier> = Arc::new(OtpEmailService::new(email_sender_arc));

    let otp_ttl = chrono::Duration::seconds(config.otp_ttl_secs);
    let rate_limiter_arc: Arc<dyn RateLimiter> = Arc::new(MemoryRateLimiter::new(
        config.otp_rate_limit_max,
        Duration::from_secs(config.otp_rate_limit_window_secs),
    ));

    // Auth components
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let signup_use_case =
        SignupUserUseCase::new(user_repo.clone(), Arc::clone(&otp_notifier_arc), otp_ttl);
    let email_auth_use_case =
        EmailAuthUseCase::new(user_repo.clone(), Arc::clone(&otp_notifier_arc), otp_ttl);
    let verify_otp_use_case =
        VerifyOtpUseCase::new(user_repo.clone(), Arc::clone(&token_issuer_arc));
    let google_auth_use_case = GoogleAuthUseCase::new(user_repo, Arc::clone(&token_issuer_arc));

    // Note components
    let note_repo = NoteRepositoryPostgres::new(Arc::clone(&db_arc));
    let list_notes_use_case = ListNotesUseCase::new(note_repo.clone());
    let create_note_use_case = CreateNoteUseCase::new(note_repo.clone());
    let update_note_use_case = UpdateNoteUseCase::new(note_repo.clone());
    let delete_note_use_case = DeleteNoteUseCase::new(note_repo);

    let state = AppState {
        signup_use_case: Arc::new(signup_use_case),
        email_auth_use_case: Arc::new(email_auth_use_case),
        verify_otp_use_case: Arc::new(verify_otp_use_case),
        google_auth_use_case: Arc::new(google_auth_use_case),
        email_auth_rate_limiter: rate_limiter_arc,
        list_notes_use_case: Arc::new(list_notes_use_case),
        create_note_use_case: Arc::new(create_note_use_case),
        update_note_use_case: Arc::new(update_note_use_case),
        delete_note_use_case: Arc::new(delete_note_use_case),
    };

    // Clone for use in the HttpServer closure
    let db_for_server = Arc::clone(&db_arc);
    let allowed_origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        let cors = if allowed_origins.is_empty() {
            Cors::permissive()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_issuer_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::email_auth_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_otp_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::google_auth_handler);
    // Notes
    cfg.service(crate::notes::adapter::incoming::web::routes::list_notes_handler);
    cfg.service(crate::notes::adapter::incoming::web::routes::create_note_handler);
    cfg.service(crate::notes::adapter::incoming::web::routes::update_note_handler);
    cfg.service(crate::notes::adapter::incoming::web::routes::delete_note_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
