use crate::auth::application::ports::outgoing::RateLimiter;
use crate::auth::application::use_cases::{
    email_auth::IEmailAuthUseCase, google_auth::IGoogleAuthUseCase,
    signup_user::ISignupUserUseCase, verify_otp::IVerifyOtpUseCase,
};
use crate::notes::application::use_cases::{
    create_note::ICreateNoteUseCase, delete_note::IDeleteNoteUseCase,
    list_notes::IListNotesUseCase, update_note::IUpdateNoteUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    signup: Option<Arc<dyn ISignupUserUseCase>>,
    email_auth: Option<Arc<dyn IEmailAuthUseCase>>,
    verify_otp: Option<Arc<dyn IVerifyOtpUseCase>>,
    google_auth: Option<Arc<dyn IGoogleAuthUseCase>>,
    email_auth_rate_limiter: Option<Arc<dyn RateLimiter>>,
    list_notes: Option<Arc<dyn IListNotesUseCase>>,
    create_note: Option<Arc<dyn ICreateNoteUseCase>>,
    update_note: Option<Arc<dyn IUpdateNoteUseCase>>,
    delete_note: Option<Arc<dyn IDeleteNoteUseCase>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            signup: Some(Arc::new(StubSignupUseCase)),
            email_auth: Some(Arc::new(StubEmailAuthUseCase)),
            verify_otp: Some(Arc::new(StubVerifyOtpUseCase)),
            google_auth: Some(Arc::new(StubGoogleAuthUseCase)),
            // Tests that are not about throttling must never trip it
            email_auth_rate_limiter: Some(Arc::new(AllowAllRateLimiter)),
            list_notes: Some(Arc::new(StubListNotesUseCase)),
            create_note: Some(Arc::new(StubCreateNoteUseCase)),
            update_note: Some(Arc::new(StubUpdateNoteUseCase)),
            delete_note: Some(Arc::new(StubDeleteNoteUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_signup(mut self, uc: impl ISignupUserUseCase + 'static) -> Self {
        self.signup = Some(Arc::new(uc));
        self
    }

    pub fn with_email_auth(mut self, uc: impl IEmailAuthUseCase + 'static) -> Self {
        self.email_auth = Some(Arc::new(uc));
        self
    }

    pub fn with_verify_otp(mut self, uc: impl IVerifyOtpUseCase + 'static) -> Self {
        self.verify_otp = Some(Arc::new(uc));
        self
    }

    pub fn with_google_auth(mut self, uc: impl IGoogleAuthUseCase + 'static) -> Self {
        self.google_auth = Some(Arc::new(uc));
        self
    }

    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.email_auth_rate_limiter = Some(limiter);
        self
    }

    pub fn with_list_notes(mut self, uc: impl IListNotesUseCase + 'static) -> Self {
        self.list_notes = Some(Arc::new(uc));
        self
    }

    pub fn with_create_note(mut self, uc: impl ICreateNoteUseCase + 'static) -> Self {
        self.create_note = Some(Arc::new(uc));
        self
    }

    pub fn with_update_note(mut self, uc: impl IUpdateNoteUseCase + 'static) -> Self {
        self.update_note = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_note(mut self, uc: impl IDeleteNoteUseCase + 'static) -> Self {
        self.delete_note = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            signup_use_case: self.signup.unwrap(),
            email_auth_use_case: self.email_auth.unwrap(),
            verify_otp_use_case: self.verify_otp.unwrap(),
            google_auth_use_case: self.google_auth.unwrap(),
            email_auth_rate_limiter: self.email_auth_rate_limiter.unwrap(),
            list_notes_use_case: self.list_notes.unwrap(),
            create_note_use_case: self.create_note.unwrap(),
            update_note_use_case: self.update_note.unwrap(),
            delete_note_use_case: self.delete_note.unwrap(),
        })
    }
}
