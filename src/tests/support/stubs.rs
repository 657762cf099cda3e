use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::RateLimiter;
use crate::auth::application::use_cases::email_auth::{
    EmailAuthError, EmailAuthInput, IEmailAuthUseCase,
};
use crate::auth::application::use_cases::google_auth::{
    GoogleAuthError, GoogleAuthInput, GoogleAuthOutput, IGoogleAuthUseCase,
};
use crate::auth::application::use_cases::signup_user::{
    ISignupUserUseCase, SignupError, SignupInput,
};
use crate::auth::application::use_cases::verify_otp::{
    IVerifyOtpUseCase, VerifyOtpError, VerifyOtpInput, VerifyOtpOutput,
};
use crate::notes::application::domain::entities::Note;
use crate::notes::application::use_cases::create_note::{
    CreateNoteError, CreateNoteInput, ICreateNoteUseCase,
};
use crate::notes::application::use_cases::delete_note::{DeleteNoteError, IDeleteNoteUseCase};
use crate::notes::application::use_cases::list_notes::{IListNotesUseCase, ListNotesError};
use crate::notes::application::use_cases::update_note::{
    IUpdateNoteUseCase, UpdateNoteError, UpdateNoteInput,
};

#[derive(Default, Clone)]
pub struct StubSignupUseCase;

#[async_trait]
impl ISignupUserUseCase for StubSignupUseCase {
    async fn execute(&self, _input: SignupInput) -> Result<User, SignupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEmailAuthUseCase;

#[async_trait]
impl IEmailAuthUseCase for StubEmailAuthUseCase {
    async fn execute(&self, _input: EmailAuthInput) -> Result<User, EmailAuthError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyOtpUseCase;

#[async_trait]
impl IVerifyOtpUseCase for StubVerifyOtpUseCase {
    async fn execute(&self, _input: VerifyOtpInput) -> Result<VerifyOtpOutput, VerifyOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGoogleAuthUseCase;

#[async_trait]
impl IGoogleAuthUseCase for StubGoogleAuthUseCase {
    async fn execute(&self, _input: GoogleAuthInput) -> Result<GoogleAuthOutput, GoogleAuthError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListNotesUseCase;

#[async_trait]
impl IListNotesUseCase for StubListNotesUseCase {
    async fn execute(&self, _owner: Uuid) -> Result<Vec<Note>, ListNotesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateNoteUseCase;

#[async_trait]
impl ICreateNoteUseCase for StubCreateNoteUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _input: CreateNoteInput,
    ) -> Result<Note, CreateNoteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateNoteUseCase;

#[async_trait]
impl IUpdateNoteUseCase for StubUpdateNoteUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _note_id: Uuid,
        _input: UpdateNoteInput,
    ) -> Result<Note, UpdateNoteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteNoteUseCase;

#[async_trait]
impl IDeleteNoteUseCase for StubDeleteNoteUseCase {
    async fn execute(&self, _owner: Uuid, _note_id: Uuid) -> Result<(), DeleteNoteError> {
        unimplemented!("Not used in this test")
    }
}

/// Default limiter for tests that are not about throttling.
#[derive(Default, Clone)]
pub struct AllowAllRateLimiter;

impl RateLimiter for AllowAllRateLimiter {
    fn allow(&self, _key: &str) -> bool {
        true
    }
}
