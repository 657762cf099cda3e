use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_google_user: bool,
    pub is_verified: bool,
    pub otp: Option<String>,
    pub otp_expires: Option<DateTime<Utc>>,
    pub google_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Store a fresh code with its deadline. The pair always moves together.
    pub fn set_otp(&mut self, code: String, expires_at: DateTime<Utc>) {
        self.otp = Some(code);
        self.otp_expires = Some(expires_at);
    }

    /// Wipe the pending code once it has been consumed.
    pub fn clear_otp(&mut self) {
        self.otp = None;
        self.otp_expires = None;
    }
}

/// Fields a caller controls when a user record is first created.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_google_user: bool,
    pub is_verified: bool,
    pub otp: Option<String>,
    pub otp_expires: Option<DateTime<Utc>>,
    pub google_id: Option<String>,
}
