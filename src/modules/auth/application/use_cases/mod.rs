pub mod email_auth;
pub mod google_auth;
pub mod signup_user;
pub mod verify_otp;
