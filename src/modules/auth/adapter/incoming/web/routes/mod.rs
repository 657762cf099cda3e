mod email_auth;
mod google_auth;
mod signup;
mod verify_otp;

pub use email_auth::{email_auth_handler, EmailAuthRequest, __path_email_auth_handler};
pub use google_auth::{google_auth_handler, GoogleAuthRequest, __path_google_auth_handler};
pub use signup::{signup_handler, SignupRequest, __path_signup_handler};
pub use verify_otp::{
    verify_otp_handler, AuthTokenResponse, AuthUserDto, VerifyOtpRequest, __path_verify_otp_handler,
};
