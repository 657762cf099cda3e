pub mod otp_email;

pub use otp_email::OtpEmailService;
