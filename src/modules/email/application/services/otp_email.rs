use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::otp_notifier::{
    OtpNotificationError, OtpNotifier,
};

const OTP_EMAIL_SUBJECT: &str = "Your OTP for Notes App";

/// Renders the verification code into the transactional template and
/// hands it to the configured transport.
#[derive(Clone)]
pub struct OtpEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for OtpEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl OtpEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }
}

fn otp_email_body(code: &str) -> String {
    format!(
        r#"
      <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
        <h2 style="color: #3B82F6;">Notes App - Verification Code</h2>
        <p>Your OTP code is:</p>
        <div style="background: #f3f4f6; padding: 20px; text-align: center; border-radius: 8px; margin: 20px 0;">
          <h1 style="color: #1E40AF; font-size: 32px; margin: 0; letter-spacing: 4px;">{code}</h1>
        </div>
        <p>This code will expire in 5 minutes.</p>
        <p style="color: #6B7280; font-size: 14px;">If you didn't request this code, please ignore this email.</p>
      </div>
    "#
    )
}

#[async_trait::async_trait]
impl OtpNotifier for OtpEmailService {
    async fn send_otp(&self, recipient: &str, code: &str) -> Result<(), OtpNotificationError> {
        self.sender
            .send_email(recipient, OTP_EMAIL_SUBJECT, &otp_email_body(code))
            .await
            .map_err(OtpNotificationError::EmailSendingFailed)
    }
}
