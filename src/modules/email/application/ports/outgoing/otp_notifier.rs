#[derive(Debug, thiserror::Error)]
pub enum OtpNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Notification sink the auth flows depend on. Callers fire and forget;
/// a delivery failure never rolls back the auth operation that
/// triggered it.
#[async_trait::async_trait]
pub trait OtpNotifier: Send + Sync {
    async fn send_otp(&self, recipient: &str, code: &str) -> Result<(), OtpNotificationError>;
}
