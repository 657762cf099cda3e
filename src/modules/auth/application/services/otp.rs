use chrono::{DateTime, Utc};
use rand::Rng;

/// Uniformly random six-digit code. The range starts at 100000 so a
/// leading zero is impossible by construction.
pub fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// A code is stale once the clock is strictly past its deadline.
pub fn is_otp_expired(expires_at: DateTime<Utc>) -> bool {
    Utc::now() > expires_at
}
