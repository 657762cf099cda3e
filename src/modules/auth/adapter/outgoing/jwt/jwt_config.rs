#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Build the signing configuration from values resolved at startup.
    /// Panics on an unusable secret so misconfiguration surfaces before
    /// the server binds, never per-request.
    pub fn new(secret_key: String, token_expiry: i64) -> Self {
        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        if token_expiry <= 0 || token_expiry > 86400 {
            panic!("JWT_EXPIRY_SECS must be between 1 and 86400 seconds (24 hours)");
        }

        Self {
            secret_key,
            token_expiry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_secret_and_sane_expiry() {
        let config = JwtConfig::new("FAKE_JWT_SECRET_FOR_TESTS_ONLY_0123456789".to_string(), 3600);
        assert_eq!(config.token_expiry, 3600);
    }

    #[test]
    #[should_panic(expected = "at least 32 characters")]
    fn rejects_short_secret() {
        JwtConfig::new("too-short".to_string(), 3600);
    }

    #[test]
    #[should_panic(expected = "JWT_EXPIRY_SECS")]
    fn rejects_non_positive_expiry() {
        JwtConfig::new("FAKE_JWT_SECRET_FOR_TESTS_ONLY_0123456789".to_string(), 0);
    }
}
