use std::env;

/// Everything the process reads from the environment, resolved once at
/// startup. Components receive the values they need through their
/// constructors; nothing reads `env::var` mid-request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    pub jwt_secret: String,
    pub jwt_expiry_secs: i64,

    pub otp_ttl_secs: i64,
    pub otp_rate_limit_max: u32,
    pub otp_rate_limit_window_secs: u64,

    pub email_from: String,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from the environment. Missing required
    /// variables (database URL, signing secret) abort startup; the
    /// per-request path never sees a half-configured process.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");

        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET is not set in .env file");
        if jwt_secret.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let jwt_expiry_secs = env::var("JWT_EXPIRY_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRY_SECS value");
        if jwt_expiry_secs <= 0 || jwt_expiry_secs > 86400 {
            panic!("JWT_EXPIRY_SECS must be between 1 and 86400 seconds (24 hours)");
        }

        let otp_ttl_secs = env::var("OTP_TTL_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .parse::<i64>()
            .expect("Invalid OTP_TTL_SECS value");

        let otp_rate_limit_max = env::var("OTP_RATE_LIMIT_MAX")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u32>()
            .expect("Invalid OTP_RATE_LIMIT_MAX value");

        let otp_rate_limit_window_secs = env::var("OTP_RATE_LIMIT_WINDOW_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .expect("Invalid OTP_RATE_LIMIT_WINDOW_SECS value");

        let email_from = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .expect("Invalid PORT value");

        Self {
            database_url,
            host,
            port,
            jwt_secret,
            jwt_expiry_secs,
            otp_ttl_secs,
            otp_rate_limit_max,
            otp_rate_limit_window_secs,
            email_from,
            allowed_origins,
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
