use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use regex::Regex;

/// Loose `local@domain.tld` shape check, not full RFC 5322 parsing.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex compiles"));

/// Canonical form used for every lookup or write keyed by email.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts plain dates and full RFC 3339 timestamps, the two shapes
/// browser date pickers and API clients actually send.
pub fn parse_date_of_birth(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Age floor: a user is too young when `now - dob` falls short of
/// thirteen years measured in mean solar days (365.25 per year).
pub fn is_under_min_age(date_of_birth: NaiveDate, now: DateTime<Utc>) -> bool {
    let thirteen_years =
        Duration::milliseconds((13.0 * 365.25 * 24.0 * 60.0 * 60.0 * 1000.0) as i64);
    let dob = date_of_birth.and_time(NaiveTime::MIN).and_utc();
    now.signed_duration_since(dob) < thirteen_years
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_email("  A@Ex.COM "), "a@ex.com");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_email(" MiXeD@Case.Org ");
        assert_eq!(normalize_email(&once), once);
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@ex.com"));
        assert!(is_valid_email("first.last@sub.domain.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@ex.com"));
        assert!(!is_valid_email("a@ex"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn parses_plain_date_and_rfc3339() {
        assert_eq!(
            parse_date_of_birth("1990-01-01"),
            NaiveDate::from_ymd_opt(1990, 1, 1)
        );
        assert_eq!(
            parse_date_of_birth("1990-01-01T12:30:00Z"),
            NaiveDate::from_ymd_opt(1990, 1, 1)
        );
        assert_eq!(parse_date_of_birth("garbage"), None);
    }

    #[test]
    fn under_thirteen_is_flagged() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dob = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert!(is_under_min_age(dob, now));
    }

    #[test]
    fn adult_passes_age_floor() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert!(!is_under_min_age(dob, now));
    }

    #[test]
    fn age_floor_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        // The cutoff is 4748.25 days before `now`: 2011-01-01 is 4748 days
        // back (short by six hours), 2010-12-31 is 4749 days back.
        let dob = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        assert!(is_under_min_age(dob, now));
        let dob = NaiveDate::from_ymd_opt(2010, 12, 31).unwrap();
        assert!(!is_under_min_age(dob, now));
    }
}
