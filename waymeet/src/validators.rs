use chrono::NaiveDate;
use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static TIME_OF_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid regex"));

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Returns `true` if the provided string parses as a URL with a scheme.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// `YYYY-MM-DD` calendar date.
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// 24h `HH:MM`.
pub fn is_valid_time(value: &str) -> bool {
    TIME_OF_DAY.is_match(value)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("test@x.com"));
        assert!(!is_valid_email("invalid"));
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://images.unsplash.com/photo.jpg"));
        assert!(!is_valid_url("not-a-url"));
    }

    #[test]
    fn date_validation() {
        assert!(is_valid_date("2025-03-15"));
        assert!(!is_valid_date("2025-02-30"));
        assert!(!is_valid_date("15/03/2025"));
    }

    #[test]
    fn time_validation() {
        assert!(is_valid_time("19:30"));
        assert!(is_valid_time("00:00"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("9:30"));
    }
}
