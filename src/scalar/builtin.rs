//! The built-in scalar catalogue: Email, URL, DateTime, UUID.
//!
//! Each is a one-check pipeline (behind the implicit kind gate) with a fixed
//! per-type failure message. The parameterized families (`LimitedString`,
//! `Password`) live on [`ScalarFactory`](crate::scalar::ScalarFactory)
//! because they need the naming counters; the catalogue here has fixed
//! schema-unique names.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidateExt;
use crate::scalar::ScalarDefinition;
use crate::validators::{MatchesRegex, Url};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\].,;:\s@"]+(\.[^<>()\[\].,;:\s@"]+)*)|(".+"))@(([^<>()\[\].,;:\s@"]+\.)+[^<>()\[\].,;:\s@"]{2,})$"#,
    )
    .unwrap()
});

// Year-only through offset-qualified timestamps. A time needs a full date, an
// offset needs a time. Months, days, hours, minutes and seconds are
// range-checked; day-in-month is not correlated with the month.
static DATE_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\d{4}",
        r"(?:-(?:0[1-9]|1[0-2])",
        r"(?:-(?:0[1-9]|[12]\d|3[01])",
        r"(?:[T ](?:[01]\d|2[0-3])",
        r"(?::[0-5]\d",
        r"(?::[0-5]\d(?:[.,]\d+)?",
        r")?)?",
        r"(?:Z|[+-](?:[01]\d|2[0-3])(?::?[0-5]\d)?)?",
        r")?)?)?$",
    ))
    .unwrap()
});

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

/// The Email scalar: RFC-822-ish addresses, matched case-insensitively.
#[must_use]
pub fn email() -> ScalarDefinition {
    ScalarDefinition::new(
        "Email",
        "The Email scalar type represents E-Mail addresses compliant to RFC 822.",
    )
    .with_check(MatchesRegex::from_regex(EMAIL_REGEX.clone()).with_message("Not a valid Email address"))
}

/// The URL scalar: http/https/ftp URLs with unicode domains; private,
/// loopback and link-local numeric hosts are rejected by design.
#[must_use]
pub fn url() -> ScalarDefinition {
    ScalarDefinition::new(
        "URL",
        "The URL scalar type represents URL addresses.",
    )
    .with_check(Url)
}

/// The DateTime scalar: an ISO 8601 subset from year-only dates to
/// offset-qualified timestamps.
#[must_use]
pub fn date_time() -> ScalarDefinition {
    ScalarDefinition::new(
        "DateTime",
        "The DateTime scalar type represents date and time strings complying to ISO 8601.",
    )
    .with_check(
        MatchesRegex::from_regex(DATE_TIME_REGEX.clone()).with_message("Not a valid date-time string"),
    )
}

/// The UUID scalar: the textual form of UUID versions 1-5, matched
/// case-insensitively.
#[must_use]
pub fn uuid() -> ScalarDefinition {
    ScalarDefinition::new("UUID", "The UUID scalar type represents a UUID.")
        .with_check(MatchesRegex::from_regex(UUID_REGEX.clone()).with_message("Not a valid UUID"))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::literal::RawLiteral;

    #[test]
    fn catalogue_names() {
        assert_eq!(email().name(), "Email");
        assert_eq!(url().name(), "URL");
        assert_eq!(date_time().name(), "DateTime");
        assert_eq!(uuid().name(), "UUID");
    }

    #[test]
    fn email_accepts_and_rejects() {
        let scalar = email();
        assert_eq!(
            scalar
                .parse_literal(&RawLiteral::string("email@example.com"))
                .unwrap(),
            "email@example.com"
        );
        let err = scalar
            .parse_literal(&RawLiteral::string("plainaddress"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PatternMismatch);
        assert_eq!(err.message(), "Not a valid Email address");
    }

    #[test]
    fn email_match_is_case_insensitive() {
        assert!(email().parse_value("Email@EXAMPLE.COM").is_ok());
    }

    #[test]
    fn url_message() {
        let err = url().parse_value("foo.com").unwrap_err();
        assert_eq!(err.message(), "Not a valid URL");
    }

    #[test]
    fn date_time_precision_ladder() {
        let scalar = date_time();
        for value in [
            "2015",
            "2015-02",
            "2015-02-24",
            "2015-02-24T13:14",
            "2015-02-24 13:14:15",
            "2015-02-24T13:14:15.923",
            "2015-02-24T13:14:15Z",
            "2015-02-24T13:14:15+05:00",
            "2015-02-24T13:14:15-0830",
        ] {
            assert!(scalar.parse_value(value).is_ok(), "rejected {value}");
        }
    }

    #[test]
    fn date_time_rejects_out_of_range_components() {
        let scalar = date_time();
        for value in [
            "2015-13",            // month 13
            "2015-00",            // month 0
            "2015-02-32",         // day 32
            "2015-02-24T24:00",   // hour 24
            "2015-02-24T13:60",   // minute 60
            "2015-02-24T13:14:61", // second 61
            "2015-02-24T13:14:15+24:00", // offset hour 24
            "02-24",              // no year
            "2015-02-24T",        // dangling separator
            "not a date",
        ] {
            let err = scalar.parse_value(value).unwrap_err();
            assert_eq!(err.message(), "Not a valid date-time string", "for {value}");
        }
    }

    #[test]
    fn uuid_accepts_versions_1_through_5() {
        let scalar = uuid();
        assert!(scalar
            .parse_value("bfaa2768-ba8c-11e5-9912-ba0be0483c18")
            .is_ok());
        assert!(scalar
            .parse_value("123E4567-E89B-42D3-A456-426655440000")
            .is_ok());
    }

    #[test]
    fn uuid_rejects_non_uuids() {
        let scalar = uuid();
        for value in [
            "934859",
            "bfaa2768-ba8c-01e5-9912-ba0be0483c18", // version 0
            "bfaa2768-ba8c-11e5-c912-ba0be0483c18", // bad variant nibble
            "bfaa2768ba8c11e59912ba0be0483c18",     // no dashes
        ] {
            let err = scalar.parse_value(value).unwrap_err();
            assert_eq!(err.message(), "Not a valid UUID", "for {value}");
        }
    }

    #[test]
    fn builtins_reject_non_string_literals() {
        for scalar in [email(), url(), date_time(), uuid()] {
            let err = scalar.parse_literal(&RawLiteral::int("7")).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidKind);
        }
    }
}
