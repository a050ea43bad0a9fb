//! String content checks: regex matching and URL grammar.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorKind, Validate, ValidationError};

// ============================================================================
// REGEX CHECK
// ============================================================================

crate::validator! {
    /// Whole-string regex check.
    ///
    /// Patterns are matched with whole-string intent; every built-in pattern
    /// is anchored (`^...$`).
    pub MatchesRegex { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new(
            ErrorKind::PatternMismatch,
            "String does not match the expected pattern",
        )
        .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self { pattern: Regex::new(pattern)? })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesRegex {
    /// Wraps an already-compiled pattern.
    #[must_use]
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }
}

// ============================================================================
// URL CHECK
// ============================================================================

// Scheme, optional userinfo, then either a dotted-quad host (captured) or a
// unicode domain with a letters-only TLD, optional port and path. The octet
// grammar pins the first octet to 1-223 and the last to 1-254, so unroutable
// hosts like 0.0.0.0 or multicast addresses never match at all.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:https?|ftp)://",
        r"(?:\S+(?::\S*)?@)?",
        r"(?:",
        r"(?P<ip>(?:[1-9]\d?|1\d\d|2[01]\d|22[0-3])",
        r"(?:\.(?:1?\d{1,3}|2[0-4]\d|25[0-5])){2}",
        r"\.(?:[1-9]\d?|1\d\d|2[0-4]\d|25[0-4]))",
        r"|",
        r"(?:(?:[a-z\u{00a1}-\u{ffff}0-9]-*)*[a-z\u{00a1}-\u{ffff}0-9]+)",
        r"(?:\.(?:[a-z\u{00a1}-\u{ffff}0-9]-*)*[a-z\u{00a1}-\u{ffff}0-9]+)*",
        r"\.[a-z\u{00a1}-\u{ffff}]{2,}",
        r")",
        r"(?::\d{2,5})?",
        r"(?:/[^\s]*)?$",
    ))
    .unwrap()
});

/// Private, loopback and link-local IPv4 ranges: 10/8, 127/8, 169.254/16,
/// 192.168/16, 172.16/12.
fn reserved_ipv4(host: &str) -> bool {
    let mut octets = host.split('.');
    let (Some(first), Some(second)) = (octets.next(), octets.next()) else {
        return false;
    };
    let (Ok(first), Ok(second)) = (first.parse::<u8>(), second.parse::<u8>()) else {
        return false;
    };
    matches!(
        (first, second),
        (10 | 127, _) | (169, 254) | (192, 168) | (172, 16..=31)
    )
}

/// URL grammar check.
///
/// Accepts `http`/`https`/`ftp` URLs with unicode domains. Numeric hosts in
/// private, loopback or link-local ranges are rejected by design. The host
/// exclusion runs as a separate step after the shape match because the
/// pattern grammar has no look-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Url;

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let accepted = match URL_REGEX.captures(input) {
            Some(caps) => match caps.name("ip") {
                Some(host) => !reserved_ipv4(host.as_str()),
                None => true,
            },
            None => false,
        };

        if accepted {
            Ok(())
        } else {
            Err(ValidationError::new(
                ErrorKind::PatternMismatch,
                "Not a valid URL",
            ))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
