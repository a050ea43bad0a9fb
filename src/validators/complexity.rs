//! Password complexity checks.
//!
//! Presence predicates over ASCII character classes. Each rule is
//! independent and only runs when requested; a password pipeline appends the
//! requested rules in a fixed order (alpha-numeric, mixed-case,
//! special-chars).

use crate::foundation::{ErrorKind, ValidationError};

crate::validator! {
    /// At least one ASCII letter and at least one ASCII digit.
    pub AlphaNumeric for str;
    rule(input) {
        input.chars().any(|c| c.is_ascii_alphabetic())
            && input.chars().any(|c| c.is_ascii_digit())
    }
    error(input) {
        ValidationError::new(
            ErrorKind::ComplexityUnmet,
            "String must contain at least one letter and one number",
        )
    }
    fn alpha_numeric();
}

crate::validator! {
    /// At least one lower-case and at least one upper-case ASCII letter.
    pub MixedCase for str;
    rule(input) {
        input.chars().any(|c| c.is_ascii_lowercase())
            && input.chars().any(|c| c.is_ascii_uppercase())
    }
    error(input) {
        ValidationError::new(
            ErrorKind::ComplexityUnmet,
            "String must contain at least one upper and one lower case letter",
        )
    }
    fn mixed_case();
}

crate::validator! {
    /// At least one character outside `[A-Za-z0-9]`.
    pub SpecialChars for str;
    rule(input) { input.chars().any(|c| !c.is_ascii_alphanumeric()) }
    error(input) {
        ValidationError::new(
            ErrorKind::ComplexityUnmet,
            "String must contain at least one special character",
        )
    }
    fn special_chars();
}
