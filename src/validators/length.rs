//! String length checks.
//!
//! Length is always measured in Unicode codepoints (`chars().count()`),
//! never bytes: a limit of 10 admits ten multi-byte characters.

use crate::foundation::ValidationError;

crate::validator! {
    /// Requires at least `min` codepoints.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::too_short(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

crate::validator! {
    /// Allows at most `max` codepoints.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::too_long(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, Validate, ValidateExt};

    #[test]
    fn min_length_bounds() {
        let check = min_length(3);
        assert!(check.validate("abc").is_ok());
        assert!(check.validate("abcd").is_ok());
        assert!(check.validate("ab").is_err());
        assert!(check.validate("").is_err());
    }

    #[test]
    fn max_length_bounds() {
        let check = max_length(3);
        assert!(check.validate("abc").is_ok());
        assert!(check.validate("").is_ok());
        assert!(check.validate("abcd").is_err());
    }

    #[test]
    fn error_kinds_and_messages() {
        let err = min_length(3).validate("a").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooShort);
        assert_eq!(err.message, "String not long enough");

        let err = max_length(1).validate("ab").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooLong);
        assert_eq!(err.message, "String too long");
    }

    #[test]
    fn counts_codepoints_not_bytes() {
        // Four codepoints, twelve bytes.
        let input = "\u{65e5}\u{672c}\u{8a9e}\u{01f980}";
        assert!(min_length(4).validate(input).is_ok());
        assert!(max_length(4).validate(input).is_ok());
        assert!(min_length(5).validate(input).is_err());
    }

    #[test]
    fn range_composition() {
        let check = min_length(3).and(max_length(10));
        assert!(check.validate("abc").is_ok());
        assert!(check.validate("0123456789").is_ok());
        assert!(check.validate("ab").is_err());
        assert!(check.validate("01234567890").is_err());
    }
}
