//! Allowed-character-set check.

use std::collections::HashSet;

use crate::foundation::ValidationError;

crate::validator! {
    /// Requires every codepoint to come from a fixed alphabet.
    ///
    /// Scans left to right and reports only the first offending codepoint;
    /// violations are not accumulated.
    pub Alphabet { allowed: HashSet<char> } for str;
    rule(self, input) { input.chars().all(|c| self.allowed.contains(&c)) }
    error(self, input) {
        let offending = input
            .chars()
            .find(|c| !self.allowed.contains(c))
            .unwrap_or_default();
        ValidationError::invalid_character(offending)
    }
    new(allowed: &str) { Self { allowed: allowed.chars().collect() } }
    fn alphabet(allowed: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, Validate};

    #[test]
    fn accepts_values_from_the_alphabet() {
        let check = alphabet("abc123");
        assert!(check.validate("aaa").is_ok());
        assert!(check.validate("abc123").is_ok());
        assert!(check.validate("33333ccc22").is_ok());
        assert!(check.validate("").is_ok());
    }

    #[test]
    fn rejects_on_first_offender() {
        let check = alphabet("abc123");
        let err = check.validate("abdd4c").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacter);
        assert_eq!(err.message, "Invalid character found");
        // 'd' comes before '4' in the scan.
        assert_eq!(err.param("character"), Some("d"));
    }

    #[test]
    fn alphabet_is_a_codepoint_set() {
        let check = Alphabet::new("\u{65e5}\u{672c}");
        assert!(check.validate("\u{65e5}\u{65e5}").is_ok());
        assert!(check.validate("\u{8a9e}").is_err());
    }
}
