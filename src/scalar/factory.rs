//! Scalar construction from declarative options.
//!
//! One [`ScalarFactory`] per schema-build context. The factory owns the
//! per-family naming counters that keep parameterized scalars
//! schema-unique: the first `LimitedString` built by a factory is named
//! `LimitedString`, the next ones `LimitedString2`, `LimitedString3`, ... in
//! construction order. A definition that fails construction does not consume
//! a family number.

use std::collections::HashMap;

use crate::foundation::{ValidateExt, ValidationError};
use crate::scalar::ScalarDefinition;
use crate::validators::{
    Alphabet, CheckFn, MatchesRegex, MaxLength, MinLength, alpha_numeric, mixed_case,
    special_chars,
};

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Construction-time misconfiguration.
///
/// Surfaced at schema-build time so an unsatisfiable pipeline can never be
/// registered.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `min > max` would make every input fail one of the two bounds.
    #[error("minimum length {min} must not exceed maximum length {max}")]
    InvalidLengthRange {
        /// Requested minimum length.
        min: usize,
        /// Requested maximum length.
        max: usize,
    },

    /// The scalar pattern does not compile.
    #[error("invalid scalar pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Options for a regex-based scalar.
#[derive(Debug, Clone, Default)]
pub struct RegexScalarOptions {
    /// Schema-unique scalar name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Anchored whole-string pattern.
    pub pattern: String,
    /// Failure message; defaults to `"Validation error for <name>"`.
    pub error: Option<String>,
}

/// Options for a length/alphabet-constrained string scalar.
#[derive(Debug, Clone, Default)]
pub struct StringOptions {
    /// Minimum length in codepoints; defaults to 1.
    pub min: Option<usize>,
    /// Maximum length in codepoints; unbounded when absent.
    pub max: Option<usize>,
    /// Allowed characters; unconstrained when absent.
    pub alphabet: Option<String>,
}

/// Which complexity rules a password scalar enforces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Complexity {
    /// At least one letter and one number.
    pub alpha_numeric: bool,
    /// At least one upper and one lower case letter.
    pub mixed_case: bool,
    /// At least one character outside `[A-Za-z0-9]`.
    pub special_chars: bool,
}

/// Options for a password scalar.
#[derive(Debug, Clone, Default)]
pub struct PasswordOptions {
    /// Minimum length in codepoints; defaults to 1.
    pub min: Option<usize>,
    /// Maximum length in codepoints; unbounded when absent.
    pub max: Option<usize>,
    /// Allowed characters; unconstrained when absent.
    pub alphabet: Option<String>,
    /// Complexity rules to enforce.
    pub complexity: Complexity,
}

// ============================================================================
// FACTORY
// ============================================================================

/// Builds [`ScalarDefinition`]s from declarative options.
#[derive(Debug, Default)]
pub struct ScalarFactory {
    counters: HashMap<String, u32>,
}

impl ScalarFactory {
    /// Creates a factory with fresh naming counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a regex-based scalar: pipeline `[MatchesRegex]` behind the
    /// implicit kind gate.
    pub fn regex_scalar(&self, options: RegexScalarOptions) -> Result<ScalarDefinition, ConfigError> {
        let message = options
            .error
            .unwrap_or_else(|| format!("Validation error for {}", options.name));
        let check = MatchesRegex::new(&options.pattern)?.with_message(message);
        Ok(ScalarDefinition::new(options.name, options.description).with_check(check))
    }

    /// Builds a length/alphabet-constrained string scalar under a custom
    /// family name.
    ///
    /// Pipeline order is fixed: min length, max length, alphabet. A
    /// too-short value with disallowed characters always reports too-short.
    pub fn constrained_string(
        &mut self,
        prefix: &str,
        options: StringOptions,
    ) -> Result<ScalarDefinition, ConfigError> {
        self.assemble(prefix, "A string", options, Complexity::default())
    }

    /// Builds a `LimitedString` scalar.
    pub fn limited_string(&mut self, options: StringOptions) -> Result<ScalarDefinition, ConfigError> {
        self.constrained_string("LimitedString", options)
    }

    /// Builds a `Password` scalar: the constrained-string pipeline plus the
    /// requested complexity rules, appended in canonical order
    /// (alpha-numeric, mixed-case, special-chars).
    pub fn password(&mut self, options: PasswordOptions) -> Result<ScalarDefinition, ConfigError> {
        let PasswordOptions {
            min,
            max,
            alphabet,
            complexity,
        } = options;
        self.assemble("Password", "A password", StringOptions { min, max, alphabet }, complexity)
    }

    /// Wraps an arbitrary predicate as a one-check scalar.
    pub fn custom_scalar<F>(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        check: F,
    ) -> ScalarDefinition
    where
        F: Fn(&str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        ScalarDefinition::new(name, description).with_check(CheckFn::new(check))
    }

    fn assemble(
        &mut self,
        prefix: &str,
        noun: &str,
        options: StringOptions,
        complexity: Complexity,
    ) -> Result<ScalarDefinition, ConfigError> {
        let min = options.min.unwrap_or(1);
        if let Some(max) = options.max {
            if min > max {
                return Err(ConfigError::InvalidLengthRange { min, max });
            }
        }

        let name = self.family_name(prefix);
        let description = describe(noun, min, options.max, options.alphabet.as_deref(), complexity);

        let mut definition =
            ScalarDefinition::new(name, description).with_check(MinLength::new(min));
        if let Some(max) = options.max {
            definition = definition.with_check(MaxLength::new(max));
        }
        if let Some(alphabet) = options.alphabet {
            definition = definition.with_check(Alphabet::new(&alphabet));
        }
        if complexity.alpha_numeric {
            definition = definition.with_check(alpha_numeric());
        }
        if complexity.mixed_case {
            definition = definition.with_check(mixed_case());
        }
        if complexity.special_chars {
            definition = definition.with_check(special_chars());
        }
        Ok(definition)
    }

    fn family_name(&mut self, prefix: &str) -> String {
        let count = self.counters.entry(prefix.to_owned()).or_insert(0);
        *count += 1;
        if *count == 1 {
            prefix.to_owned()
        } else {
            format!("{prefix}{count}")
        }
    }
}

fn describe(
    noun: &str,
    min: usize,
    max: Option<usize>,
    alphabet: Option<&str>,
    complexity: Complexity,
) -> String {
    let mut description = match max {
        Some(max) => format!("{noun} between {min} and {max} characters long"),
        None => format!("{noun} of at least {min} characters"),
    };
    if let Some(alphabet) = alphabet {
        description.push_str(&format!(", drawn from the alphabet \"{alphabet}\""));
    }
    description.push('.');
    if complexity.alpha_numeric {
        description.push_str(" Must contain at least one letter and one number.");
    }
    if complexity.mixed_case {
        description.push_str(" Must contain at least one upper and one lower case letter.");
    }
    if complexity.special_chars {
        description.push_str(" Must contain at least one special character.");
    }
    description
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
    fn family_numbering_starts_unsuffixed() {
        let mut factory = ScalarFactory::new();
        let first = factory.limited_string(StringOptions::default()).unwrap();
        let second = factory.limited_string(StringOptions::default()).unwrap();
        let third = factory.limited_string(StringOptions::default()).unwrap();
        assert_eq!(first.name(), "LimitedString");
        assert_eq!(second.name(), "LimitedString2");
        assert_eq!(third.name(), "LimitedString3");
    }

    #[test]
    fn families_count_independently() {
        let mut factory = ScalarFactory::new();
        let limited = factory.limited_string(StringOptions::default()).unwrap();
        let password = factory.password(PasswordOptions::default()).unwrap();
        assert_eq!(limited.name(), "LimitedString");
        assert_eq!(password.name(), "Password");
    }

    #[test]
    fn separate_factories_number_separately() {
        let mut a = ScalarFactory::new();
        let mut b = ScalarFactory::new();
        a.limited_string(StringOptions::default()).unwrap();
        let from_b = b.limited_string(StringOptions::default()).unwrap();
        assert_eq!(from_b.name(), "LimitedString");
    }

    #[test]
    fn failed_construction_consumes_no_number() {
        let mut factory = ScalarFactory::new();
        let err = factory.limited_string(StringOptions {
            min: Some(10),
            max: Some(3),
            alphabet: None,
        });
        assert!(matches!(
            err,
            Err(ConfigError::InvalidLengthRange { min: 10, max: 3 })
        ));
        let next = factory.limited_string(StringOptions::default()).unwrap();
        assert_eq!(next.name(), "LimitedString");
    }

    #[test]
    fn min_defaults_to_one() {
        let mut factory = ScalarFactory::new();
        let scalar = factory.limited_string(StringOptions::default()).unwrap();
        assert!(scalar.parse_value("a").is_ok());
        assert_eq!(
            scalar.parse_value("").unwrap_err().kind(),
            ErrorKind::TooShort
        );
    }

    #[test]
    fn regex_scalar_default_message_names_the_scalar() {
        let factory = ScalarFactory::new();
        let scalar = factory
            .regex_scalar(RegexScalarOptions {
                name: "Hex".into(),
                description: "Lower-case hex.".into(),
                pattern: r"^[0-9a-f]+$".into(),
                error: None,
            })
            .unwrap();
        let err = scalar.parse_value("XYZ").unwrap_err();
        assert_eq!(err.message(), "Validation error for Hex");
        assert_eq!(err.kind(), ErrorKind::PatternMismatch);
    }

    #[test]
    fn regex_scalar_honors_error_override() {
        let factory = ScalarFactory::new();
        let scalar = factory
            .regex_scalar(RegexScalarOptions {
                name: "Hex".into(),
                description: String::new(),
                pattern: r"^[0-9a-f]+$".into(),
                error: Some("Not hex".into()),
            })
            .unwrap();
        assert_eq!(scalar.parse_value("XYZ").unwrap_err().message(), "Not hex");
    }

    #[test]
    fn regex_scalar_rejects_bad_patterns() {
        let factory = ScalarFactory::new();
        let result = factory.regex_scalar(RegexScalarOptions {
            name: "Broken".into(),
            description: String::new(),
            pattern: "(".into(),
            error: None,
        });
        assert!(matches!(result, Err(ConfigError::InvalidPattern(_))));
    }

    #[test]
    fn password_appends_complexity_in_canonical_order() {
        let mut factory = ScalarFactory::new();
        let scalar = factory
            .password(PasswordOptions {
                complexity: Complexity {
                    alpha_numeric: true,
                    mixed_case: true,
                    special_chars: false,
                },
                ..Default::default()
            })
            .unwrap();
        // Fails both rules; alpha-numeric is reported because it runs first.
        let err = scalar.parse_value("dddd").unwrap_err();
        assert_eq!(
            err.message(),
            "String must contain at least one letter and one number"
        );
        assert!(scalar.parse_value("aB1").is_ok());
    }

    #[test]
    fn custom_scalar_runs_the_predicate() {
        let factory = ScalarFactory::new();
        let scalar = factory.custom_scalar("Even", "Even-length strings.", |value| {
            if value.chars().count() % 2 == 0 {
                Ok(())
            } else {
                Err(ValidationError::new(ErrorKind::PatternMismatch, "odd length"))
            }
        });
        assert!(scalar.parse_literal(&RawLiteral::string("abcd")).is_ok());
        assert!(scalar.parse_literal(&RawLiteral::string("abc")).is_err());
    }

    #[test]
    fn descriptions_spell_out_the_constraints() {
        let mut factory = ScalarFactory::new();
        let scalar = factory
            .limited_string(StringOptions {
                min: Some(3),
                max: Some(10),
                alphabet: Some("abc123".into()),
            })
            .unwrap();
        assert_eq!(
            scalar.description(),
            "A string between 3 and 10 characters long, drawn from the alphabet \"abc123\"."
        );
    }
}
