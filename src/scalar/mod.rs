//! Scalar definitions: named validation pipelines with the three-hook
//! custom-scalar surface.
//!
//! A [`ScalarDefinition`] is a name, a description, and an ordered pipeline
//! of checks. The embedding schema layer talks to it through exactly three
//! entry points:
//!
//! - [`serialize`](ScalarDefinition::serialize) - identity, no outbound
//!   validation
//! - [`parse_value`](ScalarDefinition::parse_value) - runtime-variable path
//! - [`parse_literal`](ScalarDefinition::parse_literal) - inline-literal path
//!
//! Both parse paths run the identical pipeline; `parse_value` wraps the
//! value into a `String`-kinded [`RawLiteral`] first. The pipeline runs in
//! declaration order and returns the first failure; later checks are
//! skipped. Success returns the input value verbatim - no normalization,
//! trimming, or case-folding, ever.

use std::fmt;

use crate::foundation::{ErrorKind, Validate, ValidationError};
use crate::literal::RawLiteral;
use crate::validators::StringKind;

pub mod builtin;
pub mod factory;

pub use builtin::{date_time, email, url, uuid};
pub use factory::{
    Complexity, ConfigError, PasswordOptions, RegexScalarOptions, ScalarFactory, StringOptions,
};

// ============================================================================
// SCALAR ERROR
// ============================================================================

/// A validation failure paired with the literal that caused it.
///
/// The embedding framework wraps this into its own wire-level error
/// envelope; [`to_json_value`](ScalarError::to_json_value) gives it a
/// ready-made structured form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ScalarError {
    /// What failed.
    pub error: ValidationError,
    /// The offending literal, for caller-side diagnostics.
    pub literal: RawLiteral,
}

impl ScalarError {
    /// Which constraint failed.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.error.kind
    }

    /// The fixed human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// Structured form for host error envelopes.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .error
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.error.kind.code(),
            "message": self.error.message,
            "params": params,
            "literal": self.literal,
        })
    }
}

// ============================================================================
// SCALAR DEFINITION
// ============================================================================

/// A boxed check over string input, shareable across threads.
pub type BoxedCheck = Box<dyn Validate<Input = str> + Send + Sync>;

/// A named, documented validation pipeline.
///
/// Construction happens once at schema-build time, through
/// [`ScalarFactory`], the [builtins](builtin), or [`ScalarDefinition::new`] +
/// [`with_check`](ScalarDefinition::with_check); after that the definition is
/// immutable and every parse is a pure function of its input.
///
/// # Examples
///
/// ```rust,ignore
/// use schema_scalars::prelude::*;
///
/// let hex_color = ScalarDefinition::new("HexColor", "A #rrggbb color.")
///     .with_check(matches_regex(r"^#[0-9a-f]{6}$")?.with_message("Not a valid color"));
///
/// assert_eq!(hex_color.parse_value("#ff0080")?, "#ff0080");
/// ```
pub struct ScalarDefinition {
    name: String,
    description: String,
    pipeline: Vec<BoxedCheck>,
}

impl ScalarDefinition {
    /// Creates a definition with an empty pipeline.
    ///
    /// The literal-kind gate is not part of the pipeline: every textual
    /// scalar applies it before its first check.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            pipeline: Vec::new(),
        }
    }

    /// Appends a check to the pipeline. Order is meaning: checks run in the
    /// order they were added.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_check<C>(mut self, check: C) -> Self
    where
        C: Validate<Input = str> + Send + Sync + 'static,
    {
        self.pipeline.push(Box::new(check));
        self
    }

    /// The schema-unique name of this scalar.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description for schema introspection.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Serializes an internal value for output. Identity: scalars store the
    /// accepted string as-is and no outbound validation is performed.
    #[must_use]
    pub fn serialize<'a>(&self, value: &'a str) -> &'a str {
        value
    }

    /// Parses an already-deserialized runtime value (a query variable).
    ///
    /// Wraps the value into a `String`-kinded literal and runs the identical
    /// pipeline as [`parse_literal`](Self::parse_literal) - the two paths
    /// never diverge.
    pub fn parse_value(&self, value: &str) -> Result<String, ScalarError> {
        self.parse_literal(&RawLiteral::string(value))
    }

    /// Parses an inline wire literal.
    ///
    /// Runs the kind gate, then the pipeline in declaration order. The first
    /// failing check's error is the sole output; on success the literal's
    /// value is returned unchanged.
    pub fn parse_literal(&self, literal: &RawLiteral) -> Result<String, ScalarError> {
        match self.run(literal) {
            Ok(()) => Ok(literal.value.clone()),
            Err(error) => Err(ScalarError {
                error,
                literal: literal.clone(),
            }),
        }
    }

    fn run(&self, literal: &RawLiteral) -> Result<(), ValidationError> {
        StringKind.validate(literal)?;
        for check in &self.pipeline {
            check.validate(&literal.value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ScalarDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("pipeline_len", &self.pipeline.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::validators::{alphabet, max_length, min_length};

    fn sample() -> ScalarDefinition {
        ScalarDefinition::new("Sample", "A sample scalar.")
            .with_check(min_length(3))
            .with_check(max_length(10))
            .with_check(alphabet("abc123"))
    }

    #[test]
    fn kind_gate_runs_first() {
        let scalar = sample();
        let err = scalar.parse_literal(&RawLiteral::int("42")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKind);
    }

    #[test]
    fn pipeline_order_is_declaration_order() {
        let scalar = sample();
        // Too short AND outside the alphabet: length wins.
        let err = scalar.parse_literal(&RawLiteral::string("zz")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooShort);
    }

    #[test]
    fn success_returns_the_value_verbatim() {
        let scalar = sample();
        let parsed = scalar.parse_literal(&RawLiteral::string("abc1")).unwrap();
        assert_eq!(parsed, "abc1");
    }

    #[test]
    fn parse_value_matches_parse_literal() {
        let scalar = sample();
        for input in ["abc1", "zz", "", "abcabcabcabc", "dddd"] {
            let via_value = scalar.parse_value(input);
            let via_literal = scalar.parse_literal(&RawLiteral::string(input));
            assert_eq!(via_value, via_literal);
        }
    }

    #[test]
    fn serialize_is_identity() {
        let scalar = sample();
        assert_eq!(scalar.serialize("anything at all"), "anything at all");
    }

    #[test]
    fn error_carries_the_offending_literal() {
        let scalar = sample();
        let err = scalar.parse_literal(&RawLiteral::string("dddd")).unwrap_err();
        assert_eq!(err.literal, RawLiteral::string("dddd"));
        assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
    }

    #[test]
    fn json_value_shape() {
        let scalar = sample();
        let err = scalar.parse_literal(&RawLiteral::string("z")).unwrap_err();
        let json = err.to_json_value();
        assert_eq!(json["code"], "too_short");
        assert_eq!(json["message"], "String not long enough");
        assert_eq!(json["params"]["min"], "3");
        assert_eq!(json["literal"]["value"], "z");
    }

    #[test]
    fn definitions_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>(_value: &T) {}
        assert_send_sync(&sample());
    }

    #[test]
    fn empty_pipeline_accepts_any_string() {
        let scalar = ScalarDefinition::new("Anything", "No constraints.");
        assert!(scalar.parse_value("").is_ok());
        assert!(scalar.parse_literal(&RawLiteral::float("1.5")).is_err());
    }
}
