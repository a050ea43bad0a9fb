//! Validation failure types.
//!
//! Every check reports exactly one terminal, non-retryable failure: a
//! [`ValidationError`] carrying a typed [`ErrorKind`], a fixed human-readable
//! message, and structured params. Message strings are part of the
//! compatibility contract with embedding hosts; constraint parameters go into
//! `params`, never interpolated into the message.
//!
//! String fields use `Cow<'static, str>` for zero allocation in the common
//! case of static messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed taxonomy of validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Literal is not textual where a textual scalar was expected.
    InvalidKind,
    /// Value is shorter than the configured minimum length.
    TooShort,
    /// Value is longer than the configured maximum length.
    TooLong,
    /// Value contains a codepoint outside the allowed alphabet.
    InvalidCharacter,
    /// Value does not match a regex-based scalar's pattern.
    PatternMismatch,
    /// Value fails one specific complexity rule.
    ComplexityUnmet,
}

impl ErrorKind {
    /// Machine-readable code for host error envelopes.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidKind => "invalid_kind",
            ErrorKind::TooShort => "too_short",
            ErrorKind::TooLong => "too_long",
            ErrorKind::InvalidCharacter => "invalid_character",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::ComplexityUnmet => "complexity_unmet",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A single validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// let error = ValidationError::new(ErrorKind::TooShort, "String not long enough")
///     .with_param("min", "3")
///     .with_param("actual", "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Which constraint failed.
    pub kind: ErrorKind,

    /// Fixed human-readable message. Exact strings are a compatibility
    /// contract; overriding goes through
    /// [`WithMessage`](crate::combinators::WithMessage), which preserves
    /// `kind`.
    pub message: Cow<'static, str>,

    /// Constraint parameters as ordered key-value pairs (typically 0-2).
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping the kind and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a `TooShort` error with the canonical message.
    pub fn too_short(min: usize, actual: usize) -> Self {
        Self::new(ErrorKind::TooShort, "String not long enough")
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a `TooLong` error with the canonical message.
    pub fn too_long(max: usize, actual: usize) -> Self {
        Self::new(ErrorKind::TooLong, "String too long")
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an `InvalidCharacter` error naming the offending codepoint.
    pub fn invalid_character(character: char) -> Self {
        Self::new(ErrorKind::InvalidCharacter, "Invalid character found")
            .with_param("character", character.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
