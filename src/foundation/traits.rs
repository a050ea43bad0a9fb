//! Core traits of the validation engine.

use crate::combinators::{And, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The interface every check implements.
///
/// A check is a pure, synchronous, total function over its input: it either
/// accepts (`Ok(())`) or reports the single constraint it found violated.
/// Checks never mutate, retry, or accumulate.
///
/// # Examples
///
/// ```rust,ignore
/// struct MinLength { min: usize }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::too_short(self.min, input.chars().count()))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type being validated.
    ///
    /// `?Sized` so checks can run directly against `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Fluent composition, implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust,ignore
/// let check = min_length(3).and(max_length(10)).and(alphabet("abc123"));
/// assert!(check.validate("abc").is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Chains another check; both must pass, the first failure wins.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Overrides the failure message, keeping the error kind.
    fn with_message(self, message: impl Into<std::borrow::Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new(ErrorKind::PatternMismatch, "nope"))
        }
    }

    #[test]
    fn validate_through_trait_object() {
        let checks: Vec<Box<dyn Validate<Input = str>>> =
            vec![Box::new(AlwaysValid), Box::new(AlwaysFails)];
        assert!(checks[0].validate("x").is_ok());
        assert!(checks[1].validate("x").is_err());
    }

    #[test]
    fn ext_and_short_circuits() {
        let check = AlwaysFails.and(AlwaysValid);
        assert_eq!(
            check.validate("x").unwrap_err().kind,
            ErrorKind::PatternMismatch
        );
    }

    #[test]
    fn ext_with_message_overrides() {
        let check = AlwaysFails.with_message("custom");
        assert_eq!(check.validate("x").unwrap_err().message, "custom");
    }
}
