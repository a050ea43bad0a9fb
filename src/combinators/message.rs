//! MESSAGE combinator - custom error messages.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the failure message of a check, keeping the error kind and
/// params intact.
///
/// This is how per-scalar messages ("Not a valid Email address") and factory
/// overrides are layered over generic checks without disturbing the typed
/// taxonomy.
///
/// # Examples
///
/// ```rust,ignore
/// let check = WithMessage::new(matches_regex(PATTERN)?, "Not a valid Email address");
/// let err = check.validate("plainaddress").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::PatternMismatch);
/// assert_eq!(err.message, "Not a valid Email address");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner check.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the override message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|original| original.with_message(self.message.clone()))
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(check: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(check, message)
}
