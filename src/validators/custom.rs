//! Arbitrary predicate checks.

use crate::foundation::{Validate, ValidationError};

/// Wraps a plain function as a check.
///
/// The escape hatch for scalars whose rule is not expressible as a pattern
/// or constraint: the function decides and reports its own
/// [`ValidationError`].
///
/// # Examples
///
/// ```rust,ignore
/// let even_length = check_fn(|value: &str| {
///     if value.len() % 2 == 0 {
///         Ok(())
///     } else {
///         Err(ValidationError::new(ErrorKind::PatternMismatch, "odd length"))
///     }
/// });
/// ```
#[derive(Clone)]
pub struct CheckFn<F> {
    f: F,
}

impl<F> CheckFn<F>
where
    F: Fn(&str) -> Result<(), ValidationError>,
{
    /// Creates a new predicate check.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> std::fmt::Debug for CheckFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckFn").finish_non_exhaustive()
    }
}

impl<F> Validate for CheckFn<F>
where
    F: Fn(&str) -> Result<(), ValidationError>,
{
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (self.f)(input)
    }
}

/// Creates a predicate check.
pub fn check_fn<F>(f: F) -> CheckFn<F>
where
    F: Fn(&str) -> Result<(), ValidationError>,
{
    CheckFn::new(f)
}
