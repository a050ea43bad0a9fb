//! AND combinator.
//!
//! [`And`] runs two checks in order; both must pass and the first failure is
//! returned unchanged. This is the only logical composition the pipeline
//! engine needs: a scalar pipeline is an AND of its checks.

use crate::foundation::{Validate, ValidationError};

/// Combines two checks with logical AND.
///
/// Short-circuits: the right check never runs when the left one fails.
///
/// # Examples
///
/// ```rust,ignore
/// let check = And::new(min_length(3), max_length(10));
/// assert!(check.validate("hello").is_ok());
/// assert!(check.validate("hi").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left check.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right check.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two checks.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
