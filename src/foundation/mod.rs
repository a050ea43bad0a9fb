//! Core validation types and traits.
//!
//! The building blocks everything else composes:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], the [`ErrorKind`] taxonomy
//!
//! Checks are generic over their input type and report the first violated
//! constraint as a typed, terminal failure. Composition happens through
//! [`ValidateExt`] and the [`combinators`](crate::combinators); the scalar
//! layer runs ordered pipelines of boxed checks on top of this.

pub mod error;
pub mod traits;

pub use error::{ErrorKind, ValidationError};
pub use traits::{Validate, ValidateExt};
