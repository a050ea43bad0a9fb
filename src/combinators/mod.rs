//! Check composition.
//!
//! Two combinators cover everything the scalar engine does with checks:
//! [`And`] for ordered conjunction and [`WithMessage`] for message overrides.
//! Both are usually reached through
//! [`ValidateExt`](crate::foundation::ValidateExt) or the
//! [`compose!`](crate::compose) macro rather than constructed directly.

pub mod and;
pub mod message;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
