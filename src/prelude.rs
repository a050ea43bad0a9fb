//! Prelude module for convenient imports.
//!
//! A single `use schema_scalars::prelude::*;` brings in the traits, error
//! types, checks, combinators, and the scalar layer.
//!
//! # Examples
//!
//! ```rust,ignore
//! use schema_scalars::prelude::*;
//!
//! let mut factory = ScalarFactory::new();
//! let nickname = factory.limited_string(StringOptions {
//!     min: Some(3),
//!     max: Some(10),
//!     ..Default::default()
//! })?;
//! assert_eq!(nickname.parse_value("alice")?, "alice");
//! ```

pub use crate::foundation::{ErrorKind, Validate, ValidateExt, ValidationError};

pub use crate::literal::{LiteralKind, RawLiteral};

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;

pub use crate::combinators::{And, WithMessage, and, with_message};

pub use crate::scalar::{
    BoxedCheck, Complexity, ConfigError, PasswordOptions, RegexScalarOptions, ScalarDefinition,
    ScalarError, ScalarFactory, StringOptions, date_time, email, url, uuid,
};
