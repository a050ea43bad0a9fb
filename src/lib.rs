//! # schema-scalars
//!
//! Composable custom scalar validators for a schema type system.
//!
//! A scalar is a named primitive type with custom parse rules. This crate is
//! the validation engine behind such scalars: checks compose into ordered
//! pipelines, pipelines become [`ScalarDefinition`](scalar::ScalarDefinition)s,
//! and every definition exposes the three hooks a schema layer needs -
//! `serialize`, `parse_value`, `parse_literal`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use schema_scalars::prelude::*;
//!
//! // The built-in catalogue.
//! let email = email();
//! assert_eq!(email.parse_value("user@example.com")?, "user@example.com");
//!
//! // Parameterized scalars via a factory.
//! let mut factory = ScalarFactory::new();
//! let password = factory.password(PasswordOptions {
//!     min: Some(8),
//!     complexity: Complexity { alpha_numeric: true, ..Default::default() },
//!     ..Default::default()
//! })?;
//! assert!(password.parse_value("hunter42").is_ok());
//! ```
//!
//! ## Creating Checks
//!
//! Use the [`validator!`] macro for zero-boilerplate checks, or implement
//! [`Validate`](foundation::Validate) manually for rules that need more than
//! a predicate (see `validators::content::Url`).
//!
//! ## Guarantees
//!
//! - Both parse paths run the identical pipeline (inline literals and
//!   runtime variables never diverge).
//! - Pipelines short-circuit: the first failing check's typed error is the
//!   sole output, with its message and the offending literal attached.
//! - Validation is pure and reentrant; the only mutable state in the crate
//!   is the factory's naming counters, touched at construction time only.

// ValidationError is the fundamental error type for every check; its inline
// params buffer makes it larger than clippy's default Result threshold, and
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod literal;
mod macros;
pub mod prelude;
pub mod scalar;
pub mod validators;
