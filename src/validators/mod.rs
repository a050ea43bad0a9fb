//! Built-in checks.
//!
//! One module per constraint kind:
//!
//! - **Kind**: [`StringKind`] - literal must be textual
//! - **Length**: [`MinLength`], [`MaxLength`] - codepoint bounds
//! - **Alphabet**: [`Alphabet`] - fixed allowed character set
//! - **Content**: [`MatchesRegex`], [`Url`] - grammar checks
//! - **Complexity**: [`AlphaNumeric`], [`MixedCase`], [`SpecialChars`]
//! - **Custom**: [`CheckFn`] - arbitrary predicates
//!
//! # Examples
//!
//! ```rust,ignore
//! use schema_scalars::prelude::*;
//!
//! let nickname = min_length(3).and(max_length(20)).and(alphabet("abcdefghijklmnopqrstuvwxyz"));
//! assert!(nickname.validate("alice").is_ok());
//! ```

pub mod alphabet;
pub mod complexity;
pub mod content;
pub mod custom;
pub mod kind;
pub mod length;

pub use alphabet::{Alphabet, alphabet};
pub use complexity::{
    AlphaNumeric, MixedCase, SpecialChars, alpha_numeric, mixed_case, special_chars,
};
pub use content::{MatchesRegex, Url, matches_regex};
pub use custom::{CheckFn, check_fn};
pub use kind::{StringKind, string_kind};
pub use length::{MaxLength, MinLength, max_length, min_length};
