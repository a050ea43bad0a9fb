//! Raw input literals.
//!
//! A [`RawLiteral`] is the minimal value-with-kind structure every scalar
//! parse receives: the kind tag of the wire literal plus its raw text. The
//! embedding schema layer produces one per validation attempt; nothing here
//! outlives the call.

use std::fmt;

use serde::Serialize;

/// Kind tag of a wire literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiteralKind {
    /// A quoted string literal.
    String,
    /// An integer literal.
    Int,
    /// A floating-point literal.
    Float,
    /// Any other literal kind (boolean, enum, list, ...).
    Other,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::String => "String",
            LiteralKind::Int => "Int",
            LiteralKind::Float => "Float",
            LiteralKind::Other => "Other",
        })
    }
}

/// A raw literal as it appears inline in a query.
///
/// Values supplied out-of-band (query variables) are wrapped into a
/// `String`-kinded literal before validation, so both paths run the
/// identical pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawLiteral {
    /// Kind tag of the literal.
    pub kind: LiteralKind,
    /// Raw text of the literal.
    pub value: String,
}

impl RawLiteral {
    /// Creates a literal with an explicit kind.
    pub fn new(kind: LiteralKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Creates a `String`-kinded literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(LiteralKind::String, value)
    }

    /// Creates an `Int`-kinded literal.
    pub fn int(value: impl Into<String>) -> Self {
        Self::new(LiteralKind::Int, value)
    }

    /// Creates a `Float`-kinded literal.
    pub fn float(value: impl Into<String>) -> Self {
        Self::new(LiteralKind::Float, value)
    }

    /// Creates a literal of any other kind.
    pub fn other(value: impl Into<String>) -> Self {
        Self::new(LiteralKind::Other, value)
    }
}
