//! Literal kind gate.

use crate::foundation::{ErrorKind, ValidationError};
use crate::literal::{LiteralKind, RawLiteral};

crate::validator! {
    /// Accepts only `String`-kinded literals.
    ///
    /// Every textual scalar runs this first; numeric and other literal kinds
    /// are never textually valid.
    pub StringKind for RawLiteral;
    rule(input) { input.kind == LiteralKind::String }
    error(input) {
        ValidationError::new(
            ErrorKind::InvalidKind,
            format!("Can only parse strings, got: {}", input.kind),
        )
        .with_param("kind", input.kind.to_string())
    }
    fn string_kind();
}
