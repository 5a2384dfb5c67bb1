//! cfs-lower — Arithmetic-identity lowering and emission for Closed-Form
//! Script.
//!
//! Takes the resolved, call-free expression produced by `cfs-resolve` and
//! rewrites every non-native construct (booleans, (in)equality,
//! comparisons, conditionals, `^`, `%`) into the arithmetic identities
//! from the language reference, then pretty-prints the result with
//! minimal, precedence-correct parenthesization.

mod emit;
mod identities;
mod lower;

pub use emit::emit;
pub use lower::lower;

use cfs_par::Expr;
use cfs_util::CfsError;

/// Lowers and emits a resolved expression in one step — the public
/// entry point `cfs-drv` calls after `cfs-resolve::resolve`.
pub fn lower_and_emit(expr: &Expr) -> Result<String, CfsError> {
    Ok(emit::emit(&lower::lower(expr)?))
}
