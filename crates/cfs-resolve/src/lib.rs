//! cfs-resolve — Program table and inliner/resolver for Closed-Form
//! Script.
//!
//! A scope-stack walk over a resolved AST: each call pushes a flat frame
//! mapping parameter and constant names to already-resolved expressions,
//! since CFS has no closures and no runtime scoping beyond a single call.

mod program;
mod resolver;
mod scope;

pub use program::ProgramTable;
pub use resolver::{is_fully_resolved, resolve_program};

use cfs_par::Expr;
use cfs_util::CfsError;

/// Builds the program table and fully inlines `main`, producing the
/// single resolved expression the lowerer consumes.
pub fn resolve(source: &str) -> Result<Expr, CfsError> {
    let program = cfs_par::parse(source)?;
    let table = ProgramTable::build(program)?;
    resolve_program(&table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_resolve() {
        let expr = resolve("f(x) return x * x\nmain() return f(3 + 1)").unwrap();
        assert!(is_fully_resolved(&expr));
    }

    #[test]
    fn missing_main_is_program_error() {
        assert!(matches!(resolve("f() return 1"), Err(CfsError::Program { .. })));
    }
}
