//! The compiler's single error type.
//!
//! CFS compilation is fail-fast: the first error encountered in any stage
//! aborts the whole pipeline. `CfsError` is not an accumulating
//! diagnostic bag — it is a plain `thiserror` enum returned by `Result`,
//! one variant per stage.

use thiserror::Error;

use crate::span::Position;

/// One of the five fatal error kinds a CFS compile can produce, plus
/// `Internal` for programming-error invariant violations that are not
/// part of the user-facing contract.
#[derive(Debug, Error)]
pub enum CfsError {
    #[error("lex error: {message}")]
    Lex {
        position: Option<Position>,
        message: String,
    },

    #[error("parse error: {message}")]
    Parse {
        position: Option<Position>,
        message: String,
    },

    #[error("program error: {message}")]
    Program {
        position: Option<Position>,
        message: String,
    },

    #[error("resolve error: {message}")]
    Resolve {
        position: Option<Position>,
        message: String,
    },

    #[error("usage error: {message}")]
    Usage { message: String },

    /// An invariant the later stages assume was violated by an earlier
    /// one (e.g. the lowerer was handed an unresolved identifier). This
    /// can only indicate a bug in the compiler itself.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl CfsError {
    pub fn lex(position: Position, message: impl Into<String>) -> Self {
        CfsError::Lex {
            position: Some(position),
            message: message.into(),
        }
    }

    pub fn parse(position: Position, message: impl Into<String>) -> Self {
        CfsError::Parse {
            position: Some(position),
            message: message.into(),
        }
    }

    pub fn program(message: impl Into<String>) -> Self {
        CfsError::Program {
            position: None,
            message: message.into(),
        }
    }

    pub fn program_at(position: Position, message: impl Into<String>) -> Self {
        CfsError::Program {
            position: Some(position),
            message: message.into(),
        }
    }

    pub fn resolve(position: Position, message: impl Into<String>) -> Self {
        CfsError::Resolve {
            position: Some(position),
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        CfsError::Usage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CfsError::Internal {
            message: message.into(),
        }
    }

    /// The kind name used in the `<path>:<line>:<column>: <kind>:
    /// <message>` rendering.
    pub fn kind(&self) -> &'static str {
        match self {
            CfsError::Lex { .. } => "lex error",
            CfsError::Parse { .. } => "parse error",
            CfsError::Program { .. } => "program error",
            CfsError::Resolve { .. } => "resolve error",
            CfsError::Usage { .. } => "usage error",
            CfsError::Internal { .. } => "internal error",
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            CfsError::Lex { position, .. }
            | CfsError::Parse { position, .. }
            | CfsError::Program { position, .. }
            | CfsError::Resolve { position, .. } => *position,
            CfsError::Usage { .. } | CfsError::Internal { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CfsError::Lex { message, .. }
            | CfsError::Parse { message, .. }
            | CfsError::Program { message, .. }
            | CfsError::Resolve { message, .. }
            | CfsError::Usage { message }
            | CfsError::Internal { message } => message,
        }
    }

    /// The process exit code: 0 success (not representable here), 1 for
    /// any compile error, 2 for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CfsError::Usage { .. } => 2,
            _ => 1,
        }
    }
}

/// Result alias used throughout the compiler crates.
pub type CfsResult<T> = std::result::Result<T, CfsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = CfsError::lex(Position::new(3, 7), "unterminated comment");
        assert_eq!(err.to_string(), "lex error: unterminated comment");
        assert_eq!(err.position(), Some(Position::new(3, 7)));
    }

    #[test]
    fn usage_error_has_no_position() {
        let err = CfsError::usage("missing input file");
        assert_eq!(err.position(), None);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn compile_errors_exit_one() {
        assert_eq!(CfsError::program("no main").exit_code(), 1);
        assert_eq!(
            CfsError::resolve(Position::new(1, 1), "cycle").exit_code(),
            1
        );
    }
}
