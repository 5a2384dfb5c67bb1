//! Token-stream cursor shared by every parsing routine.
//!
//! A flat `Vec<Token>` plus a cursor index, with
//! `current`/`advance`/`expect`/`match_token` helpers. Parsing is
//! fail-fast: the first grammar violation returns a `ParseError`
//! immediately, with no diagnostic accumulation or recovery.

use cfs_lex::{Token, TokenKind};
use cfs_util::{CfsError, Position};

pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, position: 0 }
    }

    pub(crate) fn current(&self) -> &TokenKind {
        &self.tokens[self.position].kind
    }

    pub(crate) fn current_token(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.tokens[self.position].clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        tok
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current() == kind
    }

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, CfsError> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            Err(self.error(format!(
                "expected {what}, found {}",
                describe(self.current())
            )))
        }
    }

    /// Consumes zero or more `Newline`/`Semicolon` tokens; multiple
    /// consecutive separators are allowed.
    pub(crate) fn skip_separators(&mut self) {
        while matches!(self.current(), TokenKind::Newline | TokenKind::Semicolon) {
            self.advance();
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current(), TokenKind::Eof)
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> CfsError {
        let pos = self.current_token().span.position();
        CfsError::parse(pos, message)
    }

    pub(crate) fn error_at(&self, pos: Position, message: impl Into<String>) -> CfsError {
        CfsError::parse(pos, message)
    }
}

/// Human-readable description of a token kind for error messages (spec
/// §4.2: "unexpected token (reports the offending lexeme)").
pub(crate) fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(s) => format!("identifier '{s}'"),
        TokenKind::Number(n) => format!("number '{n}'"),
        TokenKind::Tag(t) => format!("tag '{t}'"),
        TokenKind::Keyword(k) => format!("keyword '{k:?}'"),
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::Newline => "newline".to_string(),
        other => format!("'{other:?}'"),
    }
}
