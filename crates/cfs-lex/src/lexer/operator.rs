//! Multi-character operator lexing, matched longest-first.

use cfs_util::CfsError;

use super::core::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::EqEq
        } else {
            TokenKind::Eq
        }
    }

    /// `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Result<TokenKind, CfsError> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Ok(TokenKind::NotEq)
        } else {
            Ok(TokenKind::Bang)
        }
    }

    /// `<`, `<=`, `<:`, `<>`
    pub(crate) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LtEq
        } else if self.cursor.match_char(':') {
            TokenKind::LtColon
        } else if self.cursor.match_char('>') {
            TokenKind::LtGt
        } else {
            TokenKind::Lt
        }
    }

    /// `>`, `>=`, `>:`
    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GtEq
        } else if self.cursor.match_char(':') {
            TokenKind::GtColon
        } else {
            TokenKind::Gt
        }
    }

    /// `&&` only — a lone `&` is unknown punctuation.
    pub(crate) fn lex_ampersand(&mut self) -> Result<TokenKind, CfsError> {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            Ok(TokenKind::AndAnd)
        } else {
            Err(self.error("unknown punctuation '&' (did you mean '&&'?)"))
        }
    }

    /// `||` only — a lone `|` is unknown punctuation.
    pub(crate) fn lex_pipe(&mut self) -> Result<TokenKind, CfsError> {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            Ok(TokenKind::OrOr)
        } else {
            Err(self.error("unknown punctuation '|' (did you mean '||'?)"))
        }
    }
}
