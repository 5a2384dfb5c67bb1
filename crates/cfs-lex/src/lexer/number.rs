//! Number literal lexing: digits, optional single `.`, optional `e`/`E`
//! exponent with optional sign.

use cfs_util::CfsError;

use super::core::{is_ident_start, Lexer};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self) -> Result<Token, CfsError> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            if !self.cursor.current_char().is_ascii_digit() {
                return Err(self.error("malformed number: exponent has no digits"));
            }
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if is_ident_start(self.cursor.current_char()) {
            return Err(self.error("identifier beginning with a digit"));
        }

        let lexeme = self.cursor.slice_from(self.token_start).to_string();
        Ok(self.make(TokenKind::Number(lexeme)))
    }
}
