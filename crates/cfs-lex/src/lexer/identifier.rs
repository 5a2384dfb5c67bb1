//! Identifier and keyword lexing.

use cfs_util::{CfsError, Symbol};

use super::core::{is_ident_continue, Lexer};
use crate::token::{keyword_from_ident, Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self) -> Result<Token, CfsError> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or_else(|| TokenKind::Ident(Symbol::intern(text)));
        Ok(self.make(kind))
    }
}
