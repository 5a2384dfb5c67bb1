//! Host-engine tag lexing: `#` followed by any characters up to the
//! next `#` (inclusive), emitted verbatim.

use cfs_util::CfsError;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_tag(&mut self) -> Result<Token, CfsError> {
        self.cursor.advance(); // opening '#'
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error("unterminated tag: missing closing '#'"));
            }
            if self.cursor.current_char() == '#' {
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(self.token_start).to_string();
        Ok(self.make(TokenKind::Tag(lexeme)))
    }
}
