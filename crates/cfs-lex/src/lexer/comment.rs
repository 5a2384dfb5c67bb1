//! Comment and whitespace skipping. `//` runs to end of line; `/* */`
//! may span lines and is not nested — the first `*/` closes it.

use cfs_util::CfsError;

use super::core::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// `/`, or the start of a `//` or `/* */` comment.
    pub(crate) fn lex_slash(&mut self) -> Result<crate::token::Token, CfsError> {
        self.cursor.advance();

        if self.cursor.current_char() == '/' {
            while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                self.cursor.advance();
            }
            return self.next_token();
        }

        if self.cursor.current_char() == '*' {
            self.cursor.advance();
            self.skip_block_comment()?;
            return self.next_token();
        }

        Ok(self.make(TokenKind::Slash))
    }

    fn skip_block_comment(&mut self) -> Result<(), CfsError> {
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error("unterminated multi-line comment"));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    /// Skips whitespace (space, tab) and comments between tokens.
    /// Newlines are NOT skipped here — they are significant tokens.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<(), CfsError> {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek_char(1) == '/' || self.cursor.peek_char(1) == '*' => {
                    // Let lex_slash (invoked via next_token) handle the
                    // comment body; here we only need to detect it so
                    // whitespace runs around it keep getting skipped.
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenKind;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::tokenize(src)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn line_comment_discarded() {
        assert_eq!(kinds("1 // trailing\n2"), {
            use TokenKind::*;
            vec![Number("1".into()), Newline, Number("2".into()), Eof]
        });
    }

    #[test]
    fn block_comment_spanning_lines_discarded() {
        assert_eq!(kinds("1 /* a\nb */ 2"), {
            use TokenKind::*;
            vec![Number("1".into()), Number("2".into()), Eof]
        });
    }

    #[test]
    fn unterminated_block_comment_errors() {
        assert!(Lexer::tokenize("/* never closed").is_err());
    }

    #[test]
    fn block_comment_ends_at_first_close() {
        // Not nested: the inner "/*" is just text, the first "*/" ends it.
        assert_eq!(kinds("/* /* nested-looking */ 1"), {
            use TokenKind::*;
            vec![Number("1".into()), Eof]
        });
    }
}
