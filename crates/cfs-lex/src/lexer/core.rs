//! Core lexer dispatch: a cursor wrapper whose `next_token` skips
//! whitespace/comments, stamps the token-start position, then dispatches
//! on the current character.

use cfs_util::{CfsError, Position, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Lexes the full source into a token stream terminated by `Eof`.
    /// `Newline` tokens are preserved; the parser treats runs of them
    /// as a single statement separator.
    pub fn tokenize(source: &'a str) -> Result<Vec<Token>, CfsError> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, CfsError> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(self.make(TokenKind::Eof));
        }

        let kind = match self.cursor.current_char() {
            '\n' => {
                self.cursor.advance();
                TokenKind::Newline
            }
            '(' => {
                self.cursor.advance();
                TokenKind::LParen
            }
            ')' => {
                self.cursor.advance();
                TokenKind::RParen
            }
            ',' => {
                self.cursor.advance();
                TokenKind::Comma
            }
            ';' => {
                self.cursor.advance();
                TokenKind::Semicolon
            }
            '?' => {
                self.cursor.advance();
                TokenKind::Question
            }
            '+' => {
                self.cursor.advance();
                TokenKind::Plus
            }
            '-' => {
                self.cursor.advance();
                TokenKind::Minus
            }
            '*' => {
                self.cursor.advance();
                TokenKind::Star
            }
            '%' => {
                self.cursor.advance();
                TokenKind::Percent
            }
            '^' => {
                self.cursor.advance();
                TokenKind::Caret
            }
            '=' => self.lex_equals(),
            '!' => self.lex_bang()?,
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            ':' => {
                self.cursor.advance();
                TokenKind::Colon
            }
            '&' => self.lex_ampersand()?,
            '|' => self.lex_pipe()?,
            '/' => return self.lex_slash(),
            '#' => return self.lex_tag(),
            c if is_ident_start(c) => return self.lex_identifier(),
            c if c.is_ascii_digit() => return self.lex_number(),
            c => {
                self.cursor.advance();
                return Err(self.error(format!("unexpected character '{c}'")));
            }
        };

        Ok(self.make(kind))
    }

    pub(crate) fn make(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            Span::new(
                self.token_start,
                self.cursor.position(),
                self.token_start_line,
                self.token_start_column,
            ),
        )
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> CfsError {
        CfsError::lex(
            Position::new(self.token_start_line, self.token_start_column),
            message,
        )
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
