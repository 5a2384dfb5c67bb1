//! Token kinds produced by the lexer.

use cfs_util::{Span, Symbol};

/// A reserved word that is emitted as its own token kind rather than as
/// a plain identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Function,
    Def,
    Double,
    Return,
    If,
    Not,
    And,
    Or,
}

pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    let kw = match text {
        "function" => Keyword::Function,
        "def" => Keyword::Def,
        "double" => Keyword::Double,
        "return" => Keyword::Return,
        "if" => Keyword::If,
        "not" => Keyword::Not,
        "and" => Keyword::And,
        "or" => Keyword::Or,
        _ => return None,
    };
    Some(TokenKind::Keyword(kw))
}

/// The kind of a lexed token, independent of its source position.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Ident(Symbol),
    /// Verbatim numeric lexeme, stashed as text so the parser (and
    /// ultimately the emitter) can reproduce it exactly as written.
    Number(String),
    /// Full `#...#` lexeme, including both delimiters.
    Tag(String),
    Keyword(Keyword),

    LParen,
    RParen,
    Comma,
    Semicolon,

    Eq,
    EqEq,
    NotEq,
    LtGt,
    Lt,
    LtEq,
    Gt,
    GtEq,
    LtColon,
    GtColon,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,

    Question,
    Colon,
    Bang,
    AndAnd,
    OrOr,

    Newline,
    Eof,
}

/// A token together with the position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
