//! cfs-lex — Lexical analyzer for Closed-Form Script.
//!
//! Turns normalized source text into a finite [`Token`] stream: a
//! `Cursor` tracks byte position plus 1-based line/column, and a `Lexer`
//! dispatches per-character into small category-specific helpers
//! (numbers, identifiers/keywords, operators, comments, and host-engine
//! tags).

pub mod cursor;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Keyword, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    /// The concatenation of lexemes, together with the original
    /// interstitial whitespace and comments, reproduces the input text
    /// exactly. Since every token's span is a real byte range into the
    /// source, and everything between two tokens' spans is by
    /// definition the interstitial text, this holds as long as spans are
    /// tracked faithfully — this test pins that down.
    fn assert_round_trips(source: &str) {
        let tokens = Lexer::tokenize(source).unwrap();
        let mut rebuilt = String::new();
        let mut cursor = 0usize;
        for token in &tokens {
            rebuilt.push_str(&source[cursor..token.span.start]);
            rebuilt.push_str(&source[token.span.start..token.span.end]);
            cursor = token.span.end;
        }
        rebuilt.push_str(&source[cursor..]);
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn round_trip_simple_program() {
        assert_round_trips("main() return 1 + 2 * 3");
    }

    #[test]
    fn round_trip_with_comments_and_blank_lines() {
        assert_round_trips(
            "// a comment\nf(x) return x * x /* inline */\n\nmain() return f(3 + 1)\n",
        );
    }

    #[test]
    fn round_trip_with_tag_and_operators() {
        assert_round_trips("main() return if(#HOUR# >= 12 ? 1 : 0)");
    }

    #[test]
    fn full_program_token_kinds() {
        use crate::token::{Keyword, TokenKind};
        let tokens = Lexer::tokenize("f(x) return x").unwrap();
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident(cfs_util::Symbol::intern("f")),
                TokenKind::LParen,
                TokenKind::Ident(cfs_util::Symbol::intern("x")),
                TokenKind::RParen,
                TokenKind::Keyword(Keyword::Return),
                TokenKind::Ident(cfs_util::Symbol::intern("x")),
                TokenKind::Eof,
            ]
        );
    }
}
