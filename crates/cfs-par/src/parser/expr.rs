//! Expression parsing: precedence-climbing (Pratt) binary/unary operators,
//! plus the conditional and primary forms.
//!
//! The binding-power table below encodes the full precedence list
//! (low → high): if-conditional; `||`/`or`; `&&`/`and`; `==` `=` `!=` `<>`;
//! `<=` `>=` `<:` `>:` `<` `>`; `+` `-`; `*` `/` `%`; `^`
//! (left-associative); unary `-` `!` `not`; primary.

use cfs_lex::{Keyword, TokenKind};
use cfs_util::{CfsError, Span, Symbol};

use crate::ast::{BinOp, Expr, UnOp};
use crate::parser::core::{describe, Parser};

/// Binding power of each left-associative binary operator, as
/// `(left_bp, right_bp)` with `right_bp = left_bp + 1` so that a chain of
/// same-precedence operators parses left-associatively. Higher numbers
/// bind tighter.
fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8, BinOp)> {
    use TokenKind::*;
    Some(match kind {
        OrOr | Keyword(Keyword::Or) => (4, 5, BinOp::Or),
        AndAnd | Keyword(Keyword::And) => (6, 7, BinOp::And),
        EqEq | Eq => (8, 9, BinOp::Eq),
        NotEq | LtGt => (8, 9, BinOp::Ne),
        LtEq => (10, 11, BinOp::Le),
        GtEq => (10, 11, BinOp::Ge),
        LtColon => (10, 11, BinOp::FLt),
        GtColon => (10, 11, BinOp::FGt),
        Lt => (10, 11, BinOp::Lt),
        Gt => (10, 11, BinOp::Gt),
        Plus => (12, 13, BinOp::Add),
        Minus => (12, 13, BinOp::Sub),
        Star => (14, 15, BinOp::Mul),
        Slash => (14, 15, BinOp::Div),
        Percent => (14, 15, BinOp::Mod),
        Caret => (16, 17, BinOp::Pow),
        _ => return None,
    })
}

/// Binding power unary prefix operators parse their operand with — tighter
/// than every binary operator including `^`.
const UNARY_BP: u8 = 18;

impl Parser {
    pub fn parse_expr(&mut self) -> Result<Expr, CfsError> {
        self.parse_expr_bp(0)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr, CfsError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let Some((lbp, rbp, op)) = infix_binding_power(self.current()) else {
                break;
            };
            if lbp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.parse_expr_bp(rbp)?;
            let span = lhs.span().to(rhs.span());
            lhs = Expr::Binary(span, op, Box::new(lhs), Box::new(rhs));
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expr, CfsError> {
        let start = self.current_token().span;
        match self.current().clone() {
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_expr_bp(UNARY_BP)?;
                let span = start.to(operand.span());
                Ok(Expr::Unary(span, UnOp::Neg, Box::new(operand)))
            }
            TokenKind::Bang | TokenKind::Keyword(Keyword::Not) => {
                self.advance();
                let operand = self.parse_expr_bp(UNARY_BP)?;
                let span = start.to(operand.span());
                Ok(Expr::Unary(span, UnOp::Not, Box::new(operand)))
            }
            TokenKind::Number(lexeme) => {
                self.advance();
                Ok(Expr::Number(start, lexeme))
            }
            TokenKind::Tag(lexeme) => {
                self.advance();
                Ok(Expr::Tag(start, lexeme))
            }
            TokenKind::Ident(sym) => self.parse_ident_or_call(sym, start),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr_bp(0)?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::Keyword(Keyword::If) => self.parse_conditional(start),
            other => Err(self.error(format!("expected expression, found {}", describe(&other)))),
        }
    }

    fn parse_ident_or_call(&mut self, sym: Symbol, start: Span) -> Result<Expr, CfsError> {
        self.advance();
        if !self.check(&TokenKind::LParen) {
            return Ok(Expr::Ident(start, sym));
        }
        self.advance();
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr_bp(0)?);
                if self.match_token(&TokenKind::Comma) {
                    continue;
                }
                break;
            }
        }
        let end = self.expect(TokenKind::RParen, "')'")?;
        Ok(Expr::Call(start.to(end.span), sym, args))
    }

    /// `if ( cond ? then : else )` / `if ( cond ? then )`, with `?`/`:`
    /// interchangeable with `,`/`,`.
    fn parse_conditional(&mut self, start: Span) -> Result<Expr, CfsError> {
        self.advance(); // `if`
        self.expect(TokenKind::LParen, "'(' after 'if'")?;
        let cond = self.parse_expr_bp(0)?;

        if !self.match_token(&TokenKind::Question) && !self.match_token(&TokenKind::Comma) {
            return Err(self.error(format!(
                "expected '?' or ',' after if-condition, found {}",
                describe(self.current())
            )));
        }

        let then_branch = self.parse_expr_bp(0)?;

        if self.match_token(&TokenKind::Colon) || self.match_token(&TokenKind::Comma) {
            let else_branch = self.parse_expr_bp(0)?;
            let end = self.expect(TokenKind::RParen, "')'")?;
            return Ok(Expr::If3(
                start.to(end.span),
                Box::new(cond),
                Box::new(then_branch),
                Box::new(else_branch),
            ));
        }

        let end = self.expect(TokenKind::RParen, "')'")?;
        Ok(Expr::If2(start.to(end.span), Box::new(cond), Box::new(then_branch)))
    }
}
