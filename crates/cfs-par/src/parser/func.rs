//! Function-definition and program-level parsing.
//!
//! Implements the grammar's tolerant surface forms: the leading
//! `function`/`def`/`double` keyword is optional, parameters may be
//! separated by commas or left adjacent, and statement separators
//! (`NL`/`;`) may repeat or be omitted around a single statement.

use std::collections::HashSet;

use cfs_lex::{Keyword, TokenKind};
use cfs_util::{CfsError, Symbol};

use crate::ast::{Binding, Expr, FunctionDef, Program};
use crate::parser::core::{describe, Parser};

impl Parser {
    pub fn parse_program(&mut self) -> Result<Program, CfsError> {
        let mut functions = Vec::new();
        self.skip_separators();
        while !self.is_at_end() {
            functions.push(self.parse_function_def()?);
            self.skip_separators();
        }
        Ok(functions)
    }

    fn parse_function_def(&mut self) -> Result<FunctionDef, CfsError> {
        let start = self.current_token().span;

        // Optional leading keyword: `function`, `def`, `double`, or omitted.
        matches!(
            self.current(),
            TokenKind::Keyword(Keyword::Function)
                | TokenKind::Keyword(Keyword::Def)
                | TokenKind::Keyword(Keyword::Double)
        )
        .then(|| self.advance());

        let name_tok = self.expect_ident("function name")?;
        let (name, name_span) = match name_tok.kind {
            TokenKind::Ident(s) => (s, name_tok.span),
            _ => unreachable!("expect_ident guarantees Ident"),
        };

        self.expect(TokenKind::LParen, "'(' after function name")?;
        let params = self.parse_params()?;
        self.expect(TokenKind::RParen, "')' after parameter list")?;
        check_distinct_params(&params, self, name_span)?;

        let (bindings, ret) = self.parse_body()?;
        check_no_shadowing_or_rebinding(&params, &bindings, self)?;
        let span = start.to(ret.span());

        Ok(FunctionDef {
            name,
            name_span,
            params,
            bindings,
            ret,
            span,
        })
    }

    fn parse_params(&mut self) -> Result<Vec<Symbol>, CfsError> {
        let mut params = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            let tok = self.expect_ident("parameter name")?;
            match tok.kind {
                TokenKind::Ident(s) => params.push(s),
                _ => unreachable!("expect_ident guarantees Ident"),
            }
            // Commas or bare whitespace both separate parameters; since
            // whitespace produces no token, an absent comma just means
            // the next identifier starts immediately.
            self.match_token(&TokenKind::Comma);
            if self.check(&TokenKind::RParen) {
                break;
            }
        }
        Ok(params)
    }

    /// Parses the ordered constant bindings followed by the mandatory
    /// `return` expression.
    fn parse_body(&mut self) -> Result<(Vec<Binding>, Expr), CfsError> {
        let mut bindings = Vec::new();
        loop {
            self.skip_separators();

            if self.match_token(&TokenKind::Keyword(Keyword::Return)) {
                let ret = self.parse_expr()?;
                return Ok((bindings, ret));
            }

            match self.current().clone() {
                TokenKind::Ident(name) => {
                    let name_span = self.current_token().span;
                    self.advance();
                    self.expect(TokenKind::Eq, "'=' in constant binding")?;
                    let expr = self.parse_expr()?;
                    bindings.push(Binding {
                        name,
                        name_span,
                        expr,
                    });
                }
                TokenKind::Eof => return Err(self.error("missing return statement")),
                other => {
                    return Err(self.error(format!(
                        "expected a binding or 'return', found {}",
                        describe(&other)
                    )))
                }
            }
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<cfs_lex::Token, CfsError> {
        if matches!(self.current(), TokenKind::Ident(_)) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("expected {what}, found {}", describe(self.current()))))
        }
    }
}

fn check_distinct_params(
    params: &[Symbol],
    parser: &Parser,
    name_span: cfs_util::Span,
) -> Result<(), CfsError> {
    let mut seen = HashSet::new();
    for p in params {
        if !seen.insert(*p) {
            return Err(parser.error_at(
                name_span.position(),
                format!("duplicate parameter name '{p}'"),
            ));
        }
    }
    Ok(())
}

/// Constant names must not shadow parameters, and a constant name must
/// not be re-bound within the same function.
fn check_no_shadowing_or_rebinding(
    params: &[Symbol],
    bindings: &[Binding],
    parser: &Parser,
) -> Result<(), CfsError> {
    let params: HashSet<Symbol> = params.iter().copied().collect();
    let mut bound = HashSet::new();
    for binding in bindings {
        if params.contains(&binding.name) {
            return Err(parser.error_at(
                binding.name_span.position(),
                format!("constant '{}' shadows a parameter of the same name", binding.name),
            ));
        }
        if !bound.insert(binding.name) {
            return Err(parser.error_at(
                binding.name_span.position(),
                format!("constant '{}' is bound more than once", binding.name),
            ));
        }
    }
    Ok(())
}
