//! cfs-par — Recursive-descent parser for Closed-Form Script.
//!
//! Consumes the token stream produced by `cfs-lex` and builds the AST
//! defined in [`ast`]: a precedence-climbing expression parser plus
//! hand-written statement/item parsing. Parsing is fail-fast — the first
//! grammar violation is the only one reported.

pub mod ast;
mod parser;

pub use ast::{BinOp, Binding, Expr, FunctionDef, Program, UnOp};
pub use parser::Parser;

use cfs_util::CfsError;

/// Lexes and parses a complete source string into a [`Program`].
pub fn parse(source: &str) -> Result<Program, CfsError> {
    let tokens = cfs_lex::Lexer::tokenize(source)?;
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfs_util::Symbol;

    #[test]
    fn parses_minimal_main() {
        let program = parse("main() return 1 + 2 * 3").unwrap();
        assert_eq!(program.len(), 1);
        assert_eq!(program[0].name, Symbol::intern("main"));
        assert!(program[0].params.is_empty());
        assert!(program[0].bindings.is_empty());
    }

    #[test]
    fn optional_keyword_forms_are_equivalent() {
        let plain = parse("main() return 1").unwrap();
        let function_kw = parse("function main() return 1").unwrap();
        let def_kw = parse("def main() return 1").unwrap();
        let double_kw = parse("double main() return 1").unwrap();
        assert_eq!(plain[0].ret, function_kw[0].ret);
        assert_eq!(plain[0].ret, def_kw[0].ret);
        assert_eq!(plain[0].ret, double_kw[0].ret);
    }

    #[test]
    fn multiple_functions_and_call() {
        let program = parse("f(x) return x * x\nmain() return f(3 + 1)").unwrap();
        assert_eq!(program.len(), 2);
        assert_eq!(program[0].name, Symbol::intern("f"));
        assert_eq!(program[0].params, vec![Symbol::intern("x")]);
        match &program[1].ret {
            Expr::Call(_, callee, args) => {
                assert_eq!(*callee, Symbol::intern("f"));
                assert_eq!(args.len(), 1);
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn const_bindings_in_declaration_order() {
        let program = parse("main() a = 2\nb = a + 1\nreturn a * b").unwrap();
        let f = &program[0];
        assert_eq!(f.bindings.len(), 2);
        assert_eq!(f.bindings[0].name, Symbol::intern("a"));
        assert_eq!(f.bindings[1].name, Symbol::intern("b"));
    }

    #[test]
    fn ternary_and_binary_conditional_both_spellings() {
        let qcolon = parse("main() return if(1 ? 5 : 7)").unwrap();
        let commas = parse("main() return if(1, 5, 7)").unwrap();
        assert_eq!(qcolon[0].ret, commas[0].ret);
        assert!(matches!(qcolon[0].ret, Expr::If3(..)));

        let binary = parse("main() return if(1 ? 5)").unwrap();
        assert!(matches!(binary[0].ret, Expr::If2(..)));
    }

    #[test]
    fn precedence_multiplication_over_addition() {
        let program = parse("main() return 1 + 2 * 3").unwrap();
        match &program[0].ret {
            Expr::Binary(_, BinOp::Add, lhs, rhs) => {
                assert!(matches!(**lhs, Expr::Number(_, _)));
                assert!(matches!(**rhs, Expr::Binary(_, BinOp::Mul, _, _)));
            }
            other => panic!("expected addition at the top, got {other:?}"),
        }
    }

    #[test]
    fn caret_is_left_associative() {
        // 2 ^ 3 ^ 2 should parse as (2 ^ 3) ^ 2: sequential `^` is
        // left-associative.
        let program = parse("main() return 2 ^ 3 ^ 2").unwrap();
        match &program[0].ret {
            Expr::Binary(_, BinOp::Pow, lhs, _) => {
                assert!(matches!(**lhs, Expr::Binary(_, BinOp::Pow, _, _)));
            }
            other => panic!("expected outer '^' to be left-associative, got {other:?}"),
        }
    }

    #[test]
    fn unary_binds_tighter_than_caret() {
        // Unary sits above `^` in the precedence list.
        let program = parse("main() return -2 ^ 2").unwrap();
        match &program[0].ret {
            Expr::Binary(_, BinOp::Pow, lhs, _) => {
                assert!(matches!(**lhs, Expr::Unary(_, UnOp::Neg, _)));
            }
            other => panic!("expected unary minus under '^', got {other:?}"),
        }
    }

    #[test]
    fn word_and_symbol_operators_are_interchangeable() {
        let symbolic = parse("main() return 1 && 0 || 1").unwrap();
        let worded = parse("main() return 1 and 0 or 1").unwrap();
        assert_eq!(symbolic[0].ret, worded[0].ret);
    }

    #[test]
    fn duplicate_parameter_name_errors() {
        assert!(parse("f(x, x) return x\nmain() return f(1, 2)").is_err());
    }

    #[test]
    fn constant_shadowing_parameter_errors() {
        assert!(parse("f(x) x = 1\nreturn x\nmain() return f(1)").is_err());
    }

    #[test]
    fn constant_rebound_in_same_function_errors() {
        assert!(parse("main() a = 1\na = 2\nreturn a").is_err());
    }

    #[test]
    fn missing_return_errors() {
        assert!(parse("main() a = 1").is_err());
    }

    #[test]
    fn unmatched_parenthesis_errors() {
        assert!(parse("main() return (1 + 2").is_err());
    }

    #[test]
    fn tag_is_an_opaque_atom() {
        let program = parse("main() return if(#HOUR# >= 12 ? 1 : 0)").unwrap();
        match &program[0].ret {
            Expr::If3(_, cond, _, _) => match cond.as_ref() {
                Expr::Binary(_, BinOp::Ge, lhs, _) => {
                    assert!(matches!(**lhs, Expr::Tag(_, _)));
                }
                other => panic!("expected comparison, got {other:?}"),
            },
            other => panic!("expected if3, got {other:?}"),
        }
    }
}
