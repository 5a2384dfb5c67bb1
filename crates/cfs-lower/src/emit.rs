//! Pretty-printer for a fully-lowered expression.
//!
//! Precedence (low → high): `+ -` < `* /` < unary `-` < atoms (numbers,
//! tags, identifiers, calls — `^` no longer exists post-lowering, so it
//! does not appear in this ordering). A child is parenthesized iff its
//! precedence is strictly lower than its parent's, or — for subtraction
//! and division specifically — equal and on the right, where grouping
//! would otherwise change the value.

use cfs_par::{BinOp, Expr, UnOp};

const PREC_ADD_SUB: u8 = 1;
const PREC_MUL_DIV: u8 = 2;
const PREC_UNARY: u8 = 3;
const PREC_ATOM: u8 = 4;

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Number(..) | Expr::Tag(..) | Expr::Ident(..) | Expr::Call(..) => PREC_ATOM,
        Expr::Unary(_, UnOp::Neg, _) => PREC_UNARY,
        Expr::Binary(_, BinOp::Mul | BinOp::Div, ..) => PREC_MUL_DIV,
        Expr::Binary(_, BinOp::Add | BinOp::Sub, ..) => PREC_ADD_SUB,
        other => unreachable!("non-native node reached the emitter: {other:?}"),
    }
}

fn binop_symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        other => unreachable!("non-native operator reached the emitter: {other:?}"),
    }
}

/// Renders a fully-lowered expression as the final closed-form string.
/// Assumes its precondition: `expr` came out of [`crate::lower::lower`].
pub fn emit(expr: &Expr) -> String {
    match expr {
        Expr::Number(_, lexeme) => lexeme.clone(),
        Expr::Tag(_, lexeme) => lexeme.clone(),
        Expr::Ident(_, name) => name.to_string(),
        Expr::Call(_, callee, args) => {
            let rendered: Vec<String> = args.iter().map(emit).collect();
            format!("{callee}({})", rendered.join(", "))
        }
        Expr::Unary(_, UnOp::Neg, operand) => format!("-{}", emit_unary_operand(operand)),
        Expr::Binary(_, op, lhs, rhs) => {
            let parent_prec = precedence(expr);
            let lhs_str = emit_binary_operand(lhs, parent_prec, false, *op);
            let rhs_str = emit_binary_operand(rhs, parent_prec, true, *op);
            format!("{lhs_str} {} {rhs_str}", binop_symbol(*op))
        }
        other => unreachable!("non-native node reached the emitter: {other:?}"),
    }
}

/// Unary minus binds its operand at [`PREC_UNARY`]; a lower-precedence
/// operand needs parens, and so does a nested unary minus (to avoid the
/// confusing `--x`), even though that case is not strictly ambiguous.
fn emit_unary_operand(operand: &Expr) -> String {
    let needs_parens =
        precedence(operand) < PREC_UNARY || matches!(operand, Expr::Unary(_, UnOp::Neg, _));
    wrap(operand, needs_parens)
}

fn emit_binary_operand(child: &Expr, parent_prec: u8, is_right: bool, parent_op: BinOp) -> String {
    let child_prec = precedence(child);
    let needs_parens = if child_prec < parent_prec {
        true
    } else if child_prec == parent_prec && is_right {
        match (parent_op, child) {
            (BinOp::Sub, Expr::Binary(_, BinOp::Add | BinOp::Sub, ..)) => true,
            (BinOp::Div, Expr::Binary(_, BinOp::Mul | BinOp::Div, ..)) => true,
            _ => false,
        }
    } else {
        false
    };
    wrap(child, needs_parens)
}

fn wrap(expr: &Expr, needs_parens: bool) -> String {
    if needs_parens {
        format!("({})", emit(expr))
    } else {
        emit(expr)
    }
}
