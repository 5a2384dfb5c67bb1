//! The lowerer: rewrites every non-native node into the arithmetic
//! identity from the language reference, visiting bottom-up so that a
//! rewritten right-hand side is itself lowered.

use cfs_par::{BinOp, Expr, UnOp};
use cfs_util::CfsError;

use crate::identities::*;

/// Lowers a fully-resolved expression into one containing only numeric
/// literals, `pi`/`e`, tags, host-primitive calls, and `+ - * /` (plus
/// unary minus). Fails only on an unresolved node — an internal
/// invariant violation, never a user-facing error.
pub fn lower(expr: &Expr) -> Result<Expr, CfsError> {
    match expr {
        Expr::Number(..) | Expr::Tag(..) => Ok(expr.clone()),

        Expr::Ident(_, name) => {
            if cfs_util::reserved::is_host_constant(name.as_str()) {
                Ok(expr.clone())
            } else {
                Err(CfsError::internal(format!(
                    "lowerer received unresolved identifier '{name}'"
                )))
            }
        }

        Expr::Call(span, callee, args) => {
            if !cfs_util::reserved::is_host_function(callee.as_str()) {
                return Err(CfsError::internal(format!(
                    "lowerer received a call to non-host function '{callee}'"
                )));
            }
            let lowered_args = args.iter().map(lower).collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Call(*span, *callee, lowered_args))
        }

        Expr::Unary(span, UnOp::Neg, operand) => {
            Ok(Expr::Unary(*span, UnOp::Neg, Box::new(lower(operand)?)))
        }
        Expr::Unary(_, UnOp::Not, operand) => {
            // `!x`, `not x` -> `1 - x`
            Ok(sub(num("1"), lower(operand)?))
        }

        Expr::Binary(span, op, lhs, rhs) => lower_binary(*span, *op, lhs, rhs),

        Expr::If2(_, cond, then) => {
            // `if(b ? t)` -> `b * t`
            Ok(mul(lower(cond)?, lower(then)?))
        }
        Expr::If3(_, cond, then, els) => {
            // `if(b ? t : f)` -> `b * (t - f) + f`
            let (c, t, f) = (lower(cond)?, lower(then)?, lower(els)?);
            Ok(add(mul(c, sub(t, f.clone())), f))
        }
    }
}

fn lower_binary(
    span: cfs_util::Span,
    op: BinOp,
    lhs: &Expr,
    rhs: &Expr,
) -> Result<Expr, CfsError> {
    let l = lower(lhs)?;
    let r = lower(rhs)?;

    Ok(match op {
        // Already native: kept as-is.
        BinOp::Add => Expr::Binary(span, BinOp::Add, Box::new(l), Box::new(r)),
        BinOp::Sub => Expr::Binary(span, BinOp::Sub, Box::new(l), Box::new(r)),
        BinOp::Mul => Expr::Binary(span, BinOp::Mul, Box::new(l), Box::new(r)),
        BinOp::Div => Expr::Binary(span, BinOp::Div, Box::new(l), Box::new(r)),

        // `x % y` -> `x - y * floor(x / y)`
        BinOp::Mod => sub(l.clone(), mul(r.clone(), call1("floor", div(l, r)))),

        // `x ^ y` -> `exp(log(x) * y)`
        BinOp::Pow => call1("exp", mul(call1("log", l), r)),

        // `x && y`, `x and y` -> `x * y`
        BinOp::And => mul(l, r),
        // `x || y`, `x or y` -> `1 - (1 - x) * (1 - y)`
        BinOp::Or => sub(num("1"), mul(sub(num("1"), l), sub(num("1"), r))),

        // Integer comparisons, via `sign`/`signn` of `x - y`.
        BinOp::Lt => div(sub(num("1"), sign(sub(l, r))), num("2")),
        BinOp::Le => div(sub(num("1"), signn(sub(l, r))), num("2")),
        BinOp::Gt => div(add(num("1"), signn(sub(l, r))), num("2")),
        BinOp::Ge => div(add(num("1"), sign(sub(l, r))), num("2")),
        BinOp::Eq => {
            let diff = sub(l, r);
            mul(
                div(add(num("1"), sign(diff.clone())), num("2")),
                div(sub(num("1"), signn(diff)), num("2")),
            )
        }
        BinOp::Ne => {
            let diff = sub(l, r);
            div(
                sub(
                    num("4"),
                    mul(add(num("1"), sign(diff.clone())), sub(num("1"), signn(diff))),
                ),
                num("4"),
            )
        }

        // Float comparisons, via `signf` of `x - y`.
        BinOp::FLt => div(sub(num("1"), signf(sub(l, r))), num("2")),
        BinOp::FGt => div(add(num("1"), signf(sub(l, r))), num("2")),
    })
}
