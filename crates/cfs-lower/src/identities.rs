//! Expression builders for the arithmetic identities used during lowering.
//!
//! Each function builds a small `Expr` tree out of already-lowered
//! operands, using only numeric literals, the reserved host primitives,
//! and the four native arithmetic operators. Nodes built here carry
//! [`Span::DUMMY`] since they have no counterpart in the original source.

use cfs_par::{BinOp, Expr, UnOp};
use cfs_util::{Span, Symbol};

pub fn num(lexeme: &str) -> Expr {
    Expr::Number(Span::DUMMY, lexeme.to_string())
}

pub fn ident(name: &str) -> Expr {
    Expr::Ident(Span::DUMMY, Symbol::intern(name))
}

pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::Binary(Span::DUMMY, BinOp::Add, Box::new(a), Box::new(b))
}

pub fn sub(a: Expr, b: Expr) -> Expr {
    Expr::Binary(Span::DUMMY, BinOp::Sub, Box::new(a), Box::new(b))
}

pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Binary(Span::DUMMY, BinOp::Mul, Box::new(a), Box::new(b))
}

pub fn div(a: Expr, b: Expr) -> Expr {
    Expr::Binary(Span::DUMMY, BinOp::Div, Box::new(a), Box::new(b))
}

pub fn neg(a: Expr) -> Expr {
    Expr::Unary(Span::DUMMY, UnOp::Neg, Box::new(a))
}

pub fn call1(name: &str, a: Expr) -> Expr {
    Expr::Call(Span::DUMMY, Symbol::intern(name), vec![a])
}

/// `signf(x) = abs(x) / x`
pub fn signf(x: Expr) -> Expr {
    div(call1("abs", x.clone()), x)
}

/// `sign(i) = signf(i + 0.5)`
pub fn sign(i: Expr) -> Expr {
    signf(add(i, num("0.5")))
}

/// `signn(i) = signf(i - 0.5)`
pub fn signn(i: Expr) -> Expr {
    signf(sub(i, num("0.5")))
}

/// `int(x) = floor(x) + (1 - sign(floor(x))) / 2`
pub fn int_(x: Expr) -> Expr {
    let floor_x = call1("floor", x);
    add(
        floor_x.clone(),
        div(sub(num("1"), sign(floor_x)), num("2")),
    )
}

/// `sind(θ) = sin(rad(θ))`
pub fn sind(theta: Expr) -> Expr {
    call1("sin", call1("rad", theta))
}

/// `cosd(θ) = cos(rad(θ))`
pub fn cosd(theta: Expr) -> Expr {
    call1("cos", call1("rad", theta))
}

/// `tand(θ) = tan(rad(θ))`
pub fn tand(theta: Expr) -> Expr {
    call1("tan", call1("rad", theta))
}

/// `asind(x) = deg(asin(x))`
pub fn asind(x: Expr) -> Expr {
    call1("deg", call1("asin", x))
}

/// `acosd(x) = deg(acos(x))`
pub fn acosd(x: Expr) -> Expr {
    call1("deg", call1("acos", x))
}

/// `atand(x) = deg(atan(x))`
pub fn atand(x: Expr) -> Expr {
    call1("deg", call1("atan", x))
}

/// `atan2(y, x) = atan(y / x) + (x <: 0) * signf(y) * pi`, with the
/// float-less-than rewritten inline as `(1 - signf(x - 0)) / 2`.
pub fn atan2(y: Expr, x: Expr) -> Expr {
    let x_lt_zero = div(sub(num("1"), signf(sub(x.clone(), num("0")))), num("2"));
    add(
        call1("atan", div(y.clone(), x)),
        mul(mul(x_lt_zero, signf(y)), ident("pi")),
    )
}

/// `atan2d(y, x) = deg(atan2(y, x))`
pub fn atan2d(y: Expr, x: Expr) -> Expr {
    call1("deg", atan2(y, x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::emit;

    #[test]
    fn sign_expands_to_abs_over_shifted_value() {
        assert_eq!(emit(&sign(ident("x"))), "abs(x + 0.5) / (x + 0.5)");
    }

    #[test]
    fn int_uses_floor_and_sign() {
        assert_eq!(
            emit(&int_(ident("x"))),
            "floor(x) + (1 - abs(floor(x) + 0.5) / (floor(x) + 0.5)) / 2"
        );
    }

    #[test]
    fn sind_wraps_rad_in_sin() {
        assert_eq!(emit(&sind(ident("theta"))), "sin(rad(theta))");
    }

    #[test]
    fn asind_wraps_asin_in_deg() {
        assert_eq!(emit(&asind(ident("x"))), "deg(asin(x))");
    }

    #[test]
    fn atan2d_wraps_atan2_in_deg() {
        let expanded = emit(&atan2d(ident("y"), ident("x")));
        assert!(expanded.starts_with("deg(atan("));
    }
}
