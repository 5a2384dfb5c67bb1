//! Lexical scope stack used during inlining.
//!
//! Each function activation pushes one frame mapping parameter and
//! constant-binding names to already-resolved expressions. A lookup only
//! ever consults the current (innermost) frame, never a caller's — see
//! [`ScopeStack::lookup`]. Frames are popped when the inliner returns
//! from a call.

use std::collections::HashMap;

use cfs_par::Expr;
use cfs_util::Symbol;

#[derive(Default)]
pub struct ScopeStack {
    frames: Vec<HashMap<Symbol, Expr>>,
}

impl ScopeStack {
    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
    }

    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    pub fn bind(&mut self, name: Symbol, expr: Expr) {
        self.frames
            .last_mut()
            .expect("bind() called with no active frame")
            .insert(name, expr);
    }

    /// Looks up `name` in the current function activation's frame only.
    /// Frames never see their caller's bindings — each call resolves its
    /// body entirely in terms of its own parameters and constants, which
    /// is what makes the substitution capture-free.
    pub fn lookup(&self, name: Symbol) -> Option<&Expr> {
        self.frames.last().and_then(|frame| frame.get(&name))
    }
}
