//! String interning for identifier names.
//!
//! CFS source text repeats function and parameter names constantly
//! (every call site, every reference inside a body); interning them once
//! into a compact, `Copy` [`Symbol`] makes every later equality check and
//! hash-map lookup O(1) instead of O(string length). There is no
//! compile-time keyword table to pre-seed, since the reserved words
//! (`function`, `if`, `and`, ...) are lexed into dedicated `Keyword`
//! token variants rather than kept as interned identifiers.

use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;
use once_cell::sync::Lazy;

/// A compact, `Copy` handle to an interned identifier string.
///
/// # Example
///
/// ```
/// use cfs_util::Symbol;
///
/// let a = Symbol::intern("total");
/// let b = Symbol::intern("total");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "total");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `s`, returning the same [`Symbol`] for every call with an
    /// equal string.
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_util::Symbol;
    ///
    /// let x = Symbol::intern("x");
    /// let y = Symbol::intern("y");
    /// assert_ne!(x, y);
    /// assert_eq!(x, Symbol::intern("x"));
    /// ```
    pub fn intern(s: &str) -> Self {
        INTERNER.intern(s)
    }

    /// Resolves this symbol back to the string it was interned from.
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_util::Symbol;
    ///
    /// let sym = Symbol::intern("main");
    /// assert_eq!(sym.as_str(), "main");
    /// ```
    pub fn as_str(&self) -> &'static str {
        INTERNER.resolve(*self)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::intern(s)
    }
}

static INTERNER: Lazy<Interner> = Lazy::new(Interner::new);

/// Forward (string to id) and reverse (id to string) maps, both `DashMap`
/// so interning from multiple lexer/resolver threads never blocks on a
/// single lock. Strings are interned for the process lifetime: CFS
/// compiles one small source file per invocation, so the leak never
/// accumulates meaningfully.
struct Interner {
    forward: DashMap<&'static str, u32>,
    reverse: DashMap<u32, &'static str>,
    next: AtomicU32,
}

impl Interner {
    fn new() -> Self {
        Self {
            forward: DashMap::with_capacity(64),
            reverse: DashMap::with_capacity(64),
            next: AtomicU32::new(0),
        }
    }

    fn intern(&self, s: &str) -> Symbol {
        if let Some(idx) = self.forward.get(s) {
            return Symbol(*idx);
        }
        let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
        match self.forward.entry(leaked) {
            dashmap::mapref::entry::Entry::Occupied(entry) => Symbol(*entry.get()),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let idx = self.next.fetch_add(1, Ordering::Relaxed);
                entry.insert(idx);
                self.reverse.insert(idx, leaked);
                Symbol(idx)
            }
        }
    }

    fn resolve(&self, symbol: Symbol) -> &'static str {
        *self
            .reverse
            .get(&symbol.0)
            .expect("symbol was never interned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_interns_to_same_symbol() {
        assert_eq!(Symbol::intern("main"), Symbol::intern("main"));
    }

    #[test]
    fn different_strings_intern_differently() {
        assert_ne!(Symbol::intern("f"), Symbol::intern("g"));
    }

    #[test]
    fn round_trips_through_as_str() {
        let name = format!("param_{}", std::process::id());
        let sym = Symbol::intern(&name);
        assert_eq!(sym.as_str(), name);
    }
}
