//! The inliner / resolver: walks the AST starting at `main`, substituting
//! constant bindings and inlining every user-defined call by capture-free
//! parameter substitution, until no user call or free identifier remains.

use cfs_par::{BinOp, Expr};
use cfs_util::{reserved, CfsError, Span, Symbol};

use crate::program::ProgramTable;
use crate::scope::ScopeStack;

pub struct Resolver<'a> {
    table: &'a ProgramTable,
    expansion_stack: Vec<Symbol>,
    scopes: ScopeStack,
}

/// Resolves a whole program down to a single expression with no user
/// calls and no free identifiers other than `pi`/`e`.
pub fn resolve_program(table: &ProgramTable) -> Result<Expr, CfsError> {
    let main = table.main();
    let mut resolver = Resolver {
        table,
        expansion_stack: Vec::new(),
        scopes: ScopeStack::default(),
    };
    resolver.resolve_call(main.name_span, main.name, Vec::new())
}

impl<'a> Resolver<'a> {
    fn resolve_expr(&mut self, expr: &Expr) -> Result<Expr, CfsError> {
        match expr {
            Expr::Number(..) | Expr::Tag(..) => Ok(expr.clone()),

            Expr::Ident(span, name) => self.resolve_ident(*span, *name),

            Expr::Call(span, callee, args) => {
                let resolved_args = args
                    .iter()
                    .map(|a| self.resolve_expr(a))
                    .collect::<Result<Vec<_>, _>>()?;
                if reserved::is_host_function(callee.as_str()) {
                    Ok(Expr::Call(*span, *callee, resolved_args))
                } else {
                    self.resolve_call(*span, *callee, resolved_args)
                }
            }

            Expr::Unary(span, op, operand) => {
                let operand = self.resolve_expr(operand)?;
                Ok(Expr::Unary(*span, *op, Box::new(operand)))
            }

            Expr::Binary(span, op, lhs, rhs) => {
                let lhs = self.resolve_expr(lhs)?;
                let rhs = self.resolve_expr(rhs)?;
                Ok(Expr::Binary(*span, *op, Box::new(lhs), Box::new(rhs)))
            }

            Expr::If2(span, cond, then) => {
                let cond = self.resolve_expr(cond)?;
                let then = self.resolve_expr(then)?;
                Ok(Expr::If2(*span, Box::new(cond), Box::new(then)))
            }

            Expr::If3(span, cond, then, els) => {
                let cond = self.resolve_expr(cond)?;
                let then = self.resolve_expr(then)?;
                let els = self.resolve_expr(els)?;
                Ok(Expr::If3(*span, Box::new(cond), Box::new(then), Box::new(els)))
            }
        }
    }

    fn resolve_ident(&mut self, span: Span, name: Symbol) -> Result<Expr, CfsError> {
        if let Some(bound) = self.scopes.lookup(name) {
            return Ok(bound.clone());
        }
        if let Some(func) = self.table.get(name) {
            if func.params.is_empty() {
                return self.resolve_call(span, name, Vec::new());
            }
            return Err(CfsError::resolve(
                span.position(),
                format!(
                    "'{name}' takes {} argument(s) but is referenced without a call",
                    func.params.len()
                ),
            ));
        }
        if reserved::is_host_constant(name.as_str()) {
            return Ok(Expr::Ident(span, name));
        }
        Err(CfsError::resolve(
            span.position(),
            format!("reference to unknown identifier '{name}'"),
        ))
    }

    fn resolve_call(
        &mut self,
        span: Span,
        callee: Symbol,
        args: Vec<Expr>,
    ) -> Result<Expr, CfsError> {
        let func = self.table.get(callee).ok_or_else(|| {
            CfsError::resolve(span.position(), format!("call to unknown function '{callee}'"))
        })?;

        if args.len() != func.params.len() {
            return Err(CfsError::resolve(
                span.position(),
                format!(
                    "'{callee}' expects {} argument(s), found {}",
                    func.params.len(),
                    args.len()
                ),
            ));
        }

        if self.expansion_stack.contains(&callee) {
            return Err(CfsError::resolve(
                span.position(),
                format!("infinite recursion through '{callee}'"),
            ));
        }

        let params = func.params.clone();
        let bindings = func.bindings.clone();
        let ret = func.ret.clone();

        self.expansion_stack.push(callee);
        self.scopes.push_frame();
        for (param, arg) in params.into_iter().zip(args) {
            self.scopes.bind(param, arg);
        }

        let result = (|| {
            for binding in &bindings {
                let resolved = self.resolve_expr(&binding.expr)?;
                self.scopes.bind(binding.name, resolved);
            }
            self.resolve_expr(&ret)
        })();

        self.scopes.pop_frame();
        self.expansion_stack.pop();

        result
    }
}

/// True once every call node targets a host primitive and every
/// identifier is `pi`/`e`.
pub fn is_fully_resolved(expr: &Expr) -> bool {
    match expr {
        Expr::Number(..) | Expr::Tag(..) => true,
        Expr::Ident(_, name) => reserved::is_host_constant(name.as_str()),
        Expr::Call(_, callee, args) => {
            reserved::is_host_function(callee.as_str()) && args.iter().all(is_fully_resolved)
        }
        Expr::Unary(_, _, operand) => is_fully_resolved(operand),
        Expr::Binary(_, _, lhs, rhs) => is_fully_resolved(lhs) && is_fully_resolved(rhs),
        Expr::If2(_, cond, then) => is_fully_resolved(cond) && is_fully_resolved(then),
        Expr::If3(_, cond, then, els) => {
            is_fully_resolved(cond) && is_fully_resolved(then) && is_fully_resolved(els)
        }
    }
}
