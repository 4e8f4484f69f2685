//! Static scope resolution for Tern.
//!
//! A single pass over the tree, run once before evaluation. It reports
//! misplaced or ill-formed bindings and writes a resolution depth into every
//! identifier it can place: the number of scope frames to walk outward from
//! the active frame at run time. Closures therefore see the binding that was
//! in scope where they were written, whatever is shadowed later.
//!
//! The scope stack mirrors the frames the evaluator builds:
//! - a block pushes one frame
//! - a function literal pushes one frame holding its parameters and body
//! - an `each`/`while` loop pushes a per-iteration frame (holding the loop
//!   binding) and its body block a further frame
//!
//! The global frame is not on the stack. Identifiers that resolve nowhere
//! keep no depth and are looked up among globals, then builtins, at run
//! time.

mod error;

pub use error::{ResolveError, ResolveErrorKind};

use rustc_hash::FxHashMap;
use tern_ir::{Block, Expr, ExprKind, FunctionLit, Ident, LoopSource, Name, Program, Span, Stmt, StmtKind};
use tern_stack::ensure_sufficient_stack;

/// State of a name within one scope.
#[derive(Clone, Copy, Debug)]
struct Binding {
    /// False between `let` and the end of its initializer.
    defined: bool,
    span: Span,
}

type Scope = FxHashMap<Name, Binding>;

#[derive(Default)]
pub struct Resolver {
    scopes: Vec<Scope>,
    /// Top-level bindings, tracked only for the self-reference check.
    globals: Scope,
    /// Number of function literals enclosing the current node.
    function_depth: u32,
    errors: Vec<ResolveError>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hoist top-level function bindings, then resolve every statement.
    ///
    /// Identifier depths are written in place; the returned list is empty
    /// when the program is well formed.
    pub fn resolve(mut self, program: &mut Program) -> Vec<ResolveError> {
        hoist_functions(program);
        for stmt in &program.stmts {
            self.resolve_stmt(stmt);
        }
        self.errors
    }

    fn error(&mut self, kind: ResolveErrorKind, span: Span) {
        tracing::debug!(?kind, %span, "resolve error");
        self.errors.push(ResolveError::new(kind, span));
    }

    fn enter_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    fn leave_scope(&mut self) {
        self.scopes.pop();
    }

    /// Innermost scope, the global one when no local scope is open.
    fn current_scope(&mut self) -> &mut Scope {
        match self.scopes.last_mut() {
            Some(scope) => scope,
            None => &mut self.globals,
        }
    }

    /// Mark `name` declared but not yet usable.
    fn declare(&mut self, name: &Ident) {
        let is_local = !self.scopes.is_empty();
        let previous = self.current_scope().insert(
            name.name.clone(),
            Binding {
                defined: false,
                span: name.span,
            },
        );
        // Globals may be redeclared across REPL lines; the evaluator
        // rejects redeclaration within one run.
        if let (true, Some(first)) = (is_local, previous) {
            self.error(
                ResolveErrorKind::DuplicateDeclaration {
                    name: name.name.clone(),
                    first: first.span,
                },
                name.span,
            );
        }
    }

    fn define(&mut self, name: &Ident) {
        if let Some(binding) = self.current_scope().get_mut(&name.name) {
            binding.defined = true;
        }
    }

    fn resolve_block(&mut self, block: &Block) {
        self.enter_scope();
        for stmt in &block.stmts {
            self.resolve_stmt(stmt);
        }
        self.leave_scope();
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| self.resolve_stmt_inner(stmt));
    }

    fn resolve_stmt_inner(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                if let ExprKind::Function(func) = &value.kind {
                    // Defined first so the body can call itself.
                    self.declare(name);
                    self.define(name);
                    self.resolve_function(func);
                } else {
                    self.declare(name);
                    self.resolve_expr(value);
                    self.define(name);
                }
            }
            StmtKind::Expr(expr) => self.resolve_expr(expr),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_block(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            StmtKind::Block(block) => self.resolve_block(block),
            StmtKind::Return(value) => {
                if self.function_depth == 0 {
                    self.error(ResolveErrorKind::ReturnOutsideFunction, stmt.span);
                }
                if let Some(value) = value {
                    self.resolve_expr(value);
                }
            }
            StmtKind::Each {
                binding,
                source,
                body,
            } => {
                if let LoopSource::Iterable(iterable) = source {
                    self.resolve_expr(iterable);
                }
                self.enter_scope();
                if let Some(binding) = binding {
                    self.declare(binding);
                    self.define(binding);
                }
                self.resolve_block(body);
                self.leave_scope();
            }
            StmtKind::While { condition, body } => {
                if let Some(condition) = condition {
                    self.resolve_expr(condition);
                }
                self.enter_scope();
                self.resolve_block(body);
                self.leave_scope();
            }
            StmtKind::Print(exprs) => {
                for expr in exprs {
                    self.resolve_expr(expr);
                }
            }
            StmtKind::Import { name, .. } => {
                if self.scopes.is_empty() {
                    self.declare(name);
                    self.define(name);
                } else {
                    self.error(
                        ResolveErrorKind::ImportNotGlobal {
                            name: name.name.clone(),
                        },
                        stmt.span,
                    );
                }
            }
        }
    }

    fn resolve_function(&mut self, func: &FunctionLit) {
        self.enter_scope();
        self.function_depth += 1;
        for param in &func.params {
            self.declare(param);
            self.define(param);
        }
        // The body shares the parameter frame.
        for stmt in &func.body.stmts {
            self.resolve_stmt(stmt);
        }
        self.function_depth -= 1;
        self.leave_scope();
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.resolve_expr_inner(expr));
    }

    fn resolve_expr_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Ident(ident) => self.resolve_ident(ident),
            ExprKind::Number(_) | ExprKind::String(_) | ExprKind::Bool(_) | ExprKind::Nil => {}
            ExprKind::Unary { operand, .. } => self.resolve_expr(operand),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            ExprKind::Assign { target, value } => {
                self.resolve_expr(value);
                self.resolve_expr(target);
            }
            ExprKind::Grouping(inner) => self.resolve_expr(inner),
            ExprKind::Function(func) => self.resolve_function(func),
            ExprKind::Call { callee, args } => {
                self.resolve_expr(callee);
                for arg in args {
                    self.resolve_expr(arg);
                }
            }
            ExprKind::List(items) => {
                for item in items {
                    self.resolve_expr(item);
                }
            }
            ExprKind::Map(entries) => {
                for (key, value) in entries {
                    self.resolve_expr(key);
                    self.resolve_expr(value);
                }
            }
            ExprKind::Index { target, index } => {
                self.resolve_expr(target);
                self.resolve_expr(index);
            }
            ExprKind::Member { object, .. } => self.resolve_expr(object),
        }
    }

    fn resolve_ident(&mut self, ident: &Ident) {
        let in_initializer = self
            .current_scope()
            .get(&ident.name)
            .is_some_and(|b| !b.defined);
        if in_initializer {
            self.error(
                ResolveErrorKind::SelfReference {
                    name: ident.name.clone(),
                },
                ident.span,
            );
        }

        let found = self
            .scopes
            .iter()
            .rev()
            .position(|scope| scope.contains_key(&ident.name));
        if let Some(depth) = found {
            let depth = u32::try_from(depth).unwrap_or(u32::MAX);
            tracing::trace!(name = %ident.name, depth, "resolved");
            ident.set_depth(depth);
        }
    }
}

/// Move top-level `let name = fn ...` statements to the front, keeping the
/// relative order of both groups.
fn hoist_functions(program: &mut Program) {
    let (mut functions, rest): (Vec<Stmt>, Vec<Stmt>) = std::mem::take(&mut program.stmts)
        .into_iter()
        .partition(Stmt::is_function_binding);
    functions.extend(rest);
    program.stmts = functions;
}

/// Resolve `program` with a fresh [`Resolver`].
#[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
pub fn resolve(program: &mut Program) -> Vec<ResolveError> {
    Resolver::new().resolve(program)
}
