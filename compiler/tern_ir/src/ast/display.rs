use std::fmt::{self, Display, Formatter, Write};

use super::{Block, Expr, ExprKind, FunctionLit, LoopSource, Program, Stmt, StmtKind};

/// Write `items` separated by `", "`.
fn comma_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write a string literal with its escapes restored.
pub fn write_quoted(f: &mut impl Write, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Ident(ident) => write!(f, "{}", ident.name),
            ExprKind::Number(n) => write!(f, "{n}"),
            ExprKind::String(s) => write_quoted(f, s),
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::Nil => f.write_str("nil"),
            ExprKind::Unary { op, operand } => write!(f, "({op}{operand})"),
            ExprKind::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::Logical { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::Assign { target, value } => write!(f, "({target} = {value})"),
            ExprKind::Grouping(inner) => write!(f, "{inner}"),
            ExprKind::Function(func) => write!(f, "{func}"),
            ExprKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                comma_separated(f, args)?;
                f.write_char(')')
            }
            ExprKind::List(items) => {
                f.write_char('[')?;
                comma_separated(f, items)?;
                f.write_char(']')
            }
            ExprKind::Map(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            }
            ExprKind::Index { target, index } => write!(f, "({target}[{index}])"),
            ExprKind::Member { object, name } => write!(f, "({object}.{name})"),
        }
    }
}

impl Display for FunctionLit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param.name)?;
        }
        write!(f, ") {}", self.body)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.stmts.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for stmt in &self.stmts {
            write!(f, "{stmt} ")?;
        }
        f.write_char('}')
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {} = {value};", name.name),
            StmtKind::Expr(expr) => write!(f, "{expr};"),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "if {condition} {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else {else_branch}")?;
                }
                Ok(())
            }
            StmtKind::Block(block) => write!(f, "{block}"),
            StmtKind::Return(Some(value)) => write!(f, "return {value};"),
            StmtKind::Return(None) => f.write_str("return;"),
            StmtKind::Each {
                binding,
                source,
                body,
            } => {
                f.write_str("each ")?;
                if let Some(binding) = binding {
                    write!(f, "{} : ", binding.name)?;
                }
                if let LoopSource::Iterable(iterable) = source {
                    write!(f, "{iterable} ")?;
                }
                write!(f, "{body}")
            }
            StmtKind::While { condition, body } => {
                f.write_str("while ")?;
                if let Some(condition) = condition {
                    write!(f, "{condition} ")?;
                }
                write!(f, "{body}")
            }
            StmtKind::Print(exprs) => {
                f.write_str("print ")?;
                comma_separated(f, exprs)?;
                f.write_char(';')
            }
            StmtKind::Import { name, path } => {
                write!(f, "import {} ", name.name)?;
                write_quoted(f, path)?;
                f.write_char(';')
            }
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.stmts.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
