//! Call depth tracking.

use tern_ir::Span;

use crate::errors::{stack_overflow, EvalError};

/// Deepest call chain allowed before a call fails with a stack overflow.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Counts active user-function calls.
///
/// Bounds recursion so runaway programs fail with a runtime error instead of
/// exhausting memory, and tells `return` whether it is inside a function.
#[derive(Copy, Clone, Debug)]
pub struct CallStack {
    depth: usize,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            depth: 0,
            max_depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a call made at `call_span`.
    pub fn push(&mut self, call_span: Span) -> Result<(), EvalError> {
        if self.depth >= self.max_depth {
            return Err(stack_overflow(self.max_depth).with_span(call_span));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
