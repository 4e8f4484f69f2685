//! Stack growth for deep recursion.
//!
//! The parser, resolver and evaluator are all recursive over the syntax
//! tree, so deeply nested source (or deep user recursion) can exhaust the
//! native stack. Wrapping the recursive step in [`ensure_sufficient_stack`]
//! grows the stack on demand instead.
//!
//! - **Red zone**: 100KB. If less than this remains, the stack is grown.
//! - **Growth size**: 1MB per extension.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval_expr(&mut self, expr: &Expr, env: &Env) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_recursion() {
        fn sum_to(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
        }

        assert_eq!(sum_to(100), 5050);
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        fn nest(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
        }

        assert_eq!(nest(100_000), 100_000);
    }

    #[test]
    fn passes_result_through() {
        let result: Result<i32, &str> = ensure_sufficient_stack(|| Err("boom"));
        assert_eq!(result, Err("boom"));
    }
}
