//! Recursion guards for the vibescript front-end.
//!
//! Deeply nested source (`((((...))))`, long `if` ladders, blocks inside
//! blocks) drives the recursive-descent parser arbitrarily deep. Two guards
//! keep that safe:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand so that
//!   legitimate nesting never overflows.
//! - [`DepthBudget`] caps the logical nesting depth so that pathological input
//!   is reported as a resource-limit error instead of consuming unbounded
//!   memory.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack in 1MB segments.
//! - **WASM targets**: passthrough; the host manages the stack.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
///
/// ```text
/// fn parse_expr(&mut self) -> Result<NodeId, ParseError> {
///     ensure_sufficient_stack(|| self.parse_expr_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Default maximum nesting depth accepted by the parser.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Nesting limit exceeded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("nesting depth exceeds the limit of {limit}")]
pub struct DepthExceeded {
    /// The configured limit that was exceeded.
    pub limit: u32,
}

/// Counter for logical nesting depth.
///
/// Callers pair every successful [`enter`](Self::enter) with one
/// [`exit`](Self::exit). A failed `enter` does not change the depth.
#[derive(Clone, Debug)]
pub struct DepthBudget {
    depth: u32,
    limit: u32,
}

impl DepthBudget {
    /// Create a budget allowing `limit` nested levels.
    pub const fn new(limit: u32) -> Self {
        DepthBudget { depth: 0, limit }
    }

    /// Descend one level.
    #[inline]
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if self.depth >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.depth += 1;
        Ok(())
    }

    /// Return from one level.
    #[inline]
    pub fn exit(&mut self) {
        debug_assert!(self.depth > 0, "DepthBudget::exit without matching enter");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth.
    #[inline]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Configured limit.
    #[inline]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for DepthBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deep_recursion() {
        // 100k frames would overflow a typical 8MB main-thread stack.
        fn deep_recurse(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { deep_recurse(n - 1) + 1 })
        }

        assert_eq!(deep_recurse(100_000), 100_000);
    }

    #[test]
    fn test_returns_closure_result() {
        let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
        assert_eq!(result, Ok(123));
    }

    #[test]
    fn test_budget_enter_exit() {
        let mut budget = DepthBudget::new(2);
        assert_eq!(budget.enter(), Ok(()));
        assert_eq!(budget.enter(), Ok(()));
        assert_eq!(budget.depth(), 2);
        assert_eq!(budget.enter(), Err(DepthExceeded { limit: 2 }));
        assert_eq!(budget.depth(), 2);

        budget.exit();
        assert_eq!(budget.depth(), 1);
        assert_eq!(budget.enter(), Ok(()));
    }

    #[test]
    fn test_budget_default_limit() {
        let budget = DepthBudget::default();
        assert_eq!(budget.limit(), DEFAULT_MAX_DEPTH);
        assert_eq!(budget.depth(), 0);
    }

    #[test]
    fn test_depth_exceeded_message() {
        let err = DepthExceeded { limit: 8 };
        assert_eq!(err.to_string(), "nesting depth exceeds the limit of 8");
    }
}
