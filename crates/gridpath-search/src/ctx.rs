//! Per-invocation search context: trace sink and cancellation.

use gridpath_core::CancelToken;

use crate::trace::TraceSink;

/// Cross-cutting inputs to a single search invocation.
///
/// `trace = None` disables snapshot production entirely: the engines
/// then skip all recording bookkeeping, not just the final copy.
/// The default context records nothing and is never cancelled.
///
/// # Examples
///
/// ```
/// use gridpath_search::{SearchCtx, TraceBuffer};
///
/// let mut buffer = TraceBuffer::new();
/// let ctx = SearchCtx {
///     trace: Some(&mut buffer),
///     ..SearchCtx::new()
/// };
/// assert!(ctx.trace.is_some());
/// ```
#[derive(Default)]
pub struct SearchCtx<'a> {
    /// Where to send snapshots, or `None` to disable tracing.
    pub trace: Option<&'a mut dyn TraceSink>,
    /// Checked once per node expansion; cancelling aborts the search
    /// with [`SearchError::Cancelled`](gridpath_core::SearchError::Cancelled).
    pub cancel: CancelToken,
}

impl SearchCtx<'_> {
    /// A context with tracing disabled and a fresh cancellation token.
    pub fn new() -> Self {
        Self::default()
    }
}
