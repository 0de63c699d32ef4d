use std::fmt;
use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// An auxiliary future the caller needs to keep pending.
///
/// Some callers of the bridge must keep a promise alive for the duration of
/// a render (for example, a value another part of the tree is still waiting
/// on). The bridge retains these but never polls, awaits, or inspects them;
/// they stay exactly as pending as the caller left them.
pub struct RetainedDeferred {
    _future: BoxFuture<'static, ()>,
}

impl RetainedDeferred {
    #[must_use]
    pub fn new(future: impl Future<Output = ()> + Send + 'static) -> Self {
        Self {
            _future: future.boxed(),
        }
    }
}

impl fmt::Debug for RetainedDeferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetainedDeferred").finish_non_exhaustive()
    }
}

/// The output of one bridge invocation.
///
/// Wraps whatever the page component returned and keeps the caller's
/// retained futures alive until the output is dropped, which bounds their
/// lifetime to the render they belong to.
#[derive(Debug)]
pub struct RenderedPage<T> {
    output: T,
    _retained: Vec<RetainedDeferred>,
}

impl<T> RenderedPage<T> {
    pub(crate) fn new(output: T, retained: Vec<RetainedDeferred>) -> Self {
        Self {
            output,
            _retained: retained,
        }
    }

    #[must_use]
    pub fn output(&self) -> &T {
        &self.output
    }

    /// Unwraps the component output, dropping the retained futures.
    #[must_use]
    pub fn into_output(self) -> T {
        self.output
    }
}
