use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

use trellis_types::{RawParams, RawSearchParams};

/// Route parameters as the page receives them.
pub type DeferredParams = Deferred<RawParams>;
/// Query parameters as the page receives them.
pub type DeferredSearchParams = Deferred<RawSearchParams>;

struct Inner<T> {
    value: T,
    accessed: AtomicBool,
    on_first_access: Option<Box<dyn Fn() + Send + Sync>>,
}

/// An asynchronous container that resolves to `T` and records its first read.
///
/// The page sees only the `Future` contract. The access flag and hook are a
/// side channel for the rendering runtime: the hook fires exactly once, on
/// the first poll across all clones, and [`Self::was_accessed`] lets the
/// runtime inspect the flag afterwards without disturbing it.
///
/// Clones share one instrumentation cell, so the runtime can hand the page a
/// clone and keep its own handle for inspection. Values are constructed once
/// per bridge invocation and never reused across renders.
pub struct Deferred<T> {
    inner: Arc<Inner<T>>,
}

impl<T: Clone> Deferred<T> {
    /// An untracked deferred value: resolves to `value`, fires no hook.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value,
                accessed: AtomicBool::new(false),
                on_first_access: None,
            }),
        }
    }

    /// A tracked deferred value: `hook` fires once, at first poll.
    #[must_use]
    pub fn with_hook(value: T, hook: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                value,
                accessed: AtomicBool::new(false),
                on_first_access: Some(Box::new(hook)),
            }),
        }
    }

    /// True once any clone of this value has been polled.
    #[must_use]
    pub fn was_accessed(&self) -> bool {
        self.inner.accessed.load(Ordering::Acquire)
    }

    fn touch(&self) {
        let first = !self.inner.accessed.swap(true, Ordering::AcqRel);
        if first {
            tracing::debug!(
                tracked = self.inner.on_first_access.is_some(),
                "deferred value read for the first time"
            );
            if let Some(hook) = &self.inner.on_first_access {
                hook();
            }
        }
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("value", &self.inner.value)
            .field("accessed", &self.inner.accessed)
            .field("tracked", &self.inner.on_first_access.is_some())
            .finish()
    }
}

impl<T: Clone> Future for Deferred<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.touch();
        Poll::Ready(self.inner.value.clone())
    }
}
