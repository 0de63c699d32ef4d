use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Which kind of pass the current render is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Prerender pass: output is produced ahead of any request and meant to
    /// be cached. Request-specific data must not leak into it.
    StaticGeneration,
    /// Live pass: output is produced for one concrete request.
    PerRequest,
}

/// One recorded read of parameter data during a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicAccess {
    /// Which page prop was read (`"params"` or `"searchParams"`).
    pub prop: &'static str,
    /// The mode the render was in when the read happened.
    pub mode: RenderMode,
}

/// Per-render state shared between the bridge, the adapters, and the
/// enclosing renderer.
///
/// Exactly one store exists per in-flight server render. The bridge only
/// reads [`Self::is_static_generation`]; the adapters report first accesses
/// back through [`Self::track_dynamic_access`] and
/// [`Self::track_known_access`]; the renderer inspects the results once the
/// render output is finalized.
#[derive(Debug)]
pub struct WorkStore {
    mode: RenderMode,
    dynamic_access_detected: AtomicBool,
    accesses: Mutex<Vec<DynamicAccess>>,
}

impl WorkStore {
    #[must_use]
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            dynamic_access_detected: AtomicBool::new(false),
            accesses: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// True when this render is a static prerender pass.
    #[must_use]
    pub fn is_static_generation(&self) -> bool {
        self.mode == RenderMode::StaticGeneration
    }

    /// Records that the page read request-derived data through `prop`.
    ///
    /// During a static pass this marks the render as dynamic, which tells
    /// the renderer the output it is producing cannot be cached as-is.
    pub fn track_dynamic_access(&self, prop: &'static str) {
        if self.mode == RenderMode::StaticGeneration {
            self.dynamic_access_detected.store(true, Ordering::Release);
        }
        tracing::debug!(prop, mode = ?self.mode, "page accessed request data");
        self.record(prop);
    }

    /// Records that the page read data already known ahead of any request,
    /// such as the route params of the route being rendered.
    ///
    /// Kept in the access log for cache-scope accounting, but never affects
    /// cacheability: the value is the same for every request that matches
    /// the route.
    pub fn track_known_access(&self, prop: &'static str) {
        tracing::debug!(prop, mode = ?self.mode, "page accessed route data");
        self.record(prop);
    }

    fn record(&self, prop: &'static str) {
        // A poisoned log still holds every record pushed before the panic;
        // dropping them would hide reads the renderer accounts for.
        self.accesses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DynamicAccess {
                prop,
                mode: self.mode,
            });
    }

    /// True when a static pass observed request-derived data.
    #[must_use]
    pub fn dynamic_access_detected(&self) -> bool {
        self.dynamic_access_detected.load(Ordering::Acquire)
    }

    /// Snapshot of every recorded access, in observation order.
    #[must_use]
    pub fn accesses(&self) -> Vec<DynamicAccess> {
        self.accesses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
