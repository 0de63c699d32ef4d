use std::sync::Arc;

use crate::store::WorkStore;

/// Where a bridge invocation is executing.
///
/// The work store is a server-only construct: code re-running on a
/// client-capable evaluation path (hydration, client navigation) has no
/// store and must use adapters that do not depend on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionEnvironment {
    Server,
    ClientCapable,
}

/// The explicit per-invocation handle the bridge receives instead of an
/// ambient store lookup.
///
/// The page-resolution layer builds one scope per render and passes it down
/// the call chain. A [`ExecutionEnvironment::Server`] scope is expected to
/// carry the render's [`WorkStore`]; one without a store is a contract bug
/// the bridge surfaces as an invariant violation.
#[derive(Debug, Clone)]
pub struct RenderScope {
    environment: ExecutionEnvironment,
    store: Option<Arc<WorkStore>>,
}

impl RenderScope {
    #[must_use]
    pub fn new(environment: ExecutionEnvironment, store: Option<Arc<WorkStore>>) -> Self {
        Self { environment, store }
    }

    /// A server scope for one in-flight render.
    #[must_use]
    pub fn server(store: Arc<WorkStore>) -> Self {
        Self::new(ExecutionEnvironment::Server, Some(store))
    }

    /// A client-capable scope. No store crosses into this environment.
    #[must_use]
    pub fn client() -> Self {
        Self::new(ExecutionEnvironment::ClientCapable, None)
    }

    #[must_use]
    pub fn environment(&self) -> ExecutionEnvironment {
        self.environment
    }

    #[must_use]
    pub fn work_store(&self) -> Option<&Arc<WorkStore>> {
        self.store.as_ref()
    }
}
