//! Adapter constructors for the server environment.
//!
//! Two pairs, selected by the bridge from the render's mode: the prerender
//! pair for static passes, the render pair for live per-request passes.
//! Every constructor reports the page's first read back to the [`WorkStore`]
//! so the renderer can account for cache scope once the render finishes.

use std::sync::Arc;

use trellis_context::WorkStore;
use trellis_types::{RawParams, RawSearchParams};

use crate::deferred::{Deferred, DeferredParams, DeferredSearchParams};

/// Search params for a static prerender pass.
///
/// Built from the store alone: during a static pass the query string is not
/// yet known, so the page sees an empty placeholder mapping. Reading it
/// marks the render dynamic, because output that depends on query values
/// cannot be cached as a static result.
#[must_use]
pub fn prerender_search_params(store: &Arc<WorkStore>) -> DeferredSearchParams {
    let store = Arc::clone(store);
    Deferred::with_hook(RawSearchParams::new(), move || {
        store.track_dynamic_access("searchParams");
    })
}

/// Search params for a live per-request pass: the concrete parsed values.
#[must_use]
pub fn render_search_params(
    search_params: &RawSearchParams,
    store: &Arc<WorkStore>,
) -> DeferredSearchParams {
    let store = Arc::clone(store);
    Deferred::with_hook(search_params.clone(), move || {
        store.track_dynamic_access("searchParams");
    })
}

/// Route params for a static prerender pass.
///
/// Unlike the query string, route params are known during a static pass
/// (they come from the route pattern being prerendered), so the concrete
/// mapping is used and reading it never affects cacheability.
#[must_use]
pub fn prerender_params(params: &RawParams, store: &Arc<WorkStore>) -> DeferredParams {
    let store = Arc::clone(store);
    Deferred::with_hook(params.clone(), move || {
        store.track_known_access("params");
    })
}

/// Route params for a live per-request pass.
#[must_use]
pub fn render_params(params: &RawParams, store: &Arc<WorkStore>) -> DeferredParams {
    let store = Arc::clone(store);
    Deferred::with_hook(params.clone(), move || {
        store.track_known_access("params");
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use trellis_context::{RenderMode, WorkStore};
    use trellis_types::{RawParams, RawSearchParams};

    use super::{prerender_params, prerender_search_params, render_params, render_search_params};

    fn raw_params() -> RawParams {
        let mut params = RawParams::new();
        params.insert("id", "42");
        params
    }

    fn raw_search() -> RawSearchParams {
        let mut search = RawSearchParams::new();
        search.insert("q", "x");
        search
    }

    #[tokio::test]
    async fn prerender_search_params_resolve_to_placeholder() {
        let store = Arc::new(WorkStore::new(RenderMode::StaticGeneration));
        let deferred = prerender_search_params(&store);

        let resolved = deferred.await;
        assert!(resolved.is_empty());
        assert!(store.dynamic_access_detected());
    }

    #[tokio::test]
    async fn prerender_search_params_track_nothing_until_read() {
        let store = Arc::new(WorkStore::new(RenderMode::StaticGeneration));
        let _deferred = prerender_search_params(&store);
        assert!(!store.dynamic_access_detected());
        assert!(store.accesses().is_empty());
    }

    #[tokio::test]
    async fn prerender_params_keep_the_route_values() {
        let store = Arc::new(WorkStore::new(RenderMode::StaticGeneration));
        let deferred = prerender_params(&raw_params(), &store);

        assert_eq!(deferred.await, raw_params());
        let props: Vec<&str> = store.accesses().iter().map(|a| a.prop).collect();
        assert_eq!(props, ["params"]);
    }

    #[tokio::test]
    async fn reading_route_params_keeps_a_static_render_cacheable() {
        let store = Arc::new(WorkStore::new(RenderMode::StaticGeneration));
        let deferred = prerender_params(&raw_params(), &store);

        // Route params are the same for every request that matches the
        // route; a static page awaiting its own params stays cacheable.
        let _ = deferred.await;
        assert!(!store.dynamic_access_detected());
    }

    #[tokio::test]
    async fn render_pair_resolves_to_the_concrete_values() {
        let store = Arc::new(WorkStore::new(RenderMode::PerRequest));
        let params = render_params(&raw_params(), &store);
        let search = render_search_params(&raw_search(), &store);

        assert_eq!(params.await, raw_params());
        assert_eq!(search.await, raw_search());
        assert!(!store.dynamic_access_detected());
        assert_eq!(store.accesses().len(), 2);
    }

    #[tokio::test]
    async fn constructions_from_the_same_inputs_are_independent() {
        let store = Arc::new(WorkStore::new(RenderMode::PerRequest));
        let raw = raw_params();
        let first = render_params(&raw, &store);
        let second = render_params(&raw, &store);

        let _ = first.await;
        assert!(!second.was_accessed());
        assert_eq!(second.await, raw);
    }
}
