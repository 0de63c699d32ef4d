//! Adapter constructors for client-capable evaluation paths.
//!
//! No work store exists in this environment, so these constructors take raw
//! data only and attach no tracking. There is no prerender variant: a
//! client-capable evaluation is always a live render of concrete values.

use trellis_types::{RawParams, RawSearchParams};

use crate::deferred::{Deferred, DeferredParams, DeferredSearchParams};

/// Route params for a client-capable render.
#[must_use]
pub fn render_params(params: &RawParams) -> DeferredParams {
    Deferred::new(params.clone())
}

/// Query params for a client-capable render.
#[must_use]
pub fn render_search_params(search_params: &RawSearchParams) -> DeferredSearchParams {
    Deferred::new(search_params.clone())
}

#[cfg(test)]
mod tests {
    use trellis_types::{RawParams, RawSearchParams};

    use super::{render_params, render_search_params};

    #[tokio::test]
    async fn resolves_to_the_concrete_values() {
        let mut params = RawParams::new();
        params.insert("slug", vec!["a".to_string(), "b".to_string()]);
        let search = RawSearchParams::parse_query("q=x");

        assert_eq!(render_params(&params).await, params);
        assert_eq!(render_search_params(&search).await, search);
    }
}
