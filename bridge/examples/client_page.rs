//! Walks one page through all three bridge paths with logging enabled.
//!
//! Run with `RUST_LOG=debug cargo run -p trellis-bridge --example client_page`.

use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use trellis_bridge::{PageComponent, render_client_page};
use trellis_context::{RenderMode, RenderScope, WorkStore};
use trellis_request::{DeferredParams, DeferredSearchParams};
use trellis_types::{InvariantError, RawParams, RawSearchParams};

struct ProductPage;

impl PageComponent for ProductPage {
    type Output = BoxFuture<'static, String>;

    fn render(&self, params: DeferredParams, search_params: DeferredSearchParams) -> Self::Output {
        async move {
            let params = params.await;
            let search_params = search_params.await;
            let id = params
                .get("id")
                .and_then(|value| value.as_segment())
                .unwrap_or("unknown");
            let query = search_params
                .get("q")
                .and_then(|value| value.as_text())
                .unwrap_or("<none>");
            format!("<Product id={id} q={query} />")
        }
        .boxed()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), InvariantError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();

    let mut params = RawParams::new();
    params.insert("id", "42");
    let search_params = RawSearchParams::parse_query("?q=x");

    let live_store = Arc::new(WorkStore::new(RenderMode::PerRequest));
    let scope = RenderScope::server(Arc::clone(&live_store));
    let rendered = render_client_page(&ProductPage, &search_params, &params, Vec::new(), &scope)?;
    println!("live render:      {}", rendered.into_output().await);

    let static_store = Arc::new(WorkStore::new(RenderMode::StaticGeneration));
    let scope = RenderScope::server(Arc::clone(&static_store));
    let rendered = render_client_page(&ProductPage, &search_params, &params, Vec::new(), &scope)?;
    println!("static prerender: {}", rendered.into_output().await);
    println!(
        "static output cacheable: {}",
        !static_store.dynamic_access_detected()
    );

    let rendered = render_client_page(
        &ProductPage,
        &search_params,
        &params,
        Vec::new(),
        &RenderScope::client(),
    )?;
    println!("client render:    {}", rendered.into_output().await);

    Ok(())
}
