use trellis_context::{ExecutionEnvironment, RenderScope};
use trellis_request::{client, server};
use trellis_types::{InvariantError, RawParams, RawSearchParams};

use crate::component::PageComponent;
use crate::retained::{RenderedPage, RetainedDeferred};

/// Renders a client page with its parameters wrapped as deferred values.
///
/// Called once per page render by the page-resolution layer, after it has
/// decided the page is client-rendered and needs parameter injection. The
/// raw inputs are never mutated; the adapters clone what they need. The
/// bridge itself is synchronous and never awaits the values it constructs.
///
/// On a server scope the adapter pair follows the work store's mode: a
/// static prerender pass must not let the page observe concrete query
/// values (that would bake one request's data into cached output), so the
/// search params become a tracked placeholder. A live pass hands over the
/// concrete values. On a client-capable scope the store does not exist and
/// the untracked client pair is always used.
///
/// # Errors
///
/// Returns an [`InvariantError`] when invoked on a server scope that
/// carries no work store. That is a bug in the caller, and continuing
/// would silently produce an incorrect request-oblivious result.
pub fn render_client_page<C: PageComponent>(
    component: &C,
    search_params: &RawSearchParams,
    params: &RawParams,
    retained: Vec<RetainedDeferred>,
    scope: &RenderScope,
) -> Result<RenderedPage<C::Output>, InvariantError> {
    let (page_params, page_search_params) = match scope.environment() {
        ExecutionEnvironment::Server => {
            let Some(store) = scope.work_store() else {
                return Err(InvariantError::new(
                    "expected a work store to exist when adapting params for a client page",
                ));
            };

            if store.is_static_generation() {
                tracing::debug!("adapting client page params for a static prerender pass");
                (
                    server::prerender_params(params, store),
                    server::prerender_search_params(store),
                )
            } else {
                tracing::debug!("adapting client page params for a live render pass");
                (
                    server::render_params(params, store),
                    server::render_search_params(search_params, store),
                )
            }
        }
        ExecutionEnvironment::ClientCapable => {
            tracing::debug!("adapting client page params in a client-capable environment");
            (
                client::render_params(params),
                client::render_search_params(search_params),
            )
        }
    };

    let output = component.render(page_params, page_search_params);
    Ok(RenderedPage::new(output, retained))
}
