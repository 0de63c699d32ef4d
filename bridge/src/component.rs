use trellis_request::{DeferredParams, DeferredSearchParams};

/// A render-capable page that accepts its parameters as deferred values.
///
/// Invocation is synchronous; a page that needs to await its parameters
/// returns a future as its output and the enclosing renderer drives it.
/// The bridge never awaits or inspects the output.
pub trait PageComponent {
    type Output;

    fn render(&self, params: DeferredParams, search_params: DeferredSearchParams) -> Self::Output;
}

impl<F, O> PageComponent for F
where
    F: Fn(DeferredParams, DeferredSearchParams) -> O,
{
    type Output = O;

    fn render(&self, params: DeferredParams, search_params: DeferredSearchParams) -> O {
        self(params, search_params)
    }
}
