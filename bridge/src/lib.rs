//! The dynamic parameter bridge.
//!
//! When a page is client-rendered, the server has already extracted its
//! route parameters and parsed its query string, but the page must receive
//! both as deferred values so the runtime can observe when they are actually
//! read. [`render_client_page`] is the single entry point that performs that
//! hand-off: it inspects the [`RenderScope`](trellis_context::RenderScope),
//! picks the matching adapter family, wraps the raw values, and invokes the
//! page component.
//!
//! # Decision paths
//!
//! | Environment | Render mode | Adapters |
//! |-------------|-------------|----------|
//! | Server | static prerender | prerender pair (placeholder search params) |
//! | Server | live per-request | render pair (concrete values) |
//! | Client-capable | n/a | client pair (concrete values, untracked) |
//!
//! A server scope without a work store is rejected with an
//! [`InvariantError`](trellis_types::InvariantError): continuing would
//! silently produce a request-oblivious cached result.

mod client_page;
mod component;
mod retained;

pub use client_page::render_client_page;
pub use component::PageComponent;
pub use retained::{RenderedPage, RetainedDeferred};
