//! Deferred parameter values and their source adapters.
//!
//! # Architecture
//!
//! The crate is organized around two adapter families, one per execution
//! environment:
//!
//! - [`server`] - constructors used inside the server renderer, split into a
//!   prerender pair and a live-render pair; both report first accesses back
//!   to the render's [`WorkStore`](trellis_context::WorkStore)
//! - [`client`] - constructors used on client-capable evaluation paths,
//!   where no store exists and nothing is tracked
//!
//! Every constructor is total: given well-formed raw parameters it returns a
//! [`Deferred`] value, never an error. To the page a deferred value is just
//! a future; the access instrumentation is visible only to the runtime.

mod deferred;

pub mod client;
pub mod server;

pub use deferred::{Deferred, DeferredParams, DeferredSearchParams};
