//! Core domain types for the Trellis parameter bridge.
//!
//! This crate contains pure domain types with no IO and no async. Route
//! parameters and query parameters are modeled as insertion-ordered maps so
//! that the order produced by the route matcher and URL parser survives all
//! the way to the page component.

mod invariant;
mod params;
mod search_params;

pub use invariant::InvariantError;
pub use params::{ParamValue, RawParams};
pub use search_params::{QueryValue, RawSearchParams};
