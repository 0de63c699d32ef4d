//! Per-render context for the Trellis parameter bridge.
//!
//! A [`WorkStore`] is created by the page-resolution layer before a server
//! render begins and dropped when that render completes. It answers one
//! question for the bridge ("is this a static prerender pass?") and collects
//! dynamic-access events so the renderer can decide, after the fact, whether
//! the output it produced is still cacheable.
//!
//! The store is threaded explicitly through a [`RenderScope`] rather than
//! looked up from ambient task-local state, so the contract is visible at
//! the type level: a server scope without a store is a caller bug the bridge
//! rejects, not a silent fallback.

mod scope;
mod store;

pub use scope::{ExecutionEnvironment, RenderScope};
pub use store::{DynamicAccess, RenderMode, WorkStore};
