//! Application state
//!
//! The fetch lifecycle of the now-showing listing lives here; the UI
//! layer is a pure projection of it.

pub mod fetch;

pub use fetch::{FetchState, NowShowing};
