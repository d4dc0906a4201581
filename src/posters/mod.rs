//! Poster images
//!
//! Posters come from two places: a directory of bundled files shipped
//! with the application, and remote URLs supplied by the backend. Both
//! can be missing or broken; the cards fall back to a text placeholder
//! and the failure never leaves this layer.

pub mod cache;
pub mod library;

pub use cache::{download_poster, PosterCache, PosterState};
pub use library::{poster_source, PosterLibrary, PosterSource};
