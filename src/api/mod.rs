//! Backend API client
//!
//! The backend is an external collaborator: a REST endpoint returning a
//! JSON envelope of movie records. This module owns the wire types, the
//! HTTP client, and the error taxonomy the UI displays.

pub mod client;
pub mod models;

pub use client::{client, fetch_now_showing, FetchError};
pub use models::{AgeRating, Movie, MoviesResponse};
