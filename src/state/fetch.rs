//! Fetch lifecycle of the now-showing listing
//!
//! An explicit state machine over {Idle, Loading, Success, Error}. Each
//! request is stamped with a generation token when Loading is entered;
//! a response carrying any other token is discarded, so a retry can
//! never be overwritten by a stale earlier response.

use crate::api::{FetchError, Movie};

/// Where the listing fetch currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No request has been issued yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request delivered a (possibly empty) listing.
    Success(Vec<Movie>),
    /// The last request failed; the message is ready for display.
    Error(String),
}

/// Owner of the listing fetch lifecycle.
#[derive(Debug)]
pub struct NowShowing {
    state: FetchState,
    generation: u64,
}

impl NowShowing {
    pub fn new() -> Self {
        NowShowing {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    /// Enter Loading and issue the token the eventual response must
    /// carry. Also serves as the manual "Try Again" transition.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    /// Apply a finished request.
    ///
    /// Returns `false` (leaving state untouched) when the token is not
    /// the one issued by the most recent [`begin`](Self::begin).
    pub fn resolve(&mut self, generation: u64, result: Result<Vec<Movie>, FetchError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match result {
            Ok(movies) => FetchState::Success(movies),
            Err(err) => FetchState::Error(err.to_string()),
        };
        true
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Whether a fetch has ever been started.
    pub fn is_started(&self) -> bool {
        !matches!(self.state, FetchState::Idle)
    }
}

impl Default for NowShowing {
    fn default() -> Self {
        Self::new()
    }
}
