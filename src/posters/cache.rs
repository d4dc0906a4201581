//! Remote poster cache
//!
//! Remote poster URLs are downloaded in the background and kept as
//! decoded image handles keyed by movie id. A download failure marks
//! the entry Failed and the card keeps its placeholder.

use std::collections::HashMap;

use iced::widget::image;

/// Lifecycle of one remote poster download.
#[derive(Debug, Clone)]
pub enum PosterState {
    /// Download in flight; the card shows the placeholder meanwhile.
    Loading,
    /// Bytes arrived and are ready to render.
    Loaded(image::Handle),
    /// Download failed; the placeholder is permanent for this fetch.
    Failed,
}

/// Poster handles for the currently displayed listing.
///
/// Entries are keyed by movie id. Results arriving for movies that are
/// no longer displayed are inert data here, never an error.
#[derive(Debug, Default)]
pub struct PosterCache {
    entries: HashMap<i64, PosterState>,
}

impl PosterCache {
    pub fn new() -> Self {
        PosterCache {
            entries: HashMap::new(),
        }
    }

    pub fn mark_loading(&mut self, id: i64) {
        self.entries.insert(id, PosterState::Loading);
    }

    pub fn insert_loaded(&mut self, id: i64, handle: image::Handle) {
        self.entries.insert(id, PosterState::Loaded(handle));
    }

    pub fn mark_failed(&mut self, id: i64) {
        self.entries.insert(id, PosterState::Failed);
    }

    pub fn get(&self, id: i64) -> Option<&PosterState> {
        self.entries.get(&id)
    }

    /// Drop all entries; called when a new listing replaces the old one.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Download raw poster bytes from a remote URL.
///
/// Errors are strings: the caller only logs them, the user never sees
/// a poster failure.
pub async fn download_poster(client: reqwest::Client, url: String) -> Result<Vec<u8>, String> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| format!("request failed: {}", err))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| format!("read failed: {}", err))?;
    Ok(bytes.to_vec())
}
