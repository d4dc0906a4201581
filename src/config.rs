//! Application configuration
//!
//! All external addresses are resolved once at startup and injected into
//! the application as plain values. Nothing below this module reads the
//! environment.

/// Backend API address used when `MARQUEE_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Public website address used when `MARQUEE_WEB_URL` is not set.
/// Card detail pages live at `{web}/movies/{slug}`.
pub const DEFAULT_WEB_BASE_URL: &str = "http://localhost:3000";

/// Directory of bundled poster images, scanned once at startup.
pub const POSTER_DIR: &str = "assets/posters";

/// The now-showing listing is a single fixed page.
const NOW_SHOWING_LIMIT: u32 = 100;
const NOW_SHOWING_OFFSET: u32 = 0;

/// Resolved configuration for one application run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API.
    pub api_base_url: String,
    /// Base URL of the public website, for "open in browser" actions.
    pub web_base_url: String,
}

impl Config {
    /// Read configuration from the environment, falling back to the
    /// documented local development defaults.
    pub fn from_env() -> Self {
        Config {
            api_base_url: env_or("MARQUEE_API_URL", DEFAULT_API_BASE_URL),
            web_base_url: env_or("MARQUEE_WEB_URL", DEFAULT_WEB_BASE_URL),
        }
    }

    /// Full URL of the now-showing listing endpoint.
    pub fn movies_url(&self) -> String {
        format!(
            "{}/api/movies?status=now&limit={}&offset={}",
            self.api_base_url.trim_end_matches('/'),
            NOW_SHOWING_LIMIT,
            NOW_SHOWING_OFFSET,
        )
    }

    /// Website page for a single movie, identified by its slug.
    pub fn movie_page_url(&self, slug: &str) -> String {
        format!("{}/movies/{}", self.web_base_url.trim_end_matches('/'), slug)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
