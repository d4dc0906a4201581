//! HTTP fetch for the now-showing listing

use std::time::Duration;

use thiserror::Error;

use super::models::{Movie, MoviesResponse};

/// Message shown when the request never completed or the body was
/// unusable. The underlying cause is logged, not surfaced.
pub const FALLBACK_MESSAGE: &str = "Failed to load movies. Please try again later.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything that can go wrong fetching the listing.
///
/// The `Display` impl of each variant is exactly the text the error
/// screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request never completed, or the body could not be read or parsed.
    #[error("Failed to load movies. Please try again later.")]
    Network,
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The server answered 2xx but rejected the request
    /// (`success: false`), optionally with its own message.
    #[error("{0}")]
    Rejected(String),
}

/// Build the shared HTTP client.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build the HTTP client")
}

/// Fetch the now-showing listing.
///
/// All failures collapse into the [`FetchError`] taxonomy; the fetch is
/// all-or-nothing and never yields a partial list.
pub async fn fetch_now_showing(
    client: reqwest::Client,
    url: String,
) -> Result<Vec<Movie>, FetchError> {
    let response = client.get(&url).send().await.map_err(|err| {
        eprintln!("⚠️  Movie request failed: {}", err);
        FetchError::Network
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await.map_err(|err| {
        eprintln!("⚠️  Failed to read movie response body: {}", err);
        FetchError::Network
    })?;

    movies_from_body(&body)
}

/// Decode the response envelope and apply the success/failure contract.
pub fn movies_from_body(body: &str) -> Result<Vec<Movie>, FetchError> {
    let envelope: MoviesResponse = serde_json::from_str(body).map_err(|err| {
        eprintln!("⚠️  Malformed movie response: {}", err);
        FetchError::Network
    })?;

    if !envelope.success {
        return Err(FetchError::Rejected(
            envelope.message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        ));
    }

    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope_yields_the_list() {
        let body = r#"{"success": true, "data": [
            {"id": 1, "slug": "a", "name": "A", "ageRating": "P", "duration": 90},
            {"id": 2, "slug": "b", "name": "B", "ageRating": "T18", "duration": 121}
        ]}"#;
        let movies = movies_from_body(body).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].slug, "b");
    }

    #[test]
    fn rejection_surfaces_the_server_message() {
        let body = r#"{"success": false, "message": "Showtimes unavailable"}"#;
        assert_eq!(
            movies_from_body(body),
            Err(FetchError::Rejected("Showtimes unavailable".to_string()))
        );
    }

    #[test]
    fn rejection_without_message_uses_the_fallback() {
        let body = r#"{"success": false}"#;
        let err = movies_from_body(body).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_MESSAGE);
    }

    #[test]
    fn malformed_body_maps_to_network_error() {
        assert_eq!(movies_from_body("<!doctype html>"), Err(FetchError::Network));
        assert_eq!(movies_from_body(""), Err(FetchError::Network));
    }

    #[test]
    fn error_display_matches_the_screen_contract() {
        assert_eq!(
            FetchError::Network.to_string(),
            "Failed to load movies. Please try again later."
        );
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error! status: 503");
        assert_eq!(
            FetchError::Rejected("Showtimes unavailable".to_string()).to_string(),
            "Showtimes unavailable"
        );
    }
}
