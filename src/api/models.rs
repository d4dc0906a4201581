//! Wire types for the movie API

use serde::Deserialize;

/// Content classification code gating audience age.
///
/// P and K admit general audiences; T13/T16/T18 are age-restricted
/// tiers. The backend may send values outside this set, which all
/// collapse into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AgeRating {
    P,
    K,
    T13,
    T16,
    T18,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AgeRating {
    /// Short badge text. Unknown ratings display as "NR" (not rated).
    pub fn label(self) -> &'static str {
        match self {
            AgeRating::P => "P",
            AgeRating::K => "K",
            AgeRating::T13 => "T13",
            AgeRating::T16 => "T16",
            AgeRating::T18 => "T18",
            AgeRating::Unknown => "NR",
        }
    }
}

/// One movie record as supplied by the backend.
///
/// Records are read-only on this side: the list is replaced wholesale on
/// each successful fetch and never mutated in between.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique identifier, stable across requests. Keys the card list.
    pub id: i64,
    /// URL-safe identifier for detail navigation.
    pub slug: String,
    /// Display title.
    pub name: String,
    #[serde(default)]
    pub age_rating: AgeRating,
    /// Runtime in minutes.
    pub duration: u32,
    /// Absent means the release is not yet announced.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Bare filename resolved against the bundled poster directory.
    #[serde(default)]
    pub poster_file: Option<String>,
    /// Direct image link, used only when no poster file is given.
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Response envelope for the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviesResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Movie>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const NOW_SHOWING: &str = r#"{
        "success": true,
        "data": [
            {
                "id": 1,
                "slug": "the-last-reel",
                "name": "The Last Reel",
                "ageRating": "T16",
                "duration": 128,
                "releaseDate": "2025-01-05",
                "description": "A projectionist discovers a film that was never shot.",
                "posterFile": "the-last-reel.jpg"
            },
            {
                "id": 2,
                "slug": "paper-lanterns",
                "name": "Paper Lanterns",
                "ageRating": "P",
                "duration": 96,
                "posterUrl": "https://img.example.com/paper-lanterns.jpg"
            },
            {
                "id": 3,
                "slug": "midnight-circuit",
                "name": "Midnight Circuit",
                "ageRating": "R-XYZ",
                "duration": 141
            }
        ]
    }"#;

    #[test]
    fn envelope_parses_every_record() {
        let response: MoviesResponse = serde_json::from_str(NOW_SHOWING).unwrap();
        assert!(response.success);
        assert_eq!(response.data.len(), 3);

        let ids: HashSet<i64> = response.data.iter().map(|movie| movie.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn camel_case_fields_map_onto_snake_case() {
        let response: MoviesResponse = serde_json::from_str(NOW_SHOWING).unwrap();
        let movie = &response.data[0];
        assert_eq!(movie.age_rating, AgeRating::T16);
        assert_eq!(movie.release_date.as_deref(), Some("2025-01-05"));
        assert_eq!(movie.poster_file.as_deref(), Some("the-last-reel.jpg"));
        assert_eq!(movie.poster_url, None);
    }

    #[test]
    fn unknown_rating_collapses_to_unknown() {
        let response: MoviesResponse = serde_json::from_str(NOW_SHOWING).unwrap();
        assert_eq!(response.data[2].age_rating, AgeRating::Unknown);
        assert_eq!(response.data[2].age_rating.label(), "NR");
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let response: MoviesResponse = serde_json::from_str(NOW_SHOWING).unwrap();
        let movie = &response.data[2];
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.description, None);
        assert_eq!(movie.poster_file, None);
        assert_eq!(movie.poster_url, None);
    }

    #[test]
    fn missing_rating_defaults_to_unknown() {
        let json = r#"{"id": 9, "slug": "s", "name": "S", "duration": 90}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.age_rating, AgeRating::Unknown);
    }

    #[test]
    fn failure_envelope_carries_message() {
        let json = r#"{"success": false, "message": "Database offline"}"#;
        let response: MoviesResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.data.is_empty());
        assert_eq!(response.message.as_deref(), Some("Database offline"));
    }
}
