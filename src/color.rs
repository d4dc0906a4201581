//! Badge colors for age-rating classifications
//!
//! The mapping is total: the five known ratings have fixed colors and
//! everything else falls back to a neutral gray.

use iced::Color;

use crate::api::AgeRating;

/// Badge background color for an age rating.
///
/// P and K are general-audience ratings and share the same green; the
/// age-restricted tiers escalate yellow → orange → red.
pub fn rating_color(rating: AgeRating) -> Color {
    match rating {
        AgeRating::P | AgeRating::K => Color::from_rgb8(0x22, 0xC5, 0x5E),
        AgeRating::T13 => Color::from_rgb8(0xEA, 0xB3, 0x08),
        AgeRating::T16 => Color::from_rgb8(0xF9, 0x73, 0x16),
        AgeRating::T18 => Color::from_rgb8(0xEF, 0x44, 0x44),
        AgeRating::Unknown => Color::from_rgb8(0x6B, 0x72, 0x80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_ratings_share_green() {
        assert_eq!(rating_color(AgeRating::P), rating_color(AgeRating::K));
        assert_eq!(rating_color(AgeRating::P), Color::from_rgb8(0x22, 0xC5, 0x5E));
    }

    #[test]
    fn restricted_tiers_escalate() {
        assert_eq!(rating_color(AgeRating::T13), Color::from_rgb8(0xEA, 0xB3, 0x08));
        assert_eq!(rating_color(AgeRating::T16), Color::from_rgb8(0xF9, 0x73, 0x16));
        assert_eq!(rating_color(AgeRating::T18), Color::from_rgb8(0xEF, 0x44, 0x44));
    }

    #[test]
    fn unknown_rating_is_neutral_gray() {
        assert_eq!(
            rating_color(AgeRating::Unknown),
            Color::from_rgb8(0x6B, 0x72, 0x80)
        );
    }

    #[test]
    fn mapping_is_deterministic() {
        for rating in [
            AgeRating::P,
            AgeRating::K,
            AgeRating::T13,
            AgeRating::T16,
            AgeRating::T18,
            AgeRating::Unknown,
        ] {
            assert_eq!(rating_color(rating), rating_color(rating));
        }
    }
}
