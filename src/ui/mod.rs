//! Screens and widgets
//!
//! Every view here is a pure projection of application state; nothing
//! in this module mutates anything.

use iced::Color;

pub mod card;
pub mod detail;
pub mod landing;
pub mod movies;

/// Secondary text color shared across the screens.
pub const MUTED: Color =
    Color::from_rgb(0x9C as f32 / 255.0, 0xA3 as f32 / 255.0, 0xAF as f32 / 255.0);
