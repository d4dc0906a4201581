//! One movie card

use iced::widget::{column, container, image, mouse_area, row, text};
use iced::{border, Alignment, Color, ContentFit, Element, Length};

use crate::api::{AgeRating, Movie};
use crate::color::rating_color;
use crate::format::{format_duration, format_release_date};
use crate::posters::{poster_source, PosterCache, PosterLibrary, PosterSource, PosterState};
use crate::ui::MUTED;
use crate::Message;

pub const CARD_WIDTH: f32 = 210.0;
const POSTER_HEIGHT: f32 = 280.0;
// Two lines of description at size 12; overflow is clipped, not cut.
const DESCRIPTION_CLIP_HEIGHT: f32 = 34.0;

const CARD_BACKGROUND: Color =
    Color::from_rgb(0x1F as f32 / 255.0, 0x22 as f32 / 255.0, 0x27 as f32 / 255.0);
const POSTER_BACKGROUND: Color =
    Color::from_rgb(0x15 as f32 / 255.0, 0x17 as f32 / 255.0, 0x1B as f32 / 255.0);

/// A clickable card for one movie. Clicking opens the detail view.
pub fn view<'a>(
    movie: &'a Movie,
    posters: &'a PosterLibrary,
    cache: &'a PosterCache,
) -> Element<'a, Message> {
    let mut details = column![
        text(&movie.name).size(16),
        row![
            rating_badge(movie.age_rating),
            text(format_duration(movie.duration)).size(12).color(MUTED),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        text(format_release_date(movie.release_date.as_deref()))
            .size(12)
            .color(MUTED),
    ]
    .spacing(6);

    if let Some(description) = &movie.description {
        details = details.push(
            container(text(description).size(12).color(MUTED))
                .height(Length::Fixed(DESCRIPTION_CLIP_HEIGHT))
                .clip(true),
        );
    }

    let card = container(
        column![poster(movie, posters, cache, POSTER_HEIGHT), details].spacing(10),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .padding(10)
    .style(|_theme| container::Style {
        background: Some(CARD_BACKGROUND.into()),
        border: border::rounded(8.0),
        ..container::Style::default()
    });

    mouse_area(card)
        .on_press(Message::MovieSelected(movie.id))
        .into()
}

/// The poster area of a card or the detail view.
///
/// Bundled files render straight from disk; remote posters render once
/// the cache has their bytes; everything else is the text placeholder.
pub fn poster<'a>(
    movie: &'a Movie,
    posters: &'a PosterLibrary,
    cache: &'a PosterCache,
    height: f32,
) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match poster_source(posters, movie) {
        PosterSource::Bundled(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        PosterSource::Remote(_) => match cache.get(movie.id) {
            Some(PosterState::Loaded(handle)) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            _ => placeholder(&movie.name),
        },
        PosterSource::Placeholder => placeholder(&movie.name),
    };

    container(inner)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .style(|_theme| container::Style {
            background: Some(POSTER_BACKGROUND.into()),
            border: border::rounded(6.0),
            ..container::Style::default()
        })
        .into()
}

/// Colored classification badge.
pub fn rating_badge<'a>(rating: AgeRating) -> Element<'a, Message> {
    let color = rating_color(rating);
    container(text(rating.label()).size(12).color(Color::WHITE))
        .padding([2.0, 8.0])
        .style(move |_theme| container::Style {
            background: Some(color.into()),
            border: border::rounded(4.0),
            ..container::Style::default()
        })
        .into()
}

fn placeholder<'a>(name: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(name).size(15),
            text("Movie Poster").size(12).color(MUTED),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .padding(8)
    .into()
}
