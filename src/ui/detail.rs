//! Movie detail screen
//!
//! Shows the already-fetched record for one movie; no extra request is
//! made. The web page for the movie opens in the system browser.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::api::Movie;
use crate::format::{format_duration, format_release_date};
use crate::posters::{PosterCache, PosterLibrary};
use crate::ui::{card, MUTED};
use crate::Message;

const POSTER_WIDTH: f32 = 300.0;
const POSTER_HEIGHT: f32 = 420.0;

pub fn view<'a>(
    movie: &'a Movie,
    posters: &'a PosterLibrary,
    cache: &'a PosterCache,
) -> Element<'a, Message> {
    let poster = container(card::poster(movie, posters, cache, POSTER_HEIGHT))
        .width(Length::Fixed(POSTER_WIDTH));

    let mut info = column![
        text(&movie.name).size(34),
        row![
            card::rating_badge(movie.age_rating),
            text(format_duration(movie.duration)).size(14).color(MUTED),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        text(format!(
            "In theaters: {}",
            format_release_date(movie.release_date.as_deref())
        ))
        .size(14)
        .color(MUTED),
    ]
    .spacing(12)
    .max_width(520);

    if let Some(description) = &movie.description {
        info = info.push(text(description).size(15));
    }

    info = info.push(
        button(text("Open in Browser").size(14))
            .on_press(Message::OpenMoviePage(movie.slug.clone()))
            .padding([10.0, 24.0]),
    );

    let content = column![
        button(text("< Back to Now Showing").size(14)).on_press(Message::BackToListing),
        row![poster, info].spacing(32),
    ]
    .spacing(24);

    scrollable(container(content).padding(32).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
