//! Now-showing screen
//!
//! A pure projection of the fetch state: spinner while loading, message
//! plus retry on failure, an empty-state note, or the card grid.

use iced::widget::{button, column, container, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_aw::{Spinner, Wrap};

use crate::api::Movie;
use crate::posters::{PosterCache, PosterLibrary};
use crate::state::FetchState;
use crate::ui::{card, MUTED};
use crate::Message;

const GRID_SPACING: f32 = 16.0;

pub fn view<'a>(
    state: &'a FetchState,
    posters: &'a PosterLibrary,
    cache: &'a PosterCache,
) -> Element<'a, Message> {
    match state {
        // Idle only lasts until the first entry to this screen kicks
        // off the fetch, so it renders the same as Loading.
        FetchState::Idle | FetchState::Loading => loading(),
        FetchState::Error(message) => error(message),
        FetchState::Success(movies) if movies.is_empty() => empty(),
        FetchState::Success(movies) => grid(movies, posters, cache),
    }
}

fn loading<'a>() -> Element<'a, Message> {
    centered(
        column![
            Spinner::new()
                .width(Length::Fixed(48.0))
                .height(Length::Fixed(48.0)),
            text("Loading movies...").size(16).color(MUTED),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
}

fn error<'a>(message: &'a str) -> Element<'a, Message> {
    centered(
        column![
            text(message).size(16),
            button(text("Try Again").size(14))
                .on_press(Message::RetryFetch)
                .padding([10.0, 24.0]),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
}

fn empty<'a>() -> Element<'a, Message> {
    centered(
        text("No movies are currently showing. Check back soon!")
            .size(16)
            .color(MUTED),
    )
}

fn grid<'a>(
    movies: &'a [Movie],
    posters: &'a PosterLibrary,
    cache: &'a PosterCache,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = movies
        .iter()
        .map(|movie| card::view(movie, posters, cache))
        .collect();

    let content = column![
        text("Now Showing").size(30),
        Wrap::with_elements(cards)
            .spacing(GRID_SPACING)
            .line_spacing(GRID_SPACING),
    ]
    .spacing(24);

    scrollable(container(content).padding(32).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
