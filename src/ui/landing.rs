//! Landing screen
//!
//! The hero of the original site, reduced to its navigational essence:
//! app identity and one action leading to the now-showing grid.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::ui::MUTED;
use crate::Message;

pub fn view<'a>() -> Element<'a, Message> {
    let hero = column![
        text("MARQUEE").size(56),
        text("Your night at the movies starts here").size(18).color(MUTED),
        button(text("Browse Now Showing").size(16))
            .on_press(Message::BrowseNowShowing)
            .padding([12.0, 28.0]),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    container(hero)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
