/// User interface module
///
/// One view function per workflow phase, plus the pieces they share.
/// Views only read state; every interaction is a `Message`.

pub mod editors;
pub mod processing;
pub mod report;
pub mod spinner;
pub mod upload;

use iced::widget::{column, container, image, text};
use iced::{Element, Length};

use crate::Message;

/// Maximum height of the image preview
const PREVIEW_HEIGHT: f32 = 256.0;

/// A titled half of the two-panel layout
fn panel<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(title).size(22), body.into()]
        .spacing(16)
        .width(Length::FillPortion(1))
        .into()
}

fn preview<'a>(handle: Option<&image::Handle>) -> Option<Element<'a, Message>> {
    handle.map(|handle| {
        image(handle.clone())
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .into()
    })
}

/// Grey box standing in for the report before it exists
fn placeholder<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fixed(PREVIEW_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PREVIEW_HEIGHT))
        .style(container::rounded_box)
        .into()
}
