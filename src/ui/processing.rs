use iced::widget::{button, canvas, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use super::spinner::Spinner;
use super::{panel, placeholder, preview};
use crate::Message;

const SPINNER_SIZE: f32 = 64.0;

pub fn view<'a>(preview_handle: Option<&'a image::Handle>, spinner: Spinner) -> Element<'a, Message> {
    let progress = column![
        canvas(spinner)
            .width(Length::Fixed(SPINNER_SIZE))
            .height(Length::Fixed(SPINNER_SIZE)),
        text("Analyzing Image... Please Wait"),
        text("This may take a few moments").size(13),
        button("Cancel")
            .on_press(Message::Reset)
            .style(button::secondary),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    let analysis = container(
        column![]
            .push_maybe(preview(preview_handle))
            .push(progress)
            .spacing(16)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box);

    row![
        panel("Analyzing Image", analysis),
        panel("Report Preview", placeholder("Generating report...")),
    ]
    .spacing(32)
    .into()
}
