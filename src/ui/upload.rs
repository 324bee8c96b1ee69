use iced::widget::{button, column, container, image, mouse_area, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use super::{panel, placeholder, preview};
use crate::state::Session;
use crate::Message;

/// Upload view: drop area and preview on the left, empty report on the right
pub fn view<'a>(
    session: &'a Session,
    preview_handle: Option<&'a image::Handle>,
    drop_hover: bool,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match session.selected_image() {
        Some(selected) => column![]
            .push_maybe(preview(preview_handle))
            .push(text(format!("Image selected: {}", selected.filename)))
            .push(
                button("Change Image")
                    .on_press(Message::BrowseImage)
                    .style(button::text),
            )
            .spacing(12)
            .align_x(Alignment::Center)
            .into(),
        None => column![
            text("+").size(48),
            text("Drag & drop your image here or click to browse"),
            text("Supported formats: PNG, JPEG, GIF, BMP, WebP, TIFF").size(13),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
    };

    let drop_area = mouse_area(
        container(body)
            .padding(32)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(move |theme: &Theme| drop_area_style(theme, drop_hover)),
    )
    .on_press(Message::BrowseImage);

    let generate = button(container(text("Generate Report")).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(12)
        .on_press_maybe(session.can_generate().then_some(Message::Generate));

    let upload = panel(
        "Upload Medical Image",
        column![drop_area, generate].spacing(24),
    );
    let report = panel(
        "Report Preview",
        placeholder("Awaiting image upload. The generated report will appear here."),
    );

    row![upload, report].spacing(32).into()
}

fn drop_area_style(theme: &Theme, hovered: bool) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    let (border_color, background) = if hovered {
        (
            palette.primary.strong.color,
            Some(Background::Color(Color {
                a: 0.15,
                ..palette.primary.weak.color
            })),
        )
    } else {
        (palette.background.strong.color, None)
    };

    iced::widget::container::Style {
        background,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
