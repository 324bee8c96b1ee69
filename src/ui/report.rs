use iced::widget::{button, column, container, image, row, text, text_editor};
use iced::{Alignment, Background, Border, Element, Length, Theme};
use iced_aw::Wrap;

use super::editors::ReportEditors;
use super::{panel, preview};
use crate::state::ReportField;
use crate::Message;

/// Report view: finished analysis on the left, editable report on the right
pub fn view<'a>(
    preview_handle: Option<&'a image::Handle>,
    editors: &'a ReportEditors,
) -> Element<'a, Message> {
    let banner = container(
        column![
            text("Analysis Complete"),
            text("Report is ready for review").size(13),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(banner_style);

    let analysis = container(
        column![]
            .push_maybe(preview(preview_handle))
            .push(banner)
            .push(
                button(container(text("Analyze New Image")).center_x(Length::Fill))
                    .width(Length::Fill)
                    .on_press(Message::Reset)
                    .style(button::secondary),
            )
            .spacing(16)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box);

    let sections = ReportField::ALL
        .into_iter()
        .fold(column![].spacing(16), |sections, field| {
            sections.push(
                column![
                    text(field.label()).size(15),
                    text_editor(editors.get(field))
                        .on_action(move |action| Message::Edit(field, action))
                        .height(editor_height(field)),
                ]
                .spacing(6),
            )
        });

    let buttons: Vec<Element<'a, Message>> = vec![
        button("Save Changes")
            .on_press(Message::Save)
            .padding([8, 16])
            .into(),
        button("Download PDF")
            .on_press(Message::Download)
            .padding([8, 16])
            .style(button::secondary)
            .into(),
        button("Clear")
            .on_press(Message::Reset)
            .padding([8, 16])
            .style(button::danger)
            .into(),
    ];
    let actions = Wrap::with_elements(buttons)
        .spacing(12.0)
        .line_spacing(12.0);

    let report = container(column![sections, actions].spacing(24))
        .padding(16)
        .width(Length::Fill)
        .style(container::bordered_box);

    row![
        panel("Image Analysis Complete", analysis),
        panel("AI Generated Report", report),
    ]
    .spacing(32)
    .into()
}

fn editor_height(field: ReportField) -> Length {
    match field {
        ReportField::Findings => Length::Fixed(128.0),
        ReportField::Impression | ReportField::Recommendations => Length::Fixed(96.0),
    }
}

fn banner_style(theme: &Theme) -> container::Style {
    let success = theme.extended_palette().success;

    container::Style {
        text_color: Some(success.strong.color),
        background: Some(Background::Color(success.weak.color)),
        border: Border {
            color: success.base.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
