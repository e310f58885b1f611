// SPDX-License-Identifier: MPL-2.0
//! View rendering for the playground.
//!
//! The controls fill the window; the toast overlay is stacked on top.

use super::Message;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::toasts::{toast_style, Position, Status, ToastContainer};
use iced::widget::{button, pick_list, text_input, toggler, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};

const POSITIONS: &[Position] = &Position::ALL;

/// Context required to render the playground.
pub struct ViewContext<'a> {
    pub draft: &'a str,
    pub toasts: &'a ToastContainer,
}

/// Renders the controls with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new("Toast playground").size(typography::TITLE_MD);

    let input = text_input("Message", ctx.draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::Publish(Status::Info))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let publish_row = Status::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, status| {
            row.push(publish_button(status))
        });

    let position_picker = pick_list(
        POSITIONS,
        Some(ctx.toasts.current_position()),
        Message::PositionSelected,
    )
    .padding(spacing::XS);

    let position_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Position").size(typography::BODY))
        .push(position_picker);

    let light_toggle = toggler(ctx.toasts.is_light_background())
        .label("Light background")
        .on_toggle(Message::LightBackgroundToggled);

    let hint = Text::new("Click a toast to dismiss it. Escape clears them all.")
        .size(typography::CAPTION);

    let controls = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(input)
        .push(publish_row)
        .push(position_row)
        .push(light_toggle)
        .push(hint);

    let content = Container::new(controls)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::LG);

    Stack::new()
        .push(content)
        .push(ctx.toasts.view().map(Message::Toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Button publishing the draft with `status`, painted in that status' color.
fn publish_button(status: Status) -> Element<'static, Message> {
    let colors = toast_style(status, false);

    button(Text::new(status.as_str()).size(typography::BODY))
        .on_press(Message::Publish(status))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(move |_theme: &Theme, state: button::Status| {
            let background = match state {
                button::Status::Hovered | button::Status::Pressed => colors.faded(0.85).background,
                button::Status::Active | button::Status::Disabled => colors.background,
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color: colors.text,
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
