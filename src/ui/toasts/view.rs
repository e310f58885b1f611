// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast stack.
//!
//! The overlay fills its parent and aligns the column of toasts according
//! to the container's [`Placement`](super::Placement), so it is meant to be
//! pushed on top of the application content in a `Stack`.

use super::container::{Message, ToastContainer};
use super::fade;
use super::style::ToastStyle;
use super::toast::Toast;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{mouse_area, svg, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Padding, Theme};

impl ToastContainer {
    /// Renders every live toast, anchored at the configured position.
    pub fn view(&self) -> Element<'_, Message> {
        if self.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let placement = self.current_position().placement();
        let now = self.clock();

        let toasts: Vec<Element<'_, Message>> = self
            .toasts()
            .map(|toast| {
                let progress = toast.progress(now);
                let style = self.style_for(toast).faded(fade::opacity(progress));
                let offset = fade::slide(progress) * sizing::TOAST_SLIDE;
                view_toast(toast, style, offset)
            })
            .collect();

        // Columns follow the anchor side so left and centered stacks hug
        // their edge instead of right-aligning inside a full-width overlay.
        let column = Column::with_children(toasts)
            .spacing(spacing::TOAST_GAP)
            .align_x(placement.align_x);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(placement.align_x)
            .align_y(placement.align_y)
            .padding(placement.padding)
            .into()
    }
}

/// Renders one toast: checkmark, then the message. Clicking dismisses it.
///
/// `offset` pushes the toast down by that many pixels. It is layout padding,
/// so neighbors in the stack move with it.
fn view_toast(toast: &Toast, style: ToastStyle, offset: f32) -> Element<'_, Message> {
    let icon = icons::checkmark()
        .width(Length::Fixed(sizing::TOAST_ICON))
        .height(Length::Fixed(sizing::TOAST_ICON))
        .style(move |_theme: &Theme, _status| svg::Style {
            color: Some(style.icon),
        });

    let message = Text::new(toast.message())
        .size(typography::BODY)
        .color(style.text);

    // Zero-width strut enforcing the minimum toast height.
    let strut = Space::new().height(Length::Fixed(sizing::TOAST_MIN_HEIGHT));

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(strut)
        .push(icon)
        .push(message);

    let body = Container::new(content)
        .max_width(sizing::TOAST_MAX_WIDTH)
        .padding(Padding {
            top: spacing::TOAST_PADDING_Y,
            right: spacing::TOAST_PADDING_X,
            bottom: spacing::TOAST_PADDING_Y,
            left: spacing::TOAST_PADDING_X,
        })
        .style(move |_theme: &Theme| style.container());

    let clickable = mouse_area(body).on_press(Message::Dismiss(toast.id()));

    Container::new(clickable)
        .padding(Padding {
            top: offset,
            ..Padding::ZERO
        })
        .into()
}
