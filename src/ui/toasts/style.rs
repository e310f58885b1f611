// SPDX-License-Identifier: MPL-2.0
//! Toast colors.
//!
//! [`toast_style`] picks a color set from the status and the container's
//! `light_background` flag. [`ToastStyle::faded`] applies the fade curve, and
//! [`ToastStyle::container`] turns the result into an iced container style.

use super::toast::Status;
use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color};

/// Colors of one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub background: Color,
    pub text: Color,
    pub border: Option<Color>,
    /// Checkmark tint.
    pub icon: Color,
}

/// Returns the colors for `status`.
///
/// The solid set uses saturated backgrounds with black text; the light set
/// uses pale backgrounds with a matching text color and a thin border.
#[must_use]
pub fn toast_style(status: Status, light_background: bool) -> ToastStyle {
    if light_background {
        let (text, background, border) = match status {
            Status::Success => (
                palette::SUCCESS_LIGHT_TEXT,
                palette::SUCCESS_LIGHT_BG,
                palette::SUCCESS_LIGHT_BORDER,
            ),
            Status::Info => (
                palette::INFO_LIGHT_TEXT,
                palette::INFO_LIGHT_BG,
                palette::INFO_LIGHT_BORDER,
            ),
            Status::Warning => (
                palette::WARNING_LIGHT_TEXT,
                palette::WARNING_LIGHT_BG,
                palette::WARNING_LIGHT_BORDER,
            ),
            Status::Error => (
                palette::ERROR_LIGHT_TEXT,
                palette::ERROR_LIGHT_BG,
                palette::ERROR_LIGHT_BORDER,
            ),
        };
        ToastStyle {
            background,
            text,
            border: Some(border),
            icon: text,
        }
    } else {
        let background = match status {
            Status::Success => palette::SUCCESS_SOLID,
            Status::Info => palette::INFO_SOLID,
            Status::Warning => palette::WARNING_SOLID,
            Status::Error => palette::ERROR_SOLID,
        };
        ToastStyle {
            background,
            text: palette::BLACK,
            border: None,
            icon: palette::WHITE,
        }
    }
}

impl ToastStyle {
    /// Multiplies every color's alpha by `opacity`.
    #[must_use]
    pub fn faded(self, opacity: f32) -> Self {
        let fade = |color: Color| Color {
            a: color.a * opacity,
            ..color
        };
        Self {
            background: fade(self.background),
            text: fade(self.text),
            border: self.border.map(fade),
            icon: fade(self.icon),
        }
    }

    /// Container style for the toast body.
    #[must_use]
    pub fn container(self) -> container::Style {
        container::Style {
            background: Some(Background::Color(self.background)),
            border: Border {
                color: self.border.unwrap_or(Color::TRANSPARENT),
                width: if self.border.is_some() {
                    border::WIDTH_SM
                } else {
                    0.0
                },
                radius: radius::TOAST.into(),
            },
            shadow: shadow::NONE,
            text_color: Some(self.text),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_is_pure() {
        for status in Status::ALL {
            for light in [false, true] {
                assert_eq!(toast_style(status, light), toast_style(status, light));
            }
        }
    }

    #[test]
    fn solid_backgrounds_are_distinct_per_status() {
        let backgrounds: Vec<Color> = Status::ALL
            .iter()
            .map(|s| toast_style(*s, false).background)
            .collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn solid_variant_has_no_border() {
        let style = toast_style(Status::Error, false);
        assert_eq!(style.background, palette::ERROR_SOLID);
        assert!(style.border.is_none());
        assert_eq!(style.icon, palette::WHITE);
    }

    #[test]
    fn light_variant_sets_text_background_and_border() {
        let style = toast_style(Status::Warning, true);
        assert_eq!(style.text, palette::WARNING_LIGHT_TEXT);
        assert_eq!(style.background, palette::WARNING_LIGHT_BG);
        assert_eq!(style.border, Some(palette::WARNING_LIGHT_BORDER));
        assert_eq!(style.icon, style.text);
    }

    #[test]
    fn faded_scales_alpha_only() {
        let style = toast_style(Status::Info, true).faded(0.5);
        assert_eq!(style.background.a, 0.5);
        assert_eq!(style.background.r, palette::INFO_LIGHT_BG.r);
        assert_eq!(style.border.map(|c| c.a), Some(0.5));
    }

    #[test]
    fn container_style_uses_border_only_when_present() {
        let solid = toast_style(Status::Success, false).container();
        assert_eq!(solid.border.width, 0.0);

        let light = toast_style(Status::Success, true).container();
        assert_eq!(light.border.width, border::WIDTH_SM);
        assert_eq!(light.border.color, palette::SUCCESS_LIGHT_BORDER);
        assert_eq!(light.text_color, Some(palette::SUCCESS_LIGHT_TEXT));
    }
}
