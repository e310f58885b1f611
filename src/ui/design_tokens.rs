// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens used by the toast widget and the demo
playground, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors and the two toast color sets (solid and light)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toast::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Fade a toast background
let faded = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::SUCCESS_SOLID
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    // Solid toast backgrounds
    pub const SUCCESS_SOLID: Color = Color::from_rgb8(46, 204, 113);
    pub const INFO_SOLID: Color = Color::from_rgb8(236, 240, 241);
    pub const WARNING_SOLID: Color = Color::from_rgb8(241, 196, 15);
    pub const ERROR_SOLID: Color = Color::from_rgb8(231, 76, 60);

    // Light toast variant: text, background, border
    pub const SUCCESS_LIGHT_TEXT: Color = Color::from_rgb8(0x46, 0x88, 0x47);
    pub const SUCCESS_LIGHT_BG: Color = Color::from_rgb8(0xdf, 0xf0, 0xd8);
    pub const SUCCESS_LIGHT_BORDER: Color = Color::from_rgb8(0xd6, 0xe9, 0xc6);

    pub const INFO_LIGHT_TEXT: Color = Color::from_rgb8(0x3a, 0x87, 0xad);
    pub const INFO_LIGHT_BG: Color = Color::from_rgb8(0xd9, 0xed, 0xf7);
    pub const INFO_LIGHT_BORDER: Color = Color::from_rgb8(0xbc, 0xe8, 0xf1);

    pub const WARNING_LIGHT_TEXT: Color = Color::from_rgb8(0xc0, 0x98, 0x53);
    pub const WARNING_LIGHT_BG: Color = Color::from_rgb8(0xfc, 0xf8, 0xe3);
    pub const WARNING_LIGHT_BORDER: Color = Color::from_rgb8(0xfb, 0xee, 0xd5);

    pub const ERROR_LIGHT_TEXT: Color = Color::from_rgb8(0xb9, 0x4a, 0x48);
    pub const ERROR_LIGHT_BG: Color = Color::from_rgb8(0xf2, 0xde, 0xde);
    pub const ERROR_LIGHT_BORDER: Color = Color::from_rgb8(0xee, 0xd3, 0xd7);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;

    /// Gap between stacked toasts
    pub const TOAST_GAP: f32 = 15.0;
    /// Vertical padding inside a toast
    pub const TOAST_PADDING_Y: f32 = 5.0;
    /// Horizontal padding inside a toast
    pub const TOAST_PADDING_X: f32 = 15.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Checkmark glyph drawn in every toast
    pub const TOAST_ICON: f32 = 14.0;
    pub const TOAST_MIN_HEIGHT: f32 = 50.0;
    pub const TOAST_MAX_WIDTH: f32 = 360.0;
    /// Entry/exit slide distance, one toast height
    pub const TOAST_SLIDE: f32 = TOAST_MIN_HEIGHT;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - playground heading
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - toast messages, labels
    pub const BODY: f32 = 14.0;

    /// Caption - hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - light toast outline
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const TOAST: f32 = 5.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::TOAST_MIN_HEIGHT > sizing::TOAST_ICON);
    assert!(sizing::TOAST_MAX_WIDTH > sizing::TOAST_MIN_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_backgrounds_match_their_rgb_values() {
        assert_eq!(palette::SUCCESS_SOLID, Color::from_rgb8(46, 204, 113));
        assert_eq!(palette::ERROR_SOLID.a, 1.0);
    }

    #[test]
    fn light_backgrounds_are_lighter_than_their_text() {
        let pairs = [
            (palette::SUCCESS_LIGHT_BG, palette::SUCCESS_LIGHT_TEXT),
            (palette::INFO_LIGHT_BG, palette::INFO_LIGHT_TEXT),
            (palette::WARNING_LIGHT_BG, palette::WARNING_LIGHT_TEXT),
            (palette::ERROR_LIGHT_BG, palette::ERROR_LIGHT_TEXT),
        ];
        for (bg, text) in pairs {
            assert!(bg.r + bg.g + bg.b > text.r + text.g + text.b);
        }
    }
}
