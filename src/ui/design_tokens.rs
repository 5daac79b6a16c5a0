// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for every visual decision in the wall: colors, spacing,
sizes, type scale, borders, radii and shadows.

## Organization

- **Palette**: Base colors (warm amber scale plus neutrals)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Geometry of the feedback burst

## Examples

```
use comment_wall::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

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
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Secondary text such as the city line under a comment (#555).
    pub const GRAY_600: Color = Color::from_rgb8(0x55, 0x55, 0x55);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (amber scale)
    pub const AMBER_50: Color = Color::from_rgb8(0xff, 0xf3, 0xcd); // Page gradient start
    pub const AMBER_100: Color = Color::from_rgb8(0xff, 0xe8, 0xa1); // Page gradient end
    pub const AMBER_150: Color = Color::from_rgb8(0xff, 0xf1, 0xc1); // Action buttons
    pub const AMBER_200: Color = Color::from_rgb8(0xff, 0xe0, 0x8a); // Action hover
    pub const AMBER_500: Color = Color::from_rgb8(0xff, 0xb3, 0x00); // Primary button
    pub const AMBER_600: Color = Color::from_rgb8(0xf0, 0xa0, 0x00); // Primary hover
    pub const AMBER_700: Color = Color::from_rgb8(0xd9, 0x8e, 0x00); // Primary pressed
    pub const BROWN_700: Color = Color::from_rgb8(0x7a, 0x4f, 0x01); // Headings

    // Dark surfaces
    pub const COCOA_900: Color = Color::from_rgb8(0x24, 0x1c, 0x10);
    pub const COCOA_800: Color = Color::from_rgb8(0x33, 0x28, 0x17);
    pub const COCOA_700: Color = Color::from_rgb8(0x45, 0x36, 0x1f);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - toasts and cards
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    /// Card inner padding.
    pub const CARD: f32 = 14.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 32.0;

    /// Height of the comment composer text area.
    pub const COMPOSER_HEIGHT: f32 = 96.0;

    /// Content column is centered and never wider than this.
    pub const CONTENT_MAX_WIDTH: f32 = 640.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading ("Add Comment").
    pub const TITLE_MD: f32 = 22.0;

    /// Feedback burst glyph.
    pub const BURST: f32 = 26.0;

    /// Comment text, buttons, form input.
    pub const BODY: f32 = 15.0;

    /// City line under each comment.
    pub const BODY_SM: f32 = 13.0;

    /// Footer and hints.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accent stripe.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft card shadow.
    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.08,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Vertical distance travelled by a burst glyph (20px below to 60px above its anchor).
    pub const BURST_RISE: f32 = 80.0;

    /// Fraction of the window height above the burst anchor.
    pub const BURST_ANCHOR_PORTION: u16 = 6;

    /// Fraction of the window height below the burst anchor.
    pub const BURST_TAIL_PORTION: u16 = 4;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::CARD > spacing::SM);
    assert!(spacing::MD > spacing::CARD);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::TOAST_WIDTH);

    // Typography validation
    assert!(typography::BURST > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Motion validation
    assert!(motion::BURST_RISE > typography::BURST);
    assert!(motion::BURST_ANCHOR_PORTION > motion::BURST_TAIL_PORTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn burst_anchor_sits_at_sixty_percent() {
        let total = f32::from(motion::BURST_ANCHOR_PORTION + motion::BURST_TAIL_PORTION);
        let anchor = f32::from(motion::BURST_ANCHOR_PORTION) / total;
        assert!((anchor - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn primary_amber_matches_brand_hex() {
        let amber = palette::AMBER_500;
        assert!((amber.r - 1.0).abs() < f32::EPSILON);
        assert!(amber.b.abs() < f32::EPSILON);
    }
}
