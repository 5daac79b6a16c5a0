// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action (Submit): amber with white text.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, shadow) = match status {
        button::Status::Active => (colors.brand_primary, shadow::SM),
        button::Status::Hovered => (colors.brand_hover, shadow::MD),
        button::Status::Pressed => (colors.brand_pressed, shadow::SM),
        button::Status::Disabled => return disabled(theme, status),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_pressed,
            width: 0.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Per-comment actions (like, dislike, translate) and footer buttons.
pub fn action(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Active => colors.action,
        button::Status::Hovered | button::Status::Pressed => colors.action_hover,
        button::Status::Disabled => return disabled(theme, status),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.action_text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grayed out, non-interactive.
pub fn disabled(theme: &Theme, _status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    button::Style {
        background: Some(Background::Color(colors.disabled)),
        text_color: colors.text_secondary,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn primary_is_amber_with_white_text() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::AMBER_500))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn disabled_primary_falls_back_to_disabled_style() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().disabled))
        );
    }

    #[test]
    fn action_uses_pale_amber_in_light_mode() {
        let style = action(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::AMBER_150))
        );
    }
}
