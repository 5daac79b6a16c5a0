// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the color scheme derived from it.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Page background gradient (135deg)
    pub page_start: Color,
    pub page_end: Color,

    // Surfaces
    pub card: Color,
    pub toast: Color,

    // Text colors
    pub text_heading: Color,
    pub text_primary: Color,
    pub text_secondary: Color,

    // Controls
    pub brand_primary: Color,
    pub brand_hover: Color,
    pub brand_pressed: Color,
    pub action: Color,
    pub action_hover: Color,
    pub action_text: Color,
    pub disabled: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_start: palette::AMBER_50,
            page_end: palette::AMBER_100,

            card: palette::WHITE,
            toast: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },

            text_heading: palette::BROWN_700,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,

            brand_primary: palette::AMBER_500,
            brand_hover: palette::AMBER_600,
            brand_pressed: palette::AMBER_700,
            action: palette::AMBER_150,
            action_hover: palette::AMBER_200,
            action_text: palette::GRAY_900,
            disabled: palette::GRAY_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_start: palette::COCOA_900,
            page_end: palette::COCOA_800,

            card: palette::COCOA_700,
            toast: Color {
                a: opacity::SURFACE,
                ..palette::COCOA_800
            },

            text_heading: palette::AMBER_100,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::AMBER_500,
            brand_hover: palette::AMBER_600,
            brand_pressed: palette::AMBER_700,
            action: palette::COCOA_800,
            action_hover: palette::COCOA_900,
            action_text: palette::AMBER_50,
            disabled: palette::GRAY_700,
        }
    }

    /// Scheme matching an already-resolved Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Dark) {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The wall is a light design; fall back to it when detection fails.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The Iced theme to render with.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
