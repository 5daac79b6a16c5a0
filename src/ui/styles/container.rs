// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::{Gradient, Linear};
use iced::widget::container;
use iced::{Background, Border, Degrees, Theme};

/// Whole-page background: diagonal warm gradient.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    let gradient = Linear::new(Degrees(135.0))
        .add_stop(0.0, colors.page_start)
        .add_stop(1.0, colors.page_end);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Surface holding one comment, or the composer.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.card)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
