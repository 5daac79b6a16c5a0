// SPDX-License-Identifier: MPL-2.0
//! Page heading with the detected city.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Text};
use iced::{Element, Theme};

/// Text of the city line: the resolved city, or a pending hint.
#[must_use]
pub fn city_line(ctx: &ViewContext<'_>) -> String {
    match ctx.board.city() {
        Some(city) => ctx
            .catalog
            .tr_with_args("header-city", &[("city", city.as_str())]),
        None => ctx.catalog.tr("header-city-pending"),
    }
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.catalog.tr("header-title"))
        .size(typography::TITLE_MD)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_heading),
        });

    let city = Text::new(city_line(ctx))
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        });

    Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(city)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::board::Board;
    use crate::strings::Catalog;

    #[test]
    fn city_line_shows_pending_hint_until_resolved() {
        let board = Board::new(true);
        let catalog = Catalog::load();
        let ctx = ViewContext {
            board: &board,
            catalog: &catalog,
        };
        assert_eq!(city_line(&ctx), catalog.tr("header-city-pending"));
    }
}
