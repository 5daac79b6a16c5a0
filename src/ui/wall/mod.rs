// SPDX-License-Identifier: MPL-2.0
//! The comment wall page.
//!
//! Stateless view over a [`Board`]: header with the detected city, the
//! composer, the scrollable list of comment cards and a footer. User input
//! comes back as [`Message`]s for the application to turn into board
//! transitions.

pub mod comment_card;
pub mod composer;
pub mod header;

use crate::application::board::Board;
use crate::domain::comment::CommentId;
use crate::strings::Catalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, scrollable, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// User input on the wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    DraftChanged(String),
    Submit,
    Like(CommentId),
    Dislike(CommentId),
    Translate(CommentId),
    Refresh,
    ExportDiagnostics,
}

/// Everything the wall reads while rendering.
pub struct ViewContext<'a> {
    pub board: &'a Board,
    pub catalog: &'a Catalog,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let list: Element<'a, Message> = if ctx.board.comments().is_empty() {
        placeholder(ctx)
    } else {
        Column::with_children(
            ctx.board
                .comments()
                .iter()
                .map(|comment| comment_card::view(ctx, comment)),
        )
        .spacing(spacing::SM)
        .into()
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header::view(ctx))
        .push(composer::view(ctx))
        .push(list);

    let body = scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill);

    let page = Column::new()
        .push(body)
        .push(footer(ctx));

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn placeholder<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let key = if ctx.board.is_api_configured() {
        "board-empty"
    } else {
        "board-api-missing"
    };

    Container::new(
        Text::new(ctx.catalog.tr(key))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).text_secondary),
            }),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let refresh = button(Text::new(ctx.catalog.tr("footer-refresh")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::action)
        .on_press_maybe(ctx.board.is_api_configured().then_some(Message::Refresh));

    let export = button(
        Text::new(ctx.catalog.tr("footer-export-diagnostics")).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::action)
    .on_press(Message::ExportDiagnostics);

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(refresh)
            .push(Space::new().width(Length::Fill))
            .push(export),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::LG])
    .into()
}
