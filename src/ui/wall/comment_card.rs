// SPDX-License-Identifier: MPL-2.0
//! One comment: text, city and the three actions.

use super::{Message, ViewContext};
use crate::domain::comment::Comment;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

pub fn view<'a>(ctx: &ViewContext<'a>, comment: &'a Comment) -> Element<'a, Message> {
    let catalog = ctx.catalog;
    let api = ctx.board.is_api_configured();

    let body = Text::new(comment.text.as_str()).size(typography::BODY);

    let city = Text::new(catalog.tr_with_args("comment-city", &[("city", comment.city.as_str())]))
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        });

    let likes = comment.likes.to_string();
    let dislikes = comment.dislikes.to_string();

    let like = action_button(
        catalog.tr_with_args("comment-like", &[("count", likes.as_str())]),
        api.then(|| Message::Like(comment.id.clone())),
    );
    let dislike = action_button(
        catalog.tr_with_args("comment-dislike", &[("count", dislikes.as_str())]),
        api.then(|| Message::Dislike(comment.id.clone())),
    );
    let translate = action_button(
        catalog.tr("comment-translate"),
        Some(Message::Translate(comment.id.clone())),
    );

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(like)
        .push(dislike)
        .push(translate);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(body)
            .push(city)
            .push(actions),
    )
    .padding(spacing::CARD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn action_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::action)
        .on_press_maybe(on_press)
        .into()
}
