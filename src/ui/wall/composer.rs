// SPDX-License-Identifier: MPL-2.0
//! Draft input and submit button.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let can_submit = ctx.board.can_submit();

    let mut input = text_input(&ctx.catalog.tr("composer-placeholder"), ctx.board.draft())
        .padding(spacing::SM)
        .size(typography::BODY)
        .width(Length::Fill);
    if ctx.board.is_api_configured() {
        input = input.on_input(Message::DraftChanged);
        if can_submit {
            input = input.on_submit(Message::Submit);
        }
    }

    let submit = button(Text::new(ctx.catalog.tr("composer-submit")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(can_submit.then_some(Message::Submit));

    let actions = Row::new()
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(submit)
        .align_y(alignment::Vertical::Center);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(input)
            .push(actions),
    )
    .padding(spacing::CARD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
