// SPDX-License-Identifier: MPL-2.0
//! Root view: the wall with the feedback and toast overlays stacked on top.

use super::Message;
use crate::application::board::Board;
use crate::strings::Catalog;
use crate::ui::feedback::FeedbackLayer;
use crate::ui::notifications::{self, Toast};
use crate::ui::wall;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application.
pub struct ViewContext<'a> {
    pub board: &'a Board,
    pub catalog: &'a Catalog,
    pub feedback: &'a FeedbackLayer,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let wall_view = wall::view(&wall::ViewContext {
        board: ctx.board,
        catalog: ctx.catalog,
    })
    .map(Message::Wall);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(wall_view);

    if let Some(bursts) = ctx.feedback.view() {
        stack = stack.push(bursts);
    }

    if ctx.notifications.has_notifications() {
        stack = stack.push(
            Toast::view_overlay(ctx.notifications, ctx.catalog).map(Message::Notification),
        );
    }

    stack.into()
}
