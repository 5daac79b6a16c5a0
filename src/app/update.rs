// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Wall input becomes [`Board`] transitions; the requests they produce run as
//! Iced tasks through [`flow::run`], and finished outcomes are folded back
//! into the board. The effects the board asks for (bursts, toasts,
//! diagnostics reports) are carried out here.

use super::Message;
use crate::application::board::{Board, Effect, RemoteCall, Report, ReportLevel};
use crate::application::flow::{self, Outcome, Request, Services};
use crate::diagnostics::{
    report_path, AppOperation, AppStateEvent, DiagnosticsCollector, DiagnosticsHandle, Endpoint,
    ErrorEvent, ErrorType, UserAction, WarningEvent, WarningType,
};
use crate::domain::comment::Reaction;
use crate::ui::feedback::FeedbackLayer;
use crate::ui::notifications::{self, Notification};
use crate::ui::wall;
use iced::Task;
use std::path::Path;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub board: &'a mut Board,
    pub services: &'a Services,
    pub feedback: &'a mut FeedbackLayer,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
    /// Where diagnostics reports go; `None` when no data directory resolves.
    pub data_dir: Option<&'a Path>,
}

/// Runs `request` in the background and reports back with [`Message::Completed`].
///
/// The remote call is timed and logged as an operation through `diagnostics`.
pub fn dispatch(services: &Services, diagnostics: DiagnosticsHandle, request: Request) -> Task<Message> {
    let services = services.clone();
    let endpoint = Endpoint::from(RemoteCall::from(&request));

    Task::perform(
        async move {
            let started_at = Instant::now();
            let outcome = flow::run(services, request).await;
            diagnostics.log_operation(AppOperation::new(
                endpoint,
                started_at.elapsed(),
                outcome.succeeded(),
            ));
            outcome
        },
        Message::Completed,
    )
}

/// Dispatches a batch of requests concurrently.
pub fn dispatch_all(
    services: &Services,
    diagnostics: &DiagnosticsHandle,
    requests: Vec<Request>,
) -> Task<Message> {
    Task::batch(
        requests
            .into_iter()
            .map(|request| dispatch(services, diagnostics.clone(), request)),
    )
}

fn dispatch_maybe(ctx: &UpdateContext<'_>, request: Option<Request>) -> Task<Message> {
    match request {
        Some(request) => dispatch(ctx.services, ctx.diagnostics.handle(), request),
        None => Task::none(),
    }
}

pub fn handle_wall_message(ctx: &mut UpdateContext<'_>, message: wall::Message) -> Task<Message> {
    match message {
        wall::Message::DraftChanged(text) => {
            ctx.board.edit_draft(text);
            Task::none()
        }
        wall::Message::Submit => {
            let request = ctx.board.submit();
            if request.is_some() {
                ctx.diagnostics.log_action(UserAction::SubmitComment);
            }
            dispatch_maybe(ctx, request)
        }
        wall::Message::Like(id) => {
            let comment_id = id.as_str().to_string();
            let request = ctx.board.react(id, Reaction::Like);
            if request.is_some() {
                ctx.diagnostics
                    .log_action(UserAction::LikeComment { comment_id });
            }
            dispatch_maybe(ctx, request)
        }
        wall::Message::Dislike(id) => {
            let comment_id = id.as_str().to_string();
            let request = ctx.board.react(id, Reaction::Dislike);
            if request.is_some() {
                ctx.diagnostics
                    .log_action(UserAction::DislikeComment { comment_id });
            }
            dispatch_maybe(ctx, request)
        }
        wall::Message::Translate(id) => {
            let request = ctx.board.translate(&id);
            if request.is_some() {
                ctx.diagnostics.log_action(UserAction::TranslateComment {
                    comment_id: id.as_str().to_string(),
                });
            }
            dispatch_maybe(ctx, request)
        }
        wall::Message::Refresh => {
            let request = ctx.board.refresh();
            if request.is_some() {
                ctx.diagnostics.log_action(UserAction::RefreshComments);
            }
            dispatch_maybe(ctx, request)
        }
        wall::Message::ExportDiagnostics => {
            ctx.diagnostics.log_action(UserAction::ExportDiagnostics);
            export_diagnostics(ctx);
            Task::none()
        }
    }
}

/// Folds a finished flow into the board and carries out its effects.
pub fn handle_completed(ctx: &mut UpdateContext<'_>, outcome: Outcome, now: Instant) {
    let had_city = ctx.board.city().is_some();
    let effects = ctx.board.apply(outcome);

    if !had_city {
        if let Some(city) = ctx.board.city() {
            ctx.diagnostics.log_state(AppStateEvent::CityResolved {
                known: !city.is_unknown(),
            });
        }
    }

    apply_effects(ctx, effects, now);
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.diagnostics.process_pending();
    ctx.notifications.tick(now);
    ctx.feedback.tick(now);
}

pub fn handle_window_opened(ctx: &mut UpdateContext<'_>) {
    ctx.feedback.mark_surface_ready();
    ctx.diagnostics.log_state(AppStateEvent::WindowOpened);
}

fn apply_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>, now: Instant) {
    for effect in effects {
        match effect {
            Effect::Burst(symbol) => {
                ctx.feedback.spawn(symbol, now);
            }
            Effect::Notify(notice) => ctx.notifications.push(Notification::from(notice)),
            Effect::Report(report) => log_report(ctx.diagnostics, report),
        }
    }
}

fn log_report(diagnostics: &mut DiagnosticsCollector, report: Report) {
    let endpoint = Endpoint::from(report.call);
    match report.level {
        ReportLevel::Warning => diagnostics.log_warning(
            WarningEvent::new(WarningType::NetworkError, report.message).with_endpoint(endpoint),
        ),
        ReportLevel::Error => diagnostics.log_error(
            ErrorEvent::new(ErrorType::NetworkError, report.message).with_endpoint(endpoint),
        ),
    }
}

fn export_diagnostics(ctx: &mut UpdateContext<'_>) {
    ctx.diagnostics.process_pending();

    let Some(dir) = ctx.data_dir else {
        let reason = "no data directory available";
        ctx.diagnostics
            .log_error(ErrorEvent::new(ErrorType::ExportError, reason));
        ctx.notifications.push(
            Notification::error("notification-diagnostics-export-failed")
                .with_arg("reason", reason),
        );
        return;
    };

    match ctx.diagnostics.export_to_file(report_path(dir)) {
        Ok(path) => ctx.notifications.push(
            Notification::success("notification-diagnostics-exported")
                .with_arg("path", path.display().to_string()),
        ),
        Err(err) => {
            ctx.diagnostics
                .log_error(ErrorEvent::new(ErrorType::ExportError, err.to_string()));
            ctx.notifications.push(
                Notification::error("notification-diagnostics-export-failed")
                    .with_arg("reason", err.to_string()),
            );
        }
    }
}
