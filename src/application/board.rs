// SPDX-License-Identifier: MPL-2.0
//! Page-level state container for the comment wall.
//!
//! `Board` owns the three pieces of page state (draft text, comment list,
//! detected city) and exposes one transition per user action. Transitions
//! never perform I/O: user actions return the [`Request`] to execute, and
//! [`Board::apply`] folds the resulting [`Outcome`] back in, returning the
//! side effects (feedback burst, notice, diagnostics report) for the caller
//! to carry out.
//!
//! # Invariants
//!
//! - The comment list is only ever replaced wholesale by a fetched snapshot.
//! - A snapshot older than the one already shown is discarded.
//! - Counters are never adjusted locally.
//! - A blank draft never produces a request.
//! - The city is resolved at most once.

use super::flow::{FetchTicket, Outcome, Refresh, Request};
use super::port::ApiError;
use crate::domain::comment::{Comment, CommentId, DetectedCity, NewComment, Reaction};
use crate::domain::feedback::Symbol;
use std::time::Duration;

/// How long a translation notice stays up; long texts need time to read.
pub const TRANSLATION_NOTICE_DURATION: Duration = Duration::from_secs(8);

// =============================================================================
// Effects
// =============================================================================

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Play the transient feedback burst.
    Burst(Symbol),
    /// Show a non-blocking notice to the user.
    Notify(Notice),
    /// Record a problem on the developer-facing diagnostics channel.
    Report(Report),
}

/// Kind of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-facing notice: a message key plus interpolation arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message_key: &'static str,
    pub args: Vec<(String, String)>,
    /// Overrides the default display duration.
    pub display_for: Option<Duration>,
}

impl Notice {
    fn new(kind: NoticeKind, message_key: &'static str) -> Self {
        Self {
            kind,
            message_key,
            args: Vec::new(),
            display_for: None,
        }
    }

    fn success(message_key: &'static str) -> Self {
        Self::new(NoticeKind::Success, message_key)
    }

    fn error(message_key: &'static str) -> Self {
        Self::new(NoticeKind::Error, message_key)
    }

    fn with_arg(mut self, key: &str, value: impl Into<String>) -> Self {
        self.args.push((key.to_string(), value.into()));
        self
    }
}

/// Remote call a [`Report`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteCall {
    ListComments,
    CreateComment,
    React(Reaction),
    LocateCity,
    Translate,
}

impl From<&Request> for RemoteCall {
    fn from(request: &Request) -> Self {
        match request {
            Request::Refresh => RemoteCall::ListComments,
            Request::Create(_) => RemoteCall::CreateComment,
            Request::React { reaction, .. } => RemoteCall::React(*reaction),
            Request::Translate { .. } => RemoteCall::Translate,
            Request::LocateCity => RemoteCall::LocateCity,
        }
    }
}

/// Severity of a diagnostics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Warning,
    Error,
}

/// A failure worth recording for developers but not necessarily the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub call: RemoteCall,
    pub message: String,
}

impl Report {
    fn warning(call: RemoteCall, message: impl ToString) -> Self {
        Self {
            level: ReportLevel::Warning,
            call,
            message: message.to_string(),
        }
    }

    fn error(call: RemoteCall, message: impl ToString) -> Self {
        Self {
            level: ReportLevel::Error,
            call,
            message: message.to_string(),
        }
    }
}

// =============================================================================
// Board
// =============================================================================

/// Page state plus the transitions that drive it.
#[derive(Debug, Clone, Default)]
pub struct Board {
    draft: String,
    comments: Vec<Comment>,
    city: Option<DetectedCity>,
    api_configured: bool,
    shown_snapshot: Option<FetchTicket>,
}

impl Board {
    /// Creates an empty board. Without a comment API every comment flow is a no-op.
    #[must_use]
    pub fn new(api_configured: bool) -> Self {
        Self {
            api_configured,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The resolved city, or `None` while the lookup is still in flight.
    #[must_use]
    pub fn city(&self) -> Option<&DetectedCity> {
        self.city.as_ref()
    }

    #[must_use]
    pub fn is_api_configured(&self) -> bool {
        self.api_configured
    }

    /// Whether the draft would currently be accepted for submission.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.api_configured && !self.draft.trim().is_empty()
    }

    /// Requests issued once when the page starts.
    #[must_use]
    pub fn startup(&self) -> Vec<Request> {
        let mut requests = Vec::with_capacity(2);
        if let Some(refresh) = self.refresh() {
            requests.push(refresh);
        }
        if self.city.is_none() {
            requests.push(Request::LocateCity);
        }
        requests
    }

    /// Replaces the draft text.
    pub fn edit_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Validates the draft and builds the creation request.
    ///
    /// Blank drafts and a missing comment API yield `None`. A submission made
    /// before the city lookup finished carries `Unknown`.
    #[must_use]
    pub fn submit(&self) -> Option<Request> {
        if !self.api_configured {
            return None;
        }
        let city = self.city.clone().unwrap_or_default();
        NewComment::from_draft(&self.draft, city).map(Request::Create)
    }

    /// Builds a like/dislike request. There is no de-duplication.
    #[must_use]
    pub fn react(&self, id: CommentId, reaction: Reaction) -> Option<Request> {
        self.api_configured
            .then_some(Request::React { id, reaction })
    }

    /// Builds a list refresh request.
    #[must_use]
    pub fn refresh(&self) -> Option<Request> {
        self.api_configured.then_some(Request::Refresh)
    }

    /// Builds a translation request for a comment currently shown.
    ///
    /// Unknown ids yield `None`.
    #[must_use]
    pub fn translate(&self, id: &CommentId) -> Option<Request> {
        self.find(id).map(|comment| Request::Translate {
            id: comment.id.clone(),
            text: comment.text.clone(),
        })
    }

    /// Looks up a comment in the current snapshot.
    #[must_use]
    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| &comment.id == id)
    }

    /// Folds the result of a remote flow into the board.
    pub fn apply(&mut self, outcome: Outcome) -> Vec<Effect> {
        let mut effects = Vec::new();
        match outcome {
            Outcome::Refreshed(refresh) => self.apply_refresh(refresh, &mut effects),
            Outcome::Submitted {
                comment,
                result,
                refresh,
            } => {
                match result {
                    Ok(()) => {
                        // Keep whatever the user typed while the request was in flight.
                        if self.draft == comment.text {
                            self.draft.clear();
                        }
                        effects.push(Effect::Burst(Symbol::Star));
                    }
                    Err(error) => {
                        effects.push(Effect::Report(Report::error(
                            RemoteCall::CreateComment,
                            &error,
                        )));
                        effects.push(Effect::Notify(mutation_failed(
                            "notification-submit-failed",
                            &error,
                        )));
                    }
                }
                self.apply_refresh(refresh, &mut effects);
            }
            Outcome::Reacted {
                id: _,
                reaction,
                result,
                refresh,
            } => {
                match result {
                    Ok(()) => effects.push(Effect::Burst(reaction.symbol())),
                    Err(error) => {
                        effects.push(Effect::Report(Report::error(
                            RemoteCall::React(reaction),
                            &error,
                        )));
                        effects.push(Effect::Notify(mutation_failed(
                            "notification-reaction-failed",
                            &error,
                        )));
                    }
                }
                self.apply_refresh(refresh, &mut effects);
            }
            Outcome::Located(result) => {
                if self.city.is_some() {
                    return effects;
                }
                let city = match result {
                    Ok(city) => DetectedCity::from_lookup(city),
                    Err(error) => {
                        effects.push(Effect::Report(Report::warning(
                            RemoteCall::LocateCity,
                            &error,
                        )));
                        DetectedCity::unknown()
                    }
                };
                self.city = Some(city);
            }
            Outcome::Translated { id: _, result } => match result {
                Ok(text) => {
                    let mut notice =
                        Notice::success("notification-translation-success").with_arg("text", text);
                    notice.display_for = Some(TRANSLATION_NOTICE_DURATION);
                    effects.push(Effect::Notify(notice));
                }
                Err(error) => {
                    effects.push(Effect::Report(Report::error(RemoteCall::Translate, &error)));
                    effects.push(Effect::Notify(Notice::error(
                        "notification-translation-failed",
                    )));
                }
            },
        }
        effects
    }

    fn apply_refresh(&mut self, refresh: Refresh, effects: &mut Vec<Effect>) {
        match refresh.result {
            Ok(comments) => {
                if self
                    .shown_snapshot
                    .is_some_and(|shown| shown > refresh.ticket)
                {
                    return;
                }
                self.comments = comments;
                self.shown_snapshot = Some(refresh.ticket);
            }
            Err(ApiError::NotConfigured) => {}
            Err(error) => {
                effects.push(Effect::Report(Report::error(RemoteCall::ListComments, &error)));
            }
        }
    }
}

fn mutation_failed(message_key: &'static str, error: &ApiError) -> Notice {
    Notice::error(message_key).with_arg("reason", error.to_string())
}
