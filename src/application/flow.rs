// SPDX-License-Identifier: MPL-2.0
//! Remote flows executed on behalf of the board.
//!
//! The [`Board`](super::board::Board) never performs I/O. Its transitions
//! produce [`Request`]s; [`run`] executes one request against the ports in
//! [`Services`] and reports back a single [`Outcome`] that the board folds
//! into its state.
//!
//! Mutating requests (create, like, dislike) always chain exactly one list
//! refresh after the mutation, whatever the mutation's result.

use super::port::{
    ApiError, CityLocator, CommentApi, LookupError, TranslationError, Translator,
};
use crate::domain::comment::{Comment, CommentId, NewComment, Reaction};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// =============================================================================
// Fetch ordering
// =============================================================================

/// Ordering token for list fetches.
///
/// Tickets are drawn right before the `GET` is sent, so a higher ticket
/// always belongs to a request that left later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic source of [`FetchTicket`]s shared by all in-flight flows.
#[derive(Debug, Default)]
pub struct FetchClock {
    last: AtomicU64,
}

impl FetchClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket (the first one is `1`).
    pub fn issue(&self) -> FetchTicket {
        FetchTicket(self.last.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

// =============================================================================
// Services
// =============================================================================

/// Port adapters used by the flows. Cheap to clone.
#[derive(Clone)]
pub struct Services {
    comments: Option<Arc<dyn CommentApi>>,
    locator: Arc<dyn CityLocator>,
    translator: Arc<dyn Translator>,
    clock: Arc<FetchClock>,
}

impl Services {
    /// Bundles the adapters. `comments` is `None` when no base URL is configured.
    pub fn new(
        comments: Option<Arc<dyn CommentApi>>,
        locator: Arc<dyn CityLocator>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            comments,
            locator,
            translator,
            clock: Arc::new(FetchClock::new()),
        }
    }

    /// Whether a comment service is reachable at all.
    #[must_use]
    pub fn has_comment_api(&self) -> bool {
        self.comments.is_some()
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("has_comment_api", &self.has_comment_api())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Requests and outcomes
// =============================================================================

/// A remote operation requested by a board transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Re-fetch the full comment list.
    Refresh,
    /// Create a comment, then refresh.
    Create(NewComment),
    /// Send a reaction, then refresh.
    React { id: CommentId, reaction: Reaction },
    /// Translate a comment's text.
    Translate { id: CommentId, text: String },
    /// Resolve the visitor's city.
    LocateCity,
}

/// Result of one list fetch.
#[derive(Debug, Clone)]
pub struct Refresh {
    pub ticket: FetchTicket,
    pub result: Result<Vec<Comment>, ApiError>,
}

/// What came back from executing a [`Request`].
#[derive(Debug, Clone)]
pub enum Outcome {
    Refreshed(Refresh),
    Submitted {
        comment: NewComment,
        result: Result<(), ApiError>,
        refresh: Refresh,
    },
    Reacted {
        id: CommentId,
        reaction: Reaction,
        result: Result<(), ApiError>,
        refresh: Refresh,
    },
    Located(Result<Option<String>, LookupError>),
    Translated {
        id: CommentId,
        result: Result<String, TranslationError>,
    },
}

impl Outcome {
    /// Whether the primary call of the flow succeeded. The chained refresh
    /// of a mutation does not count.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        match self {
            Outcome::Refreshed(refresh) => refresh.result.is_ok(),
            Outcome::Submitted { result, .. } | Outcome::Reacted { result, .. } => result.is_ok(),
            Outcome::Located(result) => result.is_ok(),
            Outcome::Translated { result, .. } => result.is_ok(),
        }
    }
}

// =============================================================================
// Execution
// =============================================================================

/// Executes a request against the configured ports.
pub async fn run(services: Services, request: Request) -> Outcome {
    match request {
        Request::Refresh => Outcome::Refreshed(refresh(&services).await),
        Request::Create(comment) => {
            let result = match &services.comments {
                Some(api) => api.create(comment.clone()).await,
                None => Err(ApiError::NotConfigured),
            };
            let refresh = refresh(&services).await;
            Outcome::Submitted {
                comment,
                result,
                refresh,
            }
        }
        Request::React { id, reaction } => {
            let result = match &services.comments {
                Some(api) => api.react(id.clone(), reaction).await,
                None => Err(ApiError::NotConfigured),
            };
            let refresh = refresh(&services).await;
            Outcome::Reacted {
                id,
                reaction,
                result,
                refresh,
            }
        }
        Request::Translate { id, text } => Outcome::Translated {
            id,
            result: services.translator.translate(text).await,
        },
        Request::LocateCity => Outcome::Located(services.locator.locate().await),
    }
}

async fn refresh(services: &Services) -> Refresh {
    let ticket = services.clock.issue();
    let result = match &services.comments {
        Some(api) => api.list().await,
        None => Err(ApiError::NotConfigured),
    };
    Refresh { ticket, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{comment, Call, FakeCommentApi, FakeLocator, FakeTranslator};

    fn services_with(api: &Arc<FakeCommentApi>) -> Services {
        Services::new(
            Some(api.clone() as Arc<dyn CommentApi>),
            Arc::new(FakeLocator::city("Paris")),
            Arc::new(FakeTranslator::answering("hello")),
        )
    }

    #[test]
    fn clock_issues_increasing_tickets() {
        let clock = FetchClock::new();
        let first = clock.issue();
        let second = clock.issue();
        assert_eq!(first.value(), 1);
        assert!(second > first);
    }

    #[tokio::test]
    async fn create_sends_one_post_then_one_refresh() {
        let api = Arc::new(FakeCommentApi::with_comments(vec![comment("1", "hi", 0, 0)]));
        let new_comment = NewComment::from_draft(
            "hello",
            crate::domain::comment::DetectedCity::new("Paris"),
        )
        .expect("valid draft");

        let outcome = run(services_with(&api), Request::Create(new_comment.clone())).await;

        assert_eq!(api.calls(), vec![Call::Create(new_comment), Call::List]);
        assert!(matches!(outcome, Outcome::Submitted { result: Ok(()), .. }));
    }

    #[tokio::test]
    async fn failed_create_still_refreshes_once() {
        let api = Arc::new(FakeCommentApi::with_comments(Vec::new()));
        api.fail_mutations(ApiError::Status(500));
        let new_comment = NewComment::from_draft(
            "hello",
            crate::domain::comment::DetectedCity::unknown(),
        )
        .expect("valid draft");

        let outcome = run(services_with(&api), Request::Create(new_comment)).await;

        assert_eq!(api.calls().len(), 2);
        assert_eq!(api.calls()[1], Call::List);
        match outcome {
            Outcome::Submitted { result, .. } => assert_eq!(result, Err(ApiError::Status(500))),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn like_posts_to_reaction_then_refreshes() {
        let api = Arc::new(FakeCommentApi::with_comments(vec![comment("1", "hi", 2, 0)]));

        let outcome = run(
            services_with(&api),
            Request::React {
                id: CommentId::new("1"),
                reaction: Reaction::Like,
            },
        )
        .await;

        assert_eq!(
            api.calls(),
            vec![
                Call::React(CommentId::new("1"), Reaction::Like),
                Call::List
            ]
        );
        match outcome {
            Outcome::Reacted { refresh, .. } => {
                let list = refresh.result.expect("refresh succeeds");
                assert_eq!(list[0].likes, 3);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn refresh_without_api_makes_no_call() {
        let services = Services::new(
            None,
            Arc::new(FakeLocator::city("Paris")),
            Arc::new(FakeTranslator::answering("hello")),
        );

        let outcome = run(services, Request::Refresh).await;

        match outcome {
            Outcome::Refreshed(refresh) => {
                assert_eq!(refresh.result, Err(ApiError::NotConfigured));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn each_refresh_draws_a_newer_ticket() {
        let api = Arc::new(FakeCommentApi::with_comments(Vec::new()));
        let services = services_with(&api);

        let first = run(services.clone(), Request::Refresh).await;
        let second = run(services, Request::Refresh).await;

        match (first, second) {
            (Outcome::Refreshed(a), Outcome::Refreshed(b)) => assert!(b.ticket > a.ticket),
            other => panic!("unexpected outcomes: {other:?}"),
        }
    }

    #[tokio::test]
    async fn translate_forwards_text_to_translator() {
        let translator = Arc::new(FakeTranslator::answering("good morning"));
        let services = Services::new(
            None,
            Arc::new(FakeLocator::city("Paris")),
            translator.clone(),
        );

        let outcome = run(
            services,
            Request::Translate {
                id: CommentId::new("7"),
                text: "bonjour".into(),
            },
        )
        .await;

        assert_eq!(translator.requests(), vec!["bonjour".to_string()]);
        match outcome {
            Outcome::Translated { result, .. } => assert_eq!(result.as_deref(), Ok("good morning")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn mutation_success_ignores_refresh_result() {
        let api = Arc::new(FakeCommentApi::with_comments(vec![comment("1", "hi", 0, 0)]));
        api.fail_list(ApiError::Transport("offline".into()));

        let outcome = run(
            services_with(&api),
            Request::React {
                id: CommentId::new("1"),
                reaction: Reaction::Dislike,
            },
        )
        .await;

        assert!(outcome.succeeded());
    }
}
