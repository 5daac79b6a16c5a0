// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the application ports.
//!
//! The fakes keep a call log so tests can assert exactly which remote
//! requests a flow issued, and in which order.

use crate::application::port::{
    ApiError, CityLocator, CommentApi, LookupError, TranslationError, Translator,
};
use crate::domain::comment::{Comment, CommentId, NewComment, Reaction};
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use std::sync::Mutex;

/// Serializes tests that read or write process environment variables.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Builds a comment with the given counters.
pub fn comment(id: &str, text: &str, likes: u64, dislikes: u64) -> Comment {
    Comment {
        id: CommentId::new(id),
        text: text.to_string(),
        city: "Paris".to_string(),
        likes,
        dislikes,
    }
}

/// A call received by [`FakeCommentApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewComment),
    React(CommentId, Reaction),
}

/// In-memory comment service that behaves like the real one: mutations
/// change the stored collection, and `list` returns the current snapshot.
#[derive(Debug, Default)]
pub struct FakeCommentApi {
    comments: Mutex<Vec<Comment>>,
    calls: Mutex<Vec<Call>>,
    mutation_error: Mutex<Option<ApiError>>,
    list_error: Mutex<Option<ApiError>>,
}

impl FakeCommentApi {
    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments: Mutex::new(comments),
            ..Self::default()
        }
    }

    /// Makes every create/react call fail with `error`.
    pub fn fail_mutations(&self, error: ApiError) {
        *self.mutation_error.lock().unwrap() = Some(error);
    }

    /// Makes every list call fail with `error`.
    pub fn fail_list(&self, error: ApiError) {
        *self.list_error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl CommentApi for FakeCommentApi {
    fn list(&self) -> BoxFuture<'static, Result<Vec<Comment>, ApiError>> {
        self.record(Call::List);
        let result = match self.list_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(self.comments.lock().unwrap().clone()),
        };
        future::ready(result).boxed()
    }

    fn create(&self, new_comment: NewComment) -> BoxFuture<'static, Result<(), ApiError>> {
        self.record(Call::Create(new_comment.clone()));
        if let Some(error) = self.mutation_error.lock().unwrap().clone() {
            return future::ready(Err(error)).boxed();
        }
        let mut comments = self.comments.lock().unwrap();
        let id = CommentId::new((comments.len() + 1).to_string());
        comments.push(Comment {
            id,
            text: new_comment.text,
            city: new_comment.city.to_string(),
            likes: 0,
            dislikes: 0,
        });
        future::ready(Ok(())).boxed()
    }

    fn react(
        &self,
        id: CommentId,
        reaction: Reaction,
    ) -> BoxFuture<'static, Result<(), ApiError>> {
        self.record(Call::React(id.clone(), reaction));
        if let Some(error) = self.mutation_error.lock().unwrap().clone() {
            return future::ready(Err(error)).boxed();
        }
        let mut comments = self.comments.lock().unwrap();
        if let Some(target) = comments.iter_mut().find(|c| c.id == id) {
            match reaction {
                Reaction::Like => target.likes += 1,
                Reaction::Dislike => target.dislikes += 1,
            }
        }
        future::ready(Ok(())).boxed()
    }
}

/// Geolocation fake with a fixed answer.
#[derive(Debug)]
pub struct FakeLocator {
    answer: Result<Option<String>, LookupError>,
    calls: Mutex<usize>,
}

impl FakeLocator {
    pub fn city(name: &str) -> Self {
        Self::answering(Ok(Some(name.to_string())))
    }

    pub fn answering(answer: Result<Option<String>, LookupError>) -> Self {
        Self {
            answer,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CityLocator for FakeLocator {
    fn locate(&self) -> BoxFuture<'static, Result<Option<String>, LookupError>> {
        *self.calls.lock().unwrap() += 1;
        future::ready(self.answer.clone()).boxed()
    }
}

/// Translation fake with a fixed answer.
#[derive(Debug)]
pub struct FakeTranslator {
    answer: Result<String, TranslationError>,
    requests: Mutex<Vec<String>>,
}

impl FakeTranslator {
    pub fn answering(text: &str) -> Self {
        Self {
            answer: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: TranslationError) -> Self {
        Self {
            answer: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Translator for FakeTranslator {
    fn translate(&self, text: String) -> BoxFuture<'static, Result<String, TranslationError>> {
        self.requests.lock().unwrap().push(text);
        future::ready(self.answer.clone()).boxed()
    }
}
