// SPDX-License-Identifier: MPL-2.0
//! REST adapter for the comment service.
//!
//! Endpoints, relative to the configured base URL:
//!
//! | Operation | Request                    |
//! |-----------|----------------------------|
//! | list      | `GET /comments`            |
//! | create    | `POST /comment`            |
//! | like      | `POST /comment/like/{id}`  |
//! | dislike   | `POST /comment/dislike/{id}` |

use crate::application::port::{ApiError, CommentApi};
use crate::domain::comment::{Comment, CommentId, DetectedCity, NewComment, Reaction};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};

/// [`CommentApi`] implementation over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct RestCommentApi {
    client: reqwest::Client,
    base_url: String,
}

impl RestCommentApi {
    /// Creates an adapter. `base_url` must not end with `/`
    /// (see [`super::normalize_base_url`]).
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn comments_url(&self) -> String {
        format!("{}/comments", self.base_url)
    }

    fn create_url(&self) -> String {
        format!("{}/comment", self.base_url)
    }

    fn reaction_url(&self, id: &CommentId, reaction: Reaction) -> String {
        format!(
            "{}/comment/{}/{}",
            self.base_url,
            reaction.path_segment(),
            id.as_str()
        )
    }
}

impl CommentApi for RestCommentApi {
    fn list(&self) -> BoxFuture<'static, Result<Vec<Comment>, ApiError>> {
        let request = self.client.get(self.comments_url());
        async move {
            let response = request.send().await.map_err(transport)?;
            let body = checked(response)?.text().await.map_err(transport)?;
            parse_comments(&body)
        }
        .boxed()
    }

    fn create(&self, new_comment: NewComment) -> BoxFuture<'static, Result<(), ApiError>> {
        let body = CreateBody::from(&new_comment);
        let request = self.client.post(self.create_url()).json(&body);
        async move {
            let response = request.send().await.map_err(transport)?;
            checked(response).map(|_| ())
        }
        .boxed()
    }

    fn react(&self, id: CommentId, reaction: Reaction) -> BoxFuture<'static, Result<(), ApiError>> {
        let request = self.client.post(self.reaction_url(&id, reaction));
        async move {
            let response = request.send().await.map_err(transport)?;
            checked(response).map(|_| ())
        }
        .boxed()
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn checked(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

// =============================================================================
// Wire format
// =============================================================================

/// Comment as the service serializes it.
///
/// The identifier may arrive as `id` or `_id`, as a string or a number.
/// Missing counters read as zero and a missing city as `Unknown`.
#[derive(Debug, Deserialize)]
struct CommentDto {
    #[serde(alias = "_id")]
    id: RawId,
    #[serde(default)]
    text: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    likes: Option<u64>,
    #[serde(default)]
    dislikes: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<CommentDto> for Comment {
    fn from(dto: CommentDto) -> Self {
        let id = match dto.id {
            RawId::Text(raw) => CommentId::new(raw),
            RawId::Number(raw) => CommentId::new(raw.to_string()),
        };
        Self {
            id,
            text: dto.text,
            city: DetectedCity::from_lookup(dto.city).to_string(),
            likes: dto.likes.unwrap_or(0),
            dislikes: dto.dislikes.unwrap_or(0),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody<'a> {
    text: &'a str,
    city: &'a str,
    user_id: &'a str,
}

impl<'a> From<&'a NewComment> for CreateBody<'a> {
    fn from(new_comment: &'a NewComment) -> Self {
        Self {
            text: &new_comment.text,
            city: new_comment.city.as_str(),
            user_id: &new_comment.user_id,
        }
    }
}

/// Decodes a `GET /comments` body, preserving server order.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not an array of comments.
pub fn parse_comments(body: &str) -> Result<Vec<Comment>, ApiError> {
    let dtos: Vec<CommentDto> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(dtos.into_iter().map(Comment::from).collect())
}
