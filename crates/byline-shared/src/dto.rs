//! Data Transfer Objects - request/response types for the API.
//!
//! Post payloads use camelCase field names on the wire; the auth payloads
//! keep the usual OAuth-style keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use byline_core::domain::PostWithAuthor;

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// A user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// Partial update to a post. Absent fields keep their stored value;
/// supplied fields overwrite, including an empty `coverImage` or an empty
/// `tags` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// The author fields embedded in a post payload. The listing omits the
/// email; the single-post view includes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One post as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: AuthorResponse,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostResponse {
    fn build(entry: PostWithAuthor, with_email: bool) -> Self {
        let PostWithAuthor { post, author } = entry;
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            excerpt: post.excerpt,
            author: AuthorResponse {
                id: author.id,
                username: author.username,
                email: with_email.then_some(author.email),
            },
            tags: post.tags,
            cover_image: post.cover_image,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }

    /// Listing shape: author username only.
    pub fn summary(entry: PostWithAuthor) -> Self {
        Self::build(entry, false)
    }

    /// Detail shape: author username and email.
    pub fn detailed(entry: PostWithAuthor) -> Self {
        Self::build(entry, true)
    }
}

/// The paginated listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_posts: u64,
}

/// Envelope returned by create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMutationResponse {
    pub message: String,
    pub post: PostResponse,
}

/// Bare confirmation message, as returned by delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
