use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Post entity - one authored article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post. The author is fixed here and never reassigned.
    pub fn new(
        author_id: Uuid,
        title: String,
        content: String,
        excerpt: String,
        tags: Vec<String>,
        cover_image: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            excerpt,
            tags,
            cover_image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamp a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// The author fields a post exposes when joined with its user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for Author {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// A post joined with its author, as returned by read paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Author,
}
