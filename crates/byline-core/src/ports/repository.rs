use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostWithAuthor, User};
use crate::error::RepoError;

/// Post repository. The search methods take the free-text term the listing
/// accepts; an absent or empty term matches every post. Matching is a
/// case-insensitive literal substring check against title, content, or any
/// tag element.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Find a post joined with its author.
    async fn find_with_author(&self, id: Uuid) -> Result<Option<PostWithAuthor>, RepoError>;

    /// Count every post matching the term.
    async fn count_matching(&self, term: Option<&str>) -> Result<u64, RepoError>;

    /// Fetch one window of matching posts, newest first, joined with their
    /// authors.
    async fn find_window(
        &self,
        term: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// Every post by one author, newest first.
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// Persist a new post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Overwrite an existing post.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Permanently remove a post.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// User repository - the user directory behind author joins and auth.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their display name.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Persist a new user.
    async fn insert(&self, user: User) -> Result<User, RepoError>;
}
