//! Post listing and ownership-gated CRUD.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Author, Post, PostWithAuthor, derive_excerpt};
use crate::error::DomainError;
use crate::pagination::{self, DEFAULT_LIMIT, Page};
use crate::ports::{PostRepository, UserRepository};

/// Maximum title length, in characters.
pub const TITLE_MAX: usize = 200;

/// Maximum excerpt length, in characters.
pub const EXCERPT_MAX: usize = 500;

/// Listing request: optional free-text term plus the page window.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub term: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Fields accepted when creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub cover_image: String,
}

/// Partial update. Absent fields keep their stored value; supplied fields
/// overwrite, including an empty `cover_image` or an empty `tags` list.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<String>,
}

impl PostPatch {
    fn apply(self, post: &mut Post) -> Result<(), DomainError> {
        if let Some(title) = self.title {
            post.title = validate_title(title)?;
        }
        if let Some(content) = self.content {
            validate_content(&content)?;
            post.content = content;
        }
        if let Some(excerpt) = self.excerpt {
            validate_excerpt(&excerpt)?;
            post.excerpt = excerpt;
        }
        if let Some(tags) = self.tags {
            post.tags = normalize_tags(tags);
        }
        if let Some(cover_image) = self.cover_image {
            post.cover_image = cover_image;
        }
        Ok(())
    }
}

/// Service composing the search filter, the pagination engine and the
/// excerpt deriver over the repository ports. All validation and ownership
/// checks happen here, before anything reaches the store.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// List posts matching the query, newest first. No results is a normal
    /// outcome: an empty page with `total_posts = 0`.
    pub async fn list(&self, query: ListQuery) -> Result<Page<PostWithAuthor>, DomainError> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = match query.limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit,
        };
        let term = query.term.as_deref().filter(|t| !t.is_empty());

        let total = self.posts.count_matching(term).await?;
        let items = self
            .posts
            .find_window(term, pagination::offset(page, limit), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    /// Single post with its author.
    pub async fn get(&self, id: Uuid) -> Result<PostWithAuthor, DomainError> {
        self.posts
            .find_with_author(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "post", id })
    }

    /// Every post by one author, newest first. An unknown author simply has
    /// no posts.
    pub async fn by_author(&self, author_id: Uuid) -> Result<Vec<PostWithAuthor>, DomainError> {
        Ok(self.posts.find_by_author(author_id).await?)
    }

    /// Create a post authored by the caller. Derives the excerpt when the
    /// caller supplied none.
    pub async fn create(&self, caller: Uuid, draft: NewPost) -> Result<PostWithAuthor, DomainError> {
        let author = self
            .users
            .find_by_id(caller)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let title = validate_title(draft.title)?;
        validate_content(&draft.content)?;
        if let Some(excerpt) = &draft.excerpt {
            validate_excerpt(excerpt)?;
        }

        let excerpt = match draft.excerpt {
            Some(excerpt) if !excerpt.is_empty() => excerpt,
            _ => derive_excerpt(&draft.content),
        };

        let post = Post::new(
            author.id,
            title,
            draft.content,
            excerpt,
            normalize_tags(draft.tags),
            draft.cover_image,
        );
        let saved = self.posts.insert(post).await?;

        Ok(PostWithAuthor {
            post: saved,
            author: Author::from(author),
        })
    }

    /// Partially update a post. Only its author may do so.
    pub async fn update(
        &self,
        caller: Uuid,
        id: Uuid,
        patch: PostPatch,
    ) -> Result<PostWithAuthor, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "post", id })?;

        if post.author_id != caller {
            return Err(DomainError::Forbidden);
        }

        patch.apply(&mut post)?;
        post.touch();

        let updated = self.posts.update(post).await?;
        self.posts
            .find_with_author(updated.id)
            .await?
            .ok_or(DomainError::NotFound { entity: "post", id })
    }

    /// Permanently delete a post. Only its author may do so.
    pub async fn delete(&self, caller: Uuid, id: Uuid) -> Result<(), DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "post", id })?;

        if post.author_id != caller {
            return Err(DomainError::Forbidden);
        }

        Ok(self.posts.delete(id).await?)
    }
}

fn validate_title(title: String) -> Result<String, DomainError> {
    let title = title.trim().to_owned();
    if title.is_empty() {
        return Err(DomainError::Validation("Title is required".to_owned()));
    }
    if title.chars().count() > TITLE_MAX {
        return Err(DomainError::Validation(format!(
            "Title cannot exceed {TITLE_MAX} characters"
        )));
    }
    Ok(title)
}

fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::Validation("Content is required".to_owned()));
    }
    Ok(())
}

fn validate_excerpt(excerpt: &str) -> Result<(), DomainError> {
    if excerpt.chars().count() > EXCERPT_MAX {
        return Err(DomainError::Validation(format!(
            "Excerpt cannot exceed {EXCERPT_MAX} characters"
        )));
    }
    Ok(())
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|t| t.trim().to_owned()).collect()
}
