//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use byline_core::domain::{Author, Post, PostWithAuthor, User};
use byline_core::error::RepoError;
use byline_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::search::search_filter;

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_with_author(&self, id: Uuid) -> Result<Option<PostWithAuthor>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        row.map(join_author).transpose()
    }

    async fn count_matching(&self, term: Option<&str>) -> Result<u64, RepoError> {
        PostEntity::find()
            .filter(search_filter(term))
            .count(&self.db)
            .await
            .map_err(query_err)
    }

    async fn find_window(
        &self,
        term: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostWithAuthor>, RepoError> {
        let rows = PostEntity::find()
            .filter(search_filter(term))
            .order_by_desc(post::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .find_also_related(UserEntity)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        rows.into_iter().map(join_author).collect()
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<PostWithAuthor>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .order_by_desc(post::Column::CreatedAt)
            .find_also_related(UserEntity)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        rows.into_iter().map(join_author).collect()
    }

    async fn insert(&self, entry: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = entry.into();
        let model = active.insert(&self.db).await.map_err(write_err)?;

        Ok(model.into())
    }

    async fn update(&self, entry: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = entry.into();
        let model = active.update(&self.db).await.map_err(write_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entry: User) -> Result<User, RepoError> {
        let active: user::ActiveModel = entry.into();
        let model = active.insert(&self.db).await.map_err(write_err)?;

        Ok(model.into())
    }
}

fn join_author((post, author): (post::Model, Option<user::Model>)) -> Result<PostWithAuthor, RepoError> {
    let author = author.ok_or_else(|| {
        RepoError::Query(format!("post {} references a missing author row", post.id))
    })?;

    Ok(PostWithAuthor {
        post: post.into(),
        author: Author {
            id: author.id,
            username: author.username,
            email: author.email,
        },
    })
}

fn query_err(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

fn write_err(err: DbErr) -> RepoError {
    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Entity already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let mut chars = local.chars();
        let masked_local = match chars.next() {
            Some(first) if chars.next().is_some() => format!("{first}***"),
            _ => "***".to_string(),
        };
        format!("{masked_local}{domain}")
    } else {
        "***".to_string()
    }
}
