//! Application state - shared across all handlers.

use std::sync::Arc;

use byline_core::ports::{PostRepository, UserRepository};
use byline_core::service::PostService;
use byline_infra::database::{
    self, DatabaseConfig, DbErr, PostgresPostRepository, PostgresUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Connect to the store and wire the repositories into the service.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = database::connect(config).await?;

        let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(db.clone()));
        let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db));

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: PostService::new(post_repo, user_repo.clone()),
            users: user_repo,
        })
    }
}
