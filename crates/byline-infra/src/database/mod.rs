//! PostgreSQL persistence for posts and users.

mod connections;
pub mod entity;
mod postgres_repo;
mod search;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm::DbErr;
pub use postgres_repo::{PostgresPostRepository, PostgresUserRepository};
pub use search::search_filter;

#[cfg(test)]
mod tests;
