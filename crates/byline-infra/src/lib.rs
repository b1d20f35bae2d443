//! # Byline Infrastructure
//!
//! Concrete implementations of the ports defined in `byline-core`:
//! PostgreSQL persistence via SeaORM, plus JWT and Argon2 authentication
//! services.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtTokenService};
pub use database::{DatabaseConfig, PostgresPostRepository, PostgresUserRepository};
