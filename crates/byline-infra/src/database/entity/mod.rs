//! SeaORM entities backing the domain types.

pub mod post;
pub mod user;
