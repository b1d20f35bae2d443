//! Domain services composing the ports.

mod posts;

pub use posts::{EXCERPT_MAX, ListQuery, NewPost, PostPatch, PostService, TITLE_MAX};
