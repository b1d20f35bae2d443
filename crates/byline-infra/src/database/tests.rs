use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use byline_core::error::RepoError;
use byline_core::ports::{PostRepository, UserRepository};

use super::entity::{post, user};
use super::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn post_model(id: Uuid, author_id: Uuid, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        author_id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        excerpt: "Content".to_owned(),
        tags: vec!["rust".to_owned()],
        cover_image: String::new(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_post_by_id_maps_the_stored_row() {
    let post_id = Uuid::new_v4();
    let author_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, author_id, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let found = repo.find_by_id(post_id).await.unwrap().unwrap();
    assert_eq!(found.id, post_id);
    assert_eq!(found.author_id, author_id);
    assert_eq!(found.title, "Test Post");
    assert_eq!(found.tags, vec!["rust"]);
}

#[tokio::test]
async fn find_post_by_id_returns_none_for_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn delete_with_no_affected_rows_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn delete_with_one_affected_row_succeeds() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    repo.delete(Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn find_user_by_email_maps_the_stored_row() {
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: user_id,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password_hash: "hash".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let found = repo
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user_id);
    assert_eq!(found.username, "alice");
}
