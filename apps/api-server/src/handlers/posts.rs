//! Post handlers - listing, search, and ownership-gated CRUD.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use byline_core::service::{ListQuery, NewPost, PostPatch};
use byline_shared::dto::{
    CreatePostRequest, MessageResponse, PostListResponse, PostMutationResponse, PostResponse,
    UpdatePostRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
}

/// GET /api/posts - paginated listing with optional free-text search.
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();

    let page = state
        .posts
        .list(ListQuery {
            term: params.search,
            page: params.page,
            limit: params.limit,
        })
        .await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts: page.items.into_iter().map(PostResponse::summary).collect(),
        total_pages: page.total_pages,
        current_page: page.current_page,
        total_posts: page.total_posts,
    }))
}

/// GET /api/posts/user/{user_id} - all posts by one author, newest first.
pub async fn posts_by_author(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let author_id = parse_id(&path)?;

    let posts = state.posts.by_author(author_id).await?;
    let posts: Vec<PostResponse> = posts.into_iter().map(PostResponse::summary).collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id} - single post with the author's username and email.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(PostResponse::detailed(post)))
}

/// POST /api/posts - create a post authored by the caller.
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let created = state
        .posts
        .create(
            identity.user_id,
            NewPost {
                title: req.title,
                content: req.content,
                excerpt: req.excerpt,
                tags: req.tags.unwrap_or_default(),
                cover_image: req.cover_image.unwrap_or_default(),
            },
        )
        .await?;

    Ok(HttpResponse::Created().json(PostMutationResponse {
        message: "Post created successfully".to_string(),
        post: PostResponse::summary(created),
    }))
}

/// PUT /api/posts/{id} - partial update, owner only.
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    let updated = state
        .posts
        .update(
            identity.user_id,
            id,
            PostPatch {
                title: req.title,
                content: req.content,
                excerpt: req.excerpt,
                tags: req.tags,
                cover_image: req.cover_image,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(PostMutationResponse {
        message: "Post updated successfully".to_string(),
        post: PostResponse::summary(updated),
    }))
}

/// DELETE /api/posts/{id} - permanent delete, owner only.
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete(identity.user_id, id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}

/// Malformed ids behave exactly like missing records, so the id format
/// never leaks through the error taxonomy.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Resource not found".to_string()))
}
