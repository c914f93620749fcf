//! 게시글/좋아요/댓글 핸들러
//!
//! 모든 엔드포인트는 `AuthMiddleware::required()` 스코프 안에 등록되므로
//! 핸들러는 `AuthenticatedUser`를 바로 추출합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::posts::request::{CreateCommentRequest, CreatePostRequest, UpdatePostRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::posts::PostService;

#[post("")]
pub async fn create_post(
    user: AuthenticatedUser,
    payload: web::Json<CreatePostRequest>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let post = post_service
        .create_post(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(post))
}

#[get("")]
pub async fn get_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, AppError> {
    let posts = post_service.get_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/user/{user_id}")]
pub async fn get_posts_by_user(
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service.get_posts_by_user(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/{id}")]
pub async fn get_post(
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let post = post_service.get_post(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[put("/{id}")]
pub async fn update_post(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    if payload.is_empty() {
        return Err(AppError::ValidationError("Nothing to update".to_string()));
    }

    let post = post_service
        .update_post(&path.into_inner(), &user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

#[delete("/{id}")]
pub async fn delete_post(
    user: AuthenticatedUser,
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let result = post_service
        .delete_post(&path.into_inner(), &user.object_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// 좋아요 토글
#[put("/{id}/like")]
pub async fn like_post(
    user: AuthenticatedUser,
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let post = post_service
        .like_post(&path.into_inner(), &user.object_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

#[post("/{id}/comments")]
pub async fn add_comment(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let comment = post_service
        .add_comment(&path.into_inner(), &user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

#[get("/{id}/comments")]
pub async fn get_comments(
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let comments = post_service.get_comments(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

#[delete("/{id}/comments/{comment_id}")]
pub async fn delete_comment(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();

    let result = post_service
        .delete_comment(&post_id, &comment_id, &user.object_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}
