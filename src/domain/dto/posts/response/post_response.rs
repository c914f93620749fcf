//! 게시글 응답 DTO
//!
//! 작성자와 댓글 작성자를 [`UserSummary`]로 채운("populated") 형태로 응답합니다.
use mongodb::bson::serde_helpers::bson_datetime_as_rfc3339_string;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserSummary;
use crate::domain::entities::posts::{Comment, Post};

/// 댓글 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: UserSummary,
    pub post: String,
    pub text: String,
    #[serde(with = "bson_datetime_as_rfc3339_string")]
    pub created_at: DateTime,
    #[serde(with = "bson_datetime_as_rfc3339_string")]
    pub updated_at: DateTime,
}

impl CommentResponse {
    pub fn new(comment: Comment, author: UserSummary) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: author,
            post: comment.post.to_hex(),
            text: comment.text,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// 게시글 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: UserSummary,
    pub content: String,
    pub image_url: String,
    /// 좋아요를 누른 사용자 ID 목록
    pub likes: Vec<String>,
    pub comments: Vec<CommentResponse>,
    #[serde(with = "bson_datetime_as_rfc3339_string")]
    pub created_at: DateTime,
    #[serde(with = "bson_datetime_as_rfc3339_string")]
    pub updated_at: DateTime,
}

impl PostResponse {
    pub fn new(post: Post, author: UserSummary, comments: Vec<CommentResponse>) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: author,
            content: post.content,
            image_url: post.image_url,
            likes: post.likes.iter().map(|id| id.to_hex()).collect(),
            comments,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// 단순 메시지 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
