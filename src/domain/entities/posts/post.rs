//! Post Entity Implementation
//!
//! 게시글 엔티티입니다. 좋아요는 사용자 ID 목록, 댓글은 댓글 ID 목록으로 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 게시글 본문 최대 길이 (문자 수)
pub const MAX_POST_CONTENT_LENGTH: usize = 1000;

/// 게시글 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 ID
    pub user: ObjectId,
    pub content: String,
    /// 첨부 이미지 URL (기본값: 빈 문자열)
    #[serde(default)]
    pub image_url: String,
    /// 좋아요를 누른 사용자 ID 목록
    #[serde(default)]
    pub likes: Vec<ObjectId>,
    /// 댓글 ID 목록 (작성 순)
    #[serde(default)]
    pub comments: Vec<ObjectId>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Post {
    pub fn new(user: ObjectId, content: String, image_url: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user,
            content,
            image_url: image_url.unwrap_or_default(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 작성자 여부 확인
    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.user == user_id
    }

    /// 해당 사용자가 좋아요를 눌렀는지 확인
    pub fn is_liked_by(&self, user_id: &ObjectId) -> bool {
        self.likes.contains(user_id)
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
