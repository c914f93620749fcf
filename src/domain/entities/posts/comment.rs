//! Comment Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 댓글 본문 최대 길이 (문자 수)
pub const MAX_COMMENT_TEXT_LENGTH: usize = 500;

/// 댓글 엔티티
///
/// `post` 필드로 소속 게시글을 역참조하므로 게시글 삭제 시
/// `post` 기준으로 일괄 삭제할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 ID
    pub user: ObjectId,
    /// 소속 게시글 ID
    pub post: ObjectId,
    pub text: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Comment {
    pub fn new(user: ObjectId, post: ObjectId, text: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user,
            post,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.user == user_id
    }
}
