//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 인증을 사용하는 소셜 피드 사용자를 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 매핑됩니다.
/// `email`과 `college_id`는 유니크 인덱스로 보호됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 프로필 이미지 URL (기본값: 빈 문자열)
    #[serde(default)]
    pub profile_picture: String,
    /// 친구 사용자 ID 목록
    #[serde(default)]
    pub friends: Vec<ObjectId>,
    /// 학번 (unique)
    pub college_id: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 비밀번호는 이미 해시된 값이어야 합니다.
    pub fn new(name: String, email: String, password_hash: String, college_id: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            profile_picture: String::new(),
            friends: Vec::new(),
            college_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
