use serde::{Deserialize, Serialize};
use mongodb::bson::serde_helpers::bson_datetime_as_rfc3339_string;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::domain::entities::users::user::User;

/// 회원가입/로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub college_id: String,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name,
            email: user.email,
            college_id: user.college_id,
            token,
        }
    }
}

/// 사용자 프로필 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub college_id: String,
    pub profile_picture: String,
    pub friends: Vec<String>,
    #[serde(with = "bson_datetime_as_rfc3339_string")]
    pub created_at: DateTime,
    #[serde(with = "bson_datetime_as_rfc3339_string")]
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            profile_picture,
            friends,
            college_id,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            college_id,
            profile_picture,
            friends: friends.iter().map(|id| id.to_hex()).collect(),
            created_at,
            updated_at,
        }
    }
}

/// 게시글/댓글에 포함되는 작성자 요약 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub profile_picture: String,
}

impl UserSummary {
    /// 작성자 문서가 없을 때 사용하는 자리표시자
    pub fn unknown(id: &ObjectId) -> Self {
        Self {
            id: id.to_hex(),
            name: String::new(),
            profile_picture: String::new(),
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name.clone(),
            profile_picture: user.profile_picture.clone(),
        }
    }
}
