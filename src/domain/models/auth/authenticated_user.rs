use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 요청 extensions에 넣어두면 핸들러에서 추출자로 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (16진수 ObjectId)
    pub user_id: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }

    /// 사용자 ID를 ObjectId로 변환
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.user_id)
            .map_err(|_| AppError::AuthenticationError("Not authorized, invalid user".to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Not authorized, no token".to_string(),
            )
            .into())),
        }
    }
}
