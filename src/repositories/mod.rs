//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `async_trait` 트레이트로 정의되고, MongoDB 구현체가 함께 제공됩니다.
//! 서비스는 구현체가 아니라 트레이트 객체(`Arc<dyn UserRepository>`)에 의존하므로
//! 테스트에서는 인메모리 구현체로 교체할 수 있습니다.
//!
//! # Modules
//!
//! - [`users`] - `UserRepository` / `MongoUserRepository`
//! - [`posts`] - `PostRepository`, `CommentRepository`와 MongoDB 구현체
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

use mongodb::bson::{oid::ObjectId, Bson};
use mongodb::error::{ErrorKind, WriteFailure};

use crate::core::errors::AppError;

pub mod users;
pub mod posts;

#[cfg(test)]
pub mod memory;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `insert_one` 결과의 `_id`를 ObjectId로 꺼냅니다.
pub(crate) fn inserted_object_id(inserted_id: &Bson) -> Result<ObjectId, AppError> {
    inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::InternalError("Inserted id is not an ObjectId".to_string()))
}

/// 쓰기 에러를 변환합니다. 유니크 인덱스 위반은 `ConflictError`가 됩니다.
pub(crate) fn map_write_error(error: mongodb::error::Error, conflict_message: &str) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = error.kind.as_ref() {
        if write_error.code == DUPLICATE_KEY_CODE {
            return AppError::ConflictError(conflict_message.to_string());
        }
    }
    AppError::DatabaseError(error.to_string())
}
