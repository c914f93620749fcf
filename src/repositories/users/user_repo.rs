//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 서비스는 [`UserRepository`] 트레이트에만 의존하고,
//! 운영 환경에서는 MongoDB 구현체인 [`MongoUserRepository`]가 주입됩니다.
//!
//! ## 특징
//!
//! - **트레이트 기반 추상화**: 서비스는 `Arc<dyn UserRepository>`로 주입받음
//! - **데이터 무결성**: `email`, `college_id` 유니크 인덱스
//! - **중복 키 매핑**: MongoDB 11000 에러를 `ConflictError`로 변환

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::users::user::User,
    repositories::{inserted_object_id, map_write_error},
};

/// 사용자 데이터 액세스 인터페이스
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자 저장
    ///
    /// 저장된 사용자(ID 포함)를 반환합니다.
    /// 이메일 또는 학번이 중복되면 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 여러 ID를 한 번에 조회합니다. 순서는 보장하지 않습니다.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_college_id(&self, college_id: &str) -> Result<Option<User>, AppError>;

    /// 컬렉션 인덱스 생성
    async fn create_indexes(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// MongoDB `users` 컬렉션 기반 구현체
///
/// ## 인덱스
/// - `email` (unique)
/// - `college_id` (unique)
/// - `created_at` (desc)
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| map_write_error(e, "User already exists"))?;

        user.id = Some(inserted_object_id(&result.inserted_id)?);

        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_college_id(&self, college_id: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "college_id": college_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create_indexes(&self) -> Result<(), AppError> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 학번 유니크 인덱스
        let college_id_index = IndexModel::builder()
            .keys(doc! { "college_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("college_id_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, college_id_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 users 인덱스 생성 완료");
        Ok(())
    }
}
