//! # 댓글 리포지토리 구현
//!
//! `comments` 컬렉션에 대한 데이터 액세스를 담당합니다.

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
    domain::entities::posts::Comment,
    repositories::inserted_object_id,
};

/// 댓글 데이터 액세스 인터페이스
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: Comment) -> Result<Comment, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Comment>, AppError>;

    /// 여러 ID를 한 번에 조회합니다. 순서는 보장하지 않습니다.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Comment>, AppError>;

    /// 게시글의 댓글 (최신순)
    async fn find_by_post(&self, post_id: &ObjectId) -> Result<Vec<Comment>, AppError>;

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;

    /// 게시글에 속한 댓글을 모두 삭제하고 삭제 건수를 반환합니다.
    async fn delete_by_post(&self, post_id: &ObjectId) -> Result<u64, AppError>;

    async fn create_indexes(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// MongoDB `comments` 컬렉션 기반 구현체
pub struct MongoCommentRepository {
    db: Arc<Database>,
}

impl MongoCommentRepository {
    pub const COLLECTION: &'static str = "comments";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Comment> {
        self.db.get_database().collection::<Comment>(Self::COLLECTION)
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn create(&self, mut comment: Comment) -> Result<Comment, AppError> {
        let result = self
            .collection()
            .insert_one(&comment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        comment.id = Some(inserted_object_id(&result.inserted_id)?);

        Ok(comment)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Comment>, AppError> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Comment>, AppError> {
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

    async fn find_by_post(&self, post_id: &ObjectId) -> Result<Vec<Comment>, AppError> {
        self.collection()
            .find(doc! { "post": *post_id })
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_by_post(&self, post_id: &ObjectId) -> Result<u64, AppError> {
        let result = self
            .collection()
            .delete_many(doc! { "post": *post_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    async fn create_indexes(&self) -> Result<(), AppError> {
        let post_index = IndexModel::builder()
            .keys(doc! { "post": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("post_created_at".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([post_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 comments 인덱스 생성 완료");
        Ok(())
    }
}
