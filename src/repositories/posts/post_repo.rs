//! # 게시글 리포지토리 구현
//!
//! `posts` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 좋아요/댓글 ID 목록은 `$addToSet`, `$push`, `$pull` 원자 연산으로 갱신하여
//! 동시 요청에서도 문서 전체를 덮어쓰지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::posts::Post,
    repositories::inserted_object_id,
};

/// 게시글 부분 수정 내용
///
/// `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostUpdate {
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl PostUpdate {
    /// `$set` 문서로 변환합니다. `updated_at`은 항상 갱신됩니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = doc! { "updated_at": DateTime::now() };
        if let Some(content) = &self.content {
            set.insert("content", content.clone());
        }
        if let Some(image_url) = &self.image_url {
            set.insert("image_url", image_url.clone());
        }
        set
    }
}

/// 게시글 데이터 액세스 인터페이스
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: Post) -> Result<Post, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError>;

    /// 전체 게시글 (최신순)
    async fn find_all(&self) -> Result<Vec<Post>, AppError>;

    /// 특정 사용자의 게시글 (최신순)
    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Vec<Post>, AppError>;

    /// 부분 수정 후 수정된 게시글을 반환합니다. 없으면 `None`.
    async fn update(&self, id: &ObjectId, update: PostUpdate) -> Result<Option<Post>, AppError>;

    /// 삭제 여부를 반환합니다.
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;

    /// 좋아요 추가 (이미 있으면 변화 없음)
    async fn add_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError>;

    async fn remove_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError>;

    /// 댓글 ID를 게시글 끝에 추가
    async fn add_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<(), AppError>;

    async fn remove_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<(), AppError>;

    async fn create_indexes(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// MongoDB `posts` 컬렉션 기반 구현체
pub struct MongoPostRepository {
    db: Arc<Database>,
}

impl MongoPostRepository {
    pub const COLLECTION: &'static str = "posts";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.get_database().collection::<Post>(Self::COLLECTION)
    }

    async fn find_sorted(&self, filter: Document) -> Result<Vec<Post>, AppError> {
        self.collection()
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_arrays(&self, post_id: &ObjectId, update: Document) -> Result<(), AppError> {
        self.collection()
            .update_one(doc! { "_id": *post_id }, update)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self
            .collection()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = Some(inserted_object_id(&result.inserted_id)?);

        Ok(post)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        self.find_sorted(doc! {}).await
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Vec<Post>, AppError> {
        self.find_sorted(doc! { "user": *user_id }).await
    }

    async fn update(&self, id: &ObjectId, update: PostUpdate) -> Result<Option<Post>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": *id },
                doc! { "$set": update.to_set_document() },
            )
            .with_options(options)
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

    async fn add_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError> {
        self.update_arrays(post_id, doc! { "$addToSet": { "likes": *user_id } }).await
    }

    async fn remove_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError> {
        self.update_arrays(post_id, doc! { "$pull": { "likes": *user_id } }).await
    }

    async fn add_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<(), AppError> {
        self.update_arrays(post_id, doc! { "$push": { "comments": *comment_id } }).await
    }

    async fn remove_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<(), AppError> {
        self.update_arrays(post_id, doc! { "$pull": { "comments": *comment_id } }).await
    }

    async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("user_created_at".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([user_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 posts 인덱스 생성 완료");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_only_contains_present_fields() {
        let update = PostUpdate {
            content: Some("edited".to_string()),
            image_url: None,
        };

        let set = update.to_set_document();

        assert_eq!(set.get_str("content").unwrap(), "edited");
        assert!(!set.contains_key("image_url"));
        assert!(set.contains_key("updated_at"));
    }
}
