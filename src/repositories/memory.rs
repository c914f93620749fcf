//! 테스트용 인메모리 리포지토리
//!
//! MongoDB 없이 서비스 로직을 검증하기 위한 구현체입니다.
//! 정렬(최신순)과 유니크 제약은 MongoDB 구현과 같은 규칙을 따릅니다.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::AppError;
use crate::domain::entities::posts::{Comment, Post};
use crate::domain::entities::users::User;
use crate::repositories::posts::{CommentRepository, PostRepository, PostUpdate};
use crate::repositories::users::UserRepository;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 삽입 순서를 유지한 채 최신순으로 정렬합니다. 같은 시각이면 나중에 넣은 것이 앞입니다.
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> i64) -> Vec<T> {
    let mut sorted: Vec<T> = items.iter().rev().cloned().collect();
    sorted.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
    sorted
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.users).len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = lock(&self.users);
        if users
            .iter()
            .any(|existing| existing.email == user.email || existing.college_id == user.college_id)
        {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users).iter().find(|user| user.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        Ok(lock(&self.users)
            .iter()
            .filter(|user| user.id.is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users).iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_college_id(&self, college_id: &str) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users).iter().find(|user| user.college_id == college_id).cloned())
    }
}

/// `$set`과 같은 규칙으로 부분 수정을 적용합니다.
fn apply_update(post: &mut Post, update: PostUpdate) {
    if let Some(content) = update.content {
        post.content = content;
    }
    if let Some(image_url) = update.image_url {
        post.image_url = image_url;
    }
    post.updated_at = DateTime::now();
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.posts).len()
    }

    fn modify(&self, post_id: &ObjectId, change: impl FnOnce(&mut Post)) {
        if let Some(post) = lock(&self.posts).iter_mut().find(|post| post.id.as_ref() == Some(post_id)) {
            change(post);
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, mut post: Post) -> Result<Post, AppError> {
        post.id = Some(ObjectId::new());
        lock(&self.posts).push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        Ok(lock(&self.posts).iter().find(|post| post.id.as_ref() == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(newest_first(&lock(&self.posts), |post| post.created_at.timestamp_millis()))
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Vec<Post>, AppError> {
        let posts: Vec<Post> = lock(&self.posts)
            .iter()
            .filter(|post| &post.user == user_id)
            .cloned()
            .collect();
        Ok(newest_first(&posts, |post| post.created_at.timestamp_millis()))
    }

    async fn update(&self, id: &ObjectId, update: PostUpdate) -> Result<Option<Post>, AppError> {
        let mut posts = lock(&self.posts);
        let Some(post) = posts.iter_mut().find(|post| post.id.as_ref() == Some(id)) else {
            return Ok(None);
        };
        apply_update(post, update);
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut posts = lock(&self.posts);
        let before = posts.len();
        posts.retain(|post| post.id.as_ref() != Some(id));
        Ok(posts.len() < before)
    }

    async fn add_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError> {
        self.modify(post_id, |post| {
            if !post.likes.contains(user_id) {
                post.likes.push(*user_id);
            }
        });
        Ok(())
    }

    async fn remove_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError> {
        self.modify(post_id, |post| post.likes.retain(|id| id != user_id));
        Ok(())
    }

    async fn add_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<(), AppError> {
        self.modify(post_id, |post| post.comments.push(*comment_id));
        Ok(())
    }

    async fn remove_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<(), AppError> {
        self.modify(post_id, |post| post.comments.retain(|id| id != comment_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.comments).len()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, mut comment: Comment) -> Result<Comment, AppError> {
        comment.id = Some(ObjectId::new());
        lock(&self.comments).push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Comment>, AppError> {
        Ok(lock(&self.comments).iter().find(|comment| comment.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Comment>, AppError> {
        Ok(lock(&self.comments)
            .iter()
            .filter(|comment| comment.id.is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn find_by_post(&self, post_id: &ObjectId) -> Result<Vec<Comment>, AppError> {
        let comments: Vec<Comment> = lock(&self.comments)
            .iter()
            .filter(|comment| &comment.post == post_id)
            .cloned()
            .collect();
        Ok(newest_first(&comments, |comment| comment.created_at.timestamp_millis()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut comments = lock(&self.comments);
        let before = comments.len();
        comments.retain(|comment| comment.id.as_ref() != Some(id));
        Ok(comments.len() < before)
    }

    async fn delete_by_post(&self, post_id: &ObjectId) -> Result<u64, AppError> {
        let mut comments = lock(&self.comments);
        let before = comments.len();
        comments.retain(|comment| &comment.post != post_id);
        Ok((before - comments.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_update_keeps_absent_fields() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .create(Post::new(ObjectId::new(), "original".to_string(), None))
            .await
            .unwrap();
        let id = post.id.unwrap();

        let updated = repo
            .update(&id, PostUpdate {
                content: None,
                image_url: Some("http://img".to_string()),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.content, "original");
        assert_eq!(updated.image_url, "http://img");
        assert!(repo.update(&ObjectId::new(), PostUpdate::default()).await.unwrap().is_none());
    }
}
