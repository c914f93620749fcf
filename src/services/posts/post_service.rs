//! 게시글 서비스 구현
//!
//! 게시글 CRUD, 좋아요 토글, 댓글 작성/조회/삭제를 담당합니다.
//! 수정/삭제는 작성자만 가능하며, 게시글을 삭제하면 댓글도 함께 삭제됩니다.
//!
//! ## 응답 채우기 (population)
//!
//! 저장소에는 ID만 있으므로 응답을 만들 때 작성자와 댓글을 일괄 조회하여 채웁니다.
//! 게시글 목록 하나당 사용자 조회 1회, 댓글 조회 1회로 끝납니다.
//!
//! | 메서드 | 실패 |
//! |--------|------|
//! | `get_post` / `like_post` / `add_comment` / `get_comments` | `NotFound("Post not found")` |
//! | `update_post` / `delete_post` | `NotFound`, 작성자가 아니면 `AuthorizationError` |
//! | `delete_comment` | `NotFound("Comment not found")`, 작성자가 아니면 `AuthorizationError` |

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::domain::dto::posts::request::{CreateCommentRequest, CreatePostRequest, UpdatePostRequest};
use crate::domain::dto::posts::response::{CommentResponse, MessageResponse, PostResponse};
use crate::domain::dto::users::response::UserSummary;
use crate::domain::entities::posts::{Comment, Post, MAX_COMMENT_TEXT_LENGTH, MAX_POST_CONTENT_LENGTH};
use crate::repositories::posts::{CommentRepository, PostRepository, PostUpdate};
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::validate_required_string;

/// 경로 파라미터의 ID 문자열을 ObjectId로 변환합니다.
pub fn parse_object_id(id: &str, kind: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::ValidationError(format!("Invalid {} id", kind)))
}

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

/// 공백 제거 후 비어있지 않고 최대 길이 이하인지 확인합니다.
fn clean_text(value: &str, field_name: &str, max_length: usize) -> Result<String, AppError> {
    let cleaned = validate_required_string(value, field_name)?;
    if cleaned.chars().count() > max_length {
        return Err(AppError::ValidationError(format!(
            "{} cannot exceed {} characters",
            field_name, max_length
        )));
    }
    Ok(cleaned)
}

/// 게시글 서비스
pub struct PostService {
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            post_repo,
            comment_repo,
            user_repo,
        }
    }

    /// 게시글 작성
    pub async fn create_post(
        &self,
        user_id: &ObjectId,
        request: CreatePostRequest,
    ) -> Result<PostResponse, AppError> {
        let content = clean_text(&request.content, "Content", MAX_POST_CONTENT_LENGTH)?;

        let post = self
            .post_repo
            .create(Post::new(*user_id, content, request.image_url))
            .await?;

        log::info!("📝 게시글 작성: {:?} by {}", post.id_string(), user_id);

        self.populate_post(post).await
    }

    /// 전체 게시글 (최신순)
    pub async fn get_posts(&self) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.post_repo.find_all().await?;
        self.populate_posts(posts).await
    }

    /// 특정 사용자의 게시글 (최신순)
    pub async fn get_posts_by_user(&self, user_id: &str) -> Result<Vec<PostResponse>, AppError> {
        let user_id = parse_object_id(user_id, "user")?;
        let posts = self.post_repo.find_by_user(&user_id).await?;
        self.populate_posts(posts).await
    }

    pub async fn get_post(&self, post_id: &str) -> Result<PostResponse, AppError> {
        let post = self.find_post(post_id).await?;
        self.populate_post(post).await
    }

    /// 게시글 수정 (작성자만)
    pub async fn update_post(
        &self,
        post_id: &str,
        user_id: &ObjectId,
        request: UpdatePostRequest,
    ) -> Result<PostResponse, AppError> {
        let post = self.find_post(post_id).await?;

        if !post.is_owned_by(user_id) {
            return Err(AppError::AuthorizationError(
                "Not authorized to update this post".to_string(),
            ));
        }

        let content = request
            .content
            .as_deref()
            .map(|content| clean_text(content, "Content", MAX_POST_CONTENT_LENGTH))
            .transpose()?;

        let update = PostUpdate {
            content,
            image_url: request.image_url.map(|url| url.trim().to_string()),
        };

        let id = post.id.ok_or_else(post_not_found)?;
        let updated = self
            .post_repo
            .update(&id, update)
            .await?
            .ok_or_else(post_not_found)?;

        self.populate_post(updated).await
    }

    /// 게시글 삭제 (작성자만)
    ///
    /// 댓글을 먼저 삭제한 뒤 게시글을 삭제합니다.
    pub async fn delete_post(
        &self,
        post_id: &str,
        user_id: &ObjectId,
    ) -> Result<MessageResponse, AppError> {
        let post = self.find_post(post_id).await?;

        if !post.is_owned_by(user_id) {
            return Err(AppError::AuthorizationError(
                "Not authorized to delete this post".to_string(),
            ));
        }

        let id = post.id.ok_or_else(post_not_found)?;
        let deleted_comments = self.comment_repo.delete_by_post(&id).await?;
        self.post_repo.delete(&id).await?;

        log::info!("🗑️ 게시글 삭제: {} (댓글 {}개)", id, deleted_comments);

        Ok(MessageResponse::new("Post deleted successfully"))
    }

    /// 좋아요 토글
    pub async fn like_post(&self, post_id: &str, user_id: &ObjectId) -> Result<PostResponse, AppError> {
        let post = self.find_post(post_id).await?;
        let id = post.id.ok_or_else(post_not_found)?;

        if post.is_liked_by(user_id) {
            self.post_repo.remove_like(&id, user_id).await?;
        } else {
            self.post_repo.add_like(&id, user_id).await?;
        }

        let post = self.post_repo.find_by_id(&id).await?.ok_or_else(post_not_found)?;
        self.populate_post(post).await
    }

    /// 댓글 작성
    pub async fn add_comment(
        &self,
        post_id: &str,
        user_id: &ObjectId,
        request: CreateCommentRequest,
    ) -> Result<CommentResponse, AppError> {
        let post = self.find_post(post_id).await?;
        let id = post.id.ok_or_else(post_not_found)?;

        let text = clean_text(&request.text, "Comment", MAX_COMMENT_TEXT_LENGTH)?;

        let comment = self.comment_repo.create(Comment::new(*user_id, id, text)).await?;
        let comment_id = comment
            .id
            .ok_or_else(|| AppError::InternalError("Created comment has no id".to_string()))?;
        self.post_repo.add_comment(&id, &comment_id).await?;

        let mut populated = self.populate_comments(vec![comment]).await?;
        populated
            .pop()
            .ok_or_else(|| AppError::InternalError("Comment population failed".to_string()))
    }

    /// 게시글의 댓글 (최신순)
    pub async fn get_comments(&self, post_id: &str) -> Result<Vec<CommentResponse>, AppError> {
        let post = self.find_post(post_id).await?;
        let id = post.id.ok_or_else(post_not_found)?;

        let comments = self.comment_repo.find_by_post(&id).await?;
        self.populate_comments(comments).await
    }

    /// 댓글 삭제 (댓글 작성자만)
    pub async fn delete_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        user_id: &ObjectId,
    ) -> Result<MessageResponse, AppError> {
        let post_id = parse_object_id(post_id, "post")?;
        let comment_id = parse_object_id(comment_id, "comment")?;

        let comment = self
            .comment_repo
            .find_by_id(&comment_id)
            .await?
            .filter(|comment| comment.post == post_id)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if !comment.is_owned_by(user_id) {
            return Err(AppError::AuthorizationError(
                "Not authorized to delete this comment".to_string(),
            ));
        }

        self.comment_repo.delete(&comment_id).await?;
        self.post_repo.remove_comment(&post_id, &comment_id).await?;

        Ok(MessageResponse::new("Comment deleted successfully"))
    }

    async fn find_post(&self, post_id: &str) -> Result<Post, AppError> {
        let id = parse_object_id(post_id, "post")?;
        self.post_repo.find_by_id(&id).await?.ok_or_else(post_not_found)
    }

    async fn populate_post(&self, post: Post) -> Result<PostResponse, AppError> {
        let mut populated = self.populate_posts(vec![post]).await?;
        populated
            .pop()
            .ok_or_else(|| AppError::InternalError("Post population failed".to_string()))
    }

    async fn populate_posts(&self, posts: Vec<Post>) -> Result<Vec<PostResponse>, AppError> {
        let comment_ids: Vec<ObjectId> = posts.iter().flat_map(|post| post.comments.iter().copied()).collect();
        let comments: HashMap<ObjectId, Comment> = self
            .comment_repo
            .find_by_ids(&comment_ids)
            .await?
            .into_iter()
            .filter_map(|comment| comment.id.map(|id| (id, comment)))
            .collect();

        let author_ids: Vec<ObjectId> = posts
            .iter()
            .map(|post| post.user)
            .chain(comments.values().map(|comment| comment.user))
            .collect();
        let authors = self.load_authors(author_ids).await?;
        let author = |id: &ObjectId| authors.get(id).cloned().unwrap_or_else(|| UserSummary::unknown(id));

        Ok(posts
            .into_iter()
            .map(|post| {
                // 게시글에 기록된 순서를 유지하고, 이미 삭제된 댓글은 건너뜀
                let post_comments = post
                    .comments
                    .iter()
                    .filter_map(|id| comments.get(id))
                    .map(|comment| CommentResponse::new(comment.clone(), author(&comment.user)))
                    .collect();
                let post_author = author(&post.user);
                PostResponse::new(post, post_author, post_comments)
            })
            .collect())
    }

    async fn populate_comments(&self, comments: Vec<Comment>) -> Result<Vec<CommentResponse>, AppError> {
        let authors = self
            .load_authors(comments.iter().map(|comment| comment.user).collect())
            .await?;

        Ok(comments
            .into_iter()
            .map(|comment| {
                let author = authors
                    .get(&comment.user)
                    .cloned()
                    .unwrap_or_else(|| UserSummary::unknown(&comment.user));
                CommentResponse::new(comment, author)
            })
            .collect())
    }

    async fn load_authors(&self, mut ids: Vec<ObjectId>) -> Result<HashMap<ObjectId, UserSummary>, AppError> {
        ids.sort();
        ids.dedup();

        Ok(self
            .user_repo
            .find_by_ids(&ids)
            .await?
            .iter()
            .filter_map(|user| user.id.map(|id| (id, UserSummary::from(user))))
            .collect())
    }
}
