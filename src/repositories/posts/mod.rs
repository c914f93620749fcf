//! 게시글/댓글 리포지토리

pub mod post_repo;
pub mod comment_repo;

pub use post_repo::{MongoPostRepository, PostRepository, PostUpdate};
pub use comment_repo::{CommentRepository, MongoCommentRepository};
