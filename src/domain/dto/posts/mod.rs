//! # Post Data Transfer Objects Module
//!
//! 게시글·좋아요·댓글 API의 요청/응답 구조를 정의합니다.
//!
//! ```text
//! posts/
//! ├── request/post_request.rs    # CreatePostRequest, UpdatePostRequest, CreateCommentRequest
//! └── response/post_response.rs  # PostResponse, CommentResponse, MessageResponse
//! ```
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `content` | 공백 제외 비어있지 않음, 최대 1000자 |
//! | `text` | 공백 제외 비어있지 않음, 최대 500자 |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
