//! 게시글 서비스 모듈
//!
//! ```text
//! postService ──► postRepository
//!      ├────────► commentRepository
//!      └────────► userRepository   (작성자 정보 채우기)
//! ```

pub mod post_service;

pub use post_service::PostService;
