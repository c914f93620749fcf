//! 게시글 응답 DTO

pub mod post_response;

pub use post_response::*;
