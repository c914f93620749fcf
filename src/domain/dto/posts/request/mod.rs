//! 게시글 요청 DTO

pub mod post_request;

pub use post_request::*;
