//! 게시글 도메인 엔티티
//!
//! - [`Post`](post::Post): `posts` 컬렉션
//! - [`Comment`](comment::Comment): `comments` 컬렉션

pub mod post;
pub mod comment;

pub use post::*;
pub use comment::*;
