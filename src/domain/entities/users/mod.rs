//! 사용자 도메인 엔티티
//!
//! `users` 컬렉션에 저장되는 [`User`](user::User) 엔티티를 제공합니다.

pub mod user;

pub use user::User;
