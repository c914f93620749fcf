//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 사용자, 게시글, 댓글을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## 컬렉션 관계
//!
//! ```text
//! users ◄──── posts.user
//!   ▲         posts.likes[]     (사용자 ID 목록)
//!   │         posts.comments[] ──► comments
//!   └──────────────────────────── comments.user
//!                                 comments.post ──► posts
//! ```
//!
//! 엔티티 간 직접 참조 대신 ObjectId 참조를 사용하고,
//! 응답 시 서비스 계층에서 작성자 정보를 채웁니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `@CreatedDate` | `created_at: DateTime` |
//! | `@ManyToOne` | `user: ObjectId` |
//! | `@ElementCollection` | `likes: Vec<ObjectId>` |
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── users/
//! │   └── user.rs     ← User 엔티티
//! └── posts/
//!     ├── post.rs     ← Post 엔티티
//!     └── comment.rs  ← Comment 엔티티
//! ```
//!
//! ## 주의사항
//!
//! - **인덱스 설계**: `users.email`, `users.college_id`는 유니크 인덱스 필수
//! - **문서 크기**: `likes`, `comments` 배열은 문서 크기 제한(16MB)을 고려

pub mod users;
pub mod posts;
