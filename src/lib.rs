//! 소셜 피드 백엔드
//!
//! 사용자 인증(회원가입/로그인)과 게시글·좋아요·댓글을 제공하는 REST API 서비스입니다.
//! 모든 리포지토리와 서비스는 명시적으로 생성한 [`ServiceRegistry`](core::registry::ServiceRegistry)에
//! 이름으로 등록되고, 의존성 이름 목록을 따라 해결됩니다.
//!
//! # Features
//!
//! - **인증**: bcrypt 패스워드 해싱, HS256 JWT 발급/검증
//! - **게시글**: 작성, 조회, 수정, 삭제, 좋아요 토글
//! - **댓글**: 작성, 조회, 삭제 (게시글 삭제 시 함께 삭제)
//! - **서비스 레지스트리**: 이름 기반 등록, 싱글톤 캐시, 순환 참조 감지
//! - **MongoDB**: 사용자/게시글/댓글 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직      ┐
//! └─────────────────┘                      │
//!          │                               ├ ServiceRegistry
//!          ▼                               │
//! ┌─────────────────┐                      │
//! │  Repositories   │ ← 데이터 액세스      ┘
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use social_feed_backend::app::{configure_services, AppServices};
//! use social_feed_backend::core::registry::ServiceRegistry;
//! use social_feed_backend::db::Database;
//!
//! let registry = ServiceRegistry::new();
//! configure_services(&registry, Arc::new(Database::new().await?));
//!
//! let services = AppServices::resolve(&registry)?;
//! let posts = services.post_service.get_posts().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod app;
