//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator`로 검증합니다. Spring Boot의 `@RequestBody` + `@Valid` 조합과 같은 역할입니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{post, web, HttpResponse};
//! use validator::Validate;
//! use crate::domain::dto::users::request::RegisterRequest;
//!
//! #[post("/register")]
//! async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     // ...
//! }
//! ```
//!
//! ## 에러 핸들링
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 핸들러에서 `AppError::ValidationError`(HTTP 400)로 변환됩니다.

pub mod auth_request;

pub use auth_request::*;
