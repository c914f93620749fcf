//! # User Data Transfer Objects Module
//!
//! 사용자/인증 API의 요청·응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 사용자 데이터 교환 계약 역할을 합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody RegisterDto` | `RegisterRequest` | 회원가입 요청 |
//! | `@RequestBody LoginDto` | `LoginRequest` | 로그인 요청 |
//! | `JwtAuthenticationResponse` | `AuthResponse` | 토큰 포함 인증 응답 |
//! | `UserDto` | `UserResponse` | 현재 사용자 프로필 |
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   └── auth_request.rs    # RegisterRequest, LoginRequest
//! └── response/
//!     └── user_response.rs   # AuthResponse, UserResponse, UserSummary
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::users::{RegisterRequest, AuthResponse};
//!
//! pub async fn register(
//!     payload: web::Json<RegisterRequest>,
//!     auth_service: web::Data<AuthService>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let response: AuthResponse = auth_service.register(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 보안 고려사항
//!
//! - 응답 DTO에는 `password_hash`가 절대 포함되지 않습니다.
//! - 로그인 실패 시 이메일 존재 여부를 구분하지 않는 단일 메시지를 사용합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
