//! HTTP 미들웨어
//!
//! - [`auth_middleware`] - Bearer 토큰 인증 (`AuthMiddleware::required()`)
//!
//! 인증된 요청은 extensions에 `AuthenticatedUser`가 들어가며,
//! 핸들러는 추출자로 꺼내 씁니다.

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
