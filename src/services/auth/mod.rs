//! 인증 서비스 모듈
//!
//! - [`token_service`] - JWT 발급/검증 (`tokenService`)
//! - [`auth_service`] - 회원가입/로그인/토큰 사용자 조회 (`authService`)
//!
//! ```text
//! authService ──► userRepository ──► database
//!      └────────► tokenService
//! ```

pub mod token_service;
pub mod auth_service;

pub use token_service::TokenService;
pub use auth_service::AuthService;
