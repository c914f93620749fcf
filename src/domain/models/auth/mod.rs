//! 인증 컨텍스트 모델
//!
//! 미들웨어가 검증한 사용자 정보를 핸들러까지 전달하는 추출자들입니다.

pub mod authenticated_user;

pub use authenticated_user::AuthenticatedUser;
