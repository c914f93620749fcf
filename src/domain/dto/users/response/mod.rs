//! 사용자 응답 DTO
//!
//! 엔티티를 그대로 노출하지 않고 응답 전용 구조체로 변환합니다.

pub mod user_response;

pub use user_response::*;
