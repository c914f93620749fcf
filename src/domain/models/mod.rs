//! # Domain Models Module
//!
//! 도메인의 값 객체(Value Objects)를 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`, `Post`, `Comment`
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 요청 처리 동안 변하지 않음
//! - **예시**: `TokenClaims`, `AuthenticatedUser`
//!
//! ### Spring Framework와의 비교
//! | Spring | Rust Domain Models |
//! |--------|-------------------|
//! | `@Entity` | `../entities/` |
//! | `Authentication` principal | [`auth::AuthenticatedUser`] |
//! | `Jwt` claims | [`token::TokenClaims`] |

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
