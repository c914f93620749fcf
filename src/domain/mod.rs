//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 소셜 피드의 데이터 구조와 도메인 규칙을 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서 (User, Post, Comment)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 값 객체 (TokenClaims, AuthenticatedUser)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `SecurityContext` principal | `models::auth` | 인증 컨텍스트 |
//! | `@Valid` | `validator` 검증 | 데이터 유효성 검사 |
//!
//! ## 의존성 규칙
//!
//! 도메인 계층은 리포지토리나 서비스에 의존하지 않습니다.
//! 예외는 검증 헬퍼(`utils::string_utils`)와 에러 타입(`core::errors`)뿐입니다.

pub mod entities;
pub mod dto;
pub mod models;
