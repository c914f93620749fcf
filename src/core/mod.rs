//! # Core Framework Module
//!
//! 애플리케이션 전체가 공유하는 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceRegistry**: 이름 기반 서비스 등록 및 해결 (Spring의 BeanFactory 역할)
//! - **싱글톤/트랜지언트 스코프**: 첫 해결 시 캐시 또는 매번 새 인스턴스
//! - **순환 참조 감지**: 해결 경로를 추적하여 `a -> b -> a`를 에러로 보고
//! - **명시적 생성**: 전역 static 없이 생성하여 와이어링 루틴에 전달
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `ApplicationContext` | `ServiceRegistry` |
//! | `@Bean` 메서드 | `registry.register(name).factory(..)` |
//! | `@DependsOn` | `.depends_on(name)` |
//! | `@Scope("prototype")` | `.transient()` |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceRegistry;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let database = Arc::new(Database::new().await?);
//!
//!     let registry = ServiceRegistry::new();
//!     configure_services(&registry, database);
//!
//!     let services = AppServices::resolve(&registry)?;
//!     // HttpServer::new(...) 에 services 전달
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! Internal server error: Circular dependency detected: authService -> tokenService -> authService
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 서비스
//! ```text
//! Internal server error: Service not found: postRepository
//! ```
//! **해결**: `configure_services`에 해당 이름의 등록 추가

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
