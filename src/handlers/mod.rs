//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 서비스 주입
//!
//! 서비스는 시작 시 레지스트리에서 해결되어 `web::Data`로 등록됩니다.
//! 핸들러는 `@Autowired` 대신 추출자로 받습니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_post(
//!     user: AuthenticatedUser,
//!     payload: web::Json<CreatePostRequest>,
//!     post_service: web::Data<PostService>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let post = post_service.create_post(&user.object_id()?, payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(post))
//! }
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring MVC | ActixWeb (이 모듈) |
//! |------------|-------------------|
//! | `@PostMapping` | `#[post("")]` |
//! | `@PathVariable` | `web::Path<String>` |
//! | `@RequestBody @Valid` | `web::Json<T>` + `validate()` |
//! | `@AuthenticationPrincipal` | `AuthenticatedUser` 추출자 |
//! | `ResponseEntity.status(201)` | `HttpResponse::Created()` |
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 `{"error": ...}` 본문을 만듭니다.

pub mod auth;
pub mod posts;
