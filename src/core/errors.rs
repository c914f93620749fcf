//! # Application Error Handling System
//!
//! 소셜 피드 백엔드의 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 글로벌 에러 처리 메커니즘을
//! Rust의 타입 시스템과 결합하여 일관된 에러 응답을 제공합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 계층화된 에러 분류
//! - **도메인별 분류**: 데이터, 비즈니스, 보안 계층별 에러 변형
//! - **의미론적 분류**: HTTP 상태 코드와 직접 매핑되는 에러
//!
//! ### 2. 자동 HTTP 응답 변환
//! - **ResponseError 구현**: Actix-Web 핸들러에서 `?`로 바로 반환
//! - **일관된 응답 형식**: `{ "error": "..." }`
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `ResponseError::error_response()` |
//! | `ResponseEntity<ErrorResponse>` | `HttpResponse::build().json()` |
//! | `@ResponseStatus` | 자동 상태 코드 매핑 |
//! | Custom Exception | `AppError` 열거형 변형 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! impl PostService {
//!     pub async fn get_post(&self, id: &str) -> Result<PostResponse, AppError> {
//!         let post = self.post_repo
//!             .find_by_id(id)
//!             .await?
//!             .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
//!
//!         self.populate(post).await
//!     }
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | 게시물/사용자 없음 |
//! | `ConflictError` | 409 Conflict | 중복 이메일, 중복 학번 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 없음/만료 |
//! | `AuthorizationError` | 403 Forbidden | 다른 사용자의 게시물 수정/삭제 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패, 서비스 해결 실패 |

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::core::registry::RegistryError;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: MongoDB 관련 오류
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패
/// - `ConflictError`: 중복 생성 등 비즈니스 규칙 위반
/// - `NotFound`: 요청된 리소스가 존재하지 않음
///
/// ### 3. 보안 계층 에러
/// - `AuthenticationError`: 인증 실패
/// - `AuthorizationError`: 소유권 없음
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&post).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// # 발생 시나리오
    /// - 이름 2자 미만, 잘못된 이메일 형식
    /// - 비밀번호 6자 미만, 학번 3자 미만
    /// - 게시물 내용 누락 또는 1000자 초과
    /// - 댓글 누락 또는 500자 초과
    /// - 잘못된 ObjectId 형식
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    ///
    /// # 예제
    /// ```rust,ignore
    /// if self.user_repo.find_by_email(&email).await?.is_some() {
    ///     return Err(AppError::ConflictError("User already exists".to_string()));
    /// }
    /// ```
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    ///
    /// # 발생 시나리오
    /// - 잘못된 이메일 또는 비밀번호
    /// - Authorization 헤더 누락, Bearer 형식 아님
    /// - 만료되었거나 서명이 잘못된 JWT
    /// - 토큰의 사용자가 더 이상 존재하지 않음
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403)
    ///
    /// # 예제
    /// ```rust,ignore
    /// if post.user != user_id {
    ///     return Err(AppError::AuthorizationError(
    ///         "Not authorized to update this post".to_string()
    ///     ));
    /// }
    /// ```
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500)
    ///
    /// # 발생 시나리오
    /// - 비밀번호 해싱 실패
    /// - 토큰 서명 실패
    /// - 서비스 레지스트리 해결 실패
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// # 응답 형식
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    ///
    /// # 상태 코드 매핑
    ///
    /// - `ValidationError` → 400 Bad Request
    /// - `NotFound` → 404 Not Found
    /// - `ConflictError` → 409 Conflict
    /// - `AuthenticationError` → 401 Unauthorized
    /// - `AuthorizationError` → 403 Forbidden
    /// - 나머지 모든 에러 → 500 Internal Server Error
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 레지스트리 해결 실패는 서버 구성 문제이므로 500으로 취급합니다.
impl From<RegistryError> for AppError {
    fn from(error: RegistryError) -> Self {
        AppError::InternalError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// async fn create_post(&self, ..) -> AppResult<PostResponse> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hash = bcrypt::hash(&password, cost).context("Failed to hash password")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
