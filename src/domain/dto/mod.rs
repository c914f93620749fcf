//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` / `@JsonAlias` | `serde` annotations | JSON 필드 매핑 |
//! | `ResponseEntity<T>` | `Result<HttpResponse, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 설계 원칙
//!
//! ### 1. 내부 표현 vs 외부 표현
//! 엔티티(`User`, `Post`, `Comment`)는 저장 형태, DTO는 응답 형태입니다.
//! 응답은 ObjectId 대신 16진수 문자열을 사용하고, 참조는 요약 정보로 채웁니다.
//!
//! ### 2. 유효성 검증 내장
//! 요청 DTO는 `#[derive(Validate)]`를 구현하며, 핸들러 진입 직후 검증됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 회원가입, 로그인, 프로필
//! │   ├── request/
//! │   └── response/
//! └── posts/              # 게시글, 좋아요, 댓글
//!     ├── request/
//!     └── response/
//! ```

pub mod users;
pub mod posts;

pub use users::{AuthResponse, LoginRequest, RegisterRequest, UserResponse, UserSummary};
pub use posts::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, MessageResponse, PostResponse,
    UpdatePostRequest,
};
