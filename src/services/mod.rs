//! 비즈니스 로직 계층
//!
//! 서비스는 리포지토리 트레이트 객체를 생성자로 주입받는 평범한 구조체입니다.
//! 인스턴스 생성과 연결은 `app::configure_services`가 서비스 레지스트리를 통해 수행합니다.
//!
//! # Modules
//!
//! - [`auth`] - `TokenService`, `AuthService`
//! - [`posts`] - `PostService`
//!
//! # Examples
//!
//! ```rust,ignore
//! let post_service: Arc<PostService> = registry.resolve("postService")?;
//! let posts = post_service.get_posts().await?;
//! ```

pub mod auth;
pub mod posts;
