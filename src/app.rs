//! # Application Wiring
//!
//! 서비스 레지스트리에 모든 컴포넌트를 등록하고 해결하는 조립 루틴입니다.
//!
//! ```text
//! database ──┬── userRepository ──┬── authService ── tokenService
//!            ├── postRepository ──┤
//!            └── commentRepository┴── postService
//! ```
//!
//! 리포지토리는 MongoDB에 의존하는 부분([`register_repositories`])과
//! 저장소에 무관한 서비스 부분([`register_services`])으로 나뉘어 있어,
//! 테스트에서는 같은 이름으로 다른 구현을 넣고 서비스 등록만 재사용할 수 있습니다.

use std::sync::Arc;

use log::info;

use crate::core::errors::AppError;
use crate::core::registry::{RegistryError, ServiceRegistry};
use crate::db::Database;
use crate::repositories::posts::{
    CommentRepository, MongoCommentRepository, MongoPostRepository, PostRepository,
};
use crate::repositories::users::{MongoUserRepository, UserRepository};
use crate::services::auth::{AuthService, TokenService};
use crate::services::posts::PostService;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_registration, print_step_complete,
    print_step_start,
};

pub const DATABASE: &str = "database";
pub const USER_REPOSITORY: &str = "userRepository";
pub const POST_REPOSITORY: &str = "postRepository";
pub const COMMENT_REPOSITORY: &str = "commentRepository";
pub const TOKEN_SERVICE: &str = "tokenService";
pub const AUTH_SERVICE: &str = "authService";
pub const POST_SERVICE: &str = "postService";

const REPOSITORIES: [&str; 3] = [USER_REPOSITORY, POST_REPOSITORY, COMMENT_REPOSITORY];
const SERVICES: [&str; 3] = [TOKEN_SERVICE, AUTH_SERVICE, POST_SERVICE];

/// 전체 컴포넌트를 등록하고 구성 결과를 터미널에 출력합니다.
///
/// 등록만 수행하며 인스턴스는 첫 해결 시점에 생성됩니다.
pub fn configure_services(registry: &ServiceRegistry, database: Arc<Database>) {
    print_boxed_title("Service Registry");

    print_step_start(1, "Registering infrastructure");
    registry.register_instance(DATABASE, database);
    print_step_complete(1, "Infrastructure registered", 1);

    print_step_start(2, "Registering repositories");
    register_repositories(registry);
    print_step_complete(2, "Repositories registered", REPOSITORIES.len());

    print_step_start(3, "Registering services");
    register_services(registry);
    print_step_complete(3, "Services registered", SERVICES.len());

    for name in registry.names() {
        if let Some(descriptor) = registry.descriptor(&name) {
            print_registration(&name, descriptor.dependency_names(), descriptor.is_singleton());
        }
    }

    print_final_summary(REPOSITORIES.len(), SERVICES.len(), registry.len());
}

/// MongoDB 리포지토리 등록 (모두 `database`에 의존)
pub fn register_repositories(registry: &ServiceRegistry) {
    registry
        .register(USER_REPOSITORY)
        .depends_on(DATABASE)
        .factory(|deps| {
            let database: Arc<Database> = deps.get(DATABASE)?;
            let repository: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database));
            Ok(repository)
        });

    registry
        .register(POST_REPOSITORY)
        .depends_on(DATABASE)
        .factory(|deps| {
            let database: Arc<Database> = deps.get(DATABASE)?;
            let repository: Arc<dyn PostRepository> = Arc::new(MongoPostRepository::new(database));
            Ok(repository)
        });

    registry
        .register(COMMENT_REPOSITORY)
        .depends_on(DATABASE)
        .factory(|deps| {
            let database: Arc<Database> = deps.get(DATABASE)?;
            let repository: Arc<dyn CommentRepository> = Arc::new(MongoCommentRepository::new(database));
            Ok(repository)
        });
}

/// 비즈니스 서비스 등록
pub fn register_services(registry: &ServiceRegistry) {
    registry.register_instance(TOKEN_SERVICE, Arc::new(TokenService::from_config()));

    registry
        .register(AUTH_SERVICE)
        .depends_on(USER_REPOSITORY)
        .depends_on(TOKEN_SERVICE)
        .factory(|deps| {
            Ok(Arc::new(AuthService::new(
                deps.get::<Arc<dyn UserRepository>>(USER_REPOSITORY)?,
                deps.get::<Arc<TokenService>>(TOKEN_SERVICE)?,
            )))
        });

    registry
        .register(POST_SERVICE)
        .depends_on_all([POST_REPOSITORY, COMMENT_REPOSITORY, USER_REPOSITORY])
        .factory(|deps| {
            Ok(Arc::new(PostService::new(
                deps.get::<Arc<dyn PostRepository>>(POST_REPOSITORY)?,
                deps.get::<Arc<dyn CommentRepository>>(COMMENT_REPOSITORY)?,
                deps.get::<Arc<dyn UserRepository>>(USER_REPOSITORY)?,
            )))
        });
}

/// HTTP 계층에 넘겨줄 해결된 서비스 묶음
#[derive(Clone)]
pub struct AppServices {
    pub auth_service: Arc<AuthService>,
    pub post_service: Arc<PostService>,
}

impl AppServices {
    /// 레지스트리에서 최상위 서비스를 해결합니다.
    ///
    /// 해결 과정에서 의존 리포지토리와 토큰 서비스도 함께 생성되어 캐시됩니다.
    pub fn resolve(registry: &ServiceRegistry) -> Result<Self, RegistryError> {
        let services = Self {
            auth_service: registry.resolve(AUTH_SERVICE)?,
            post_service: registry.resolve(POST_SERVICE)?,
        };

        info!("✅ {}개 컴포넌트 해결 완료", registry.len());
        Ok(services)
    }
}

/// 등록된 리포지토리의 컬렉션 인덱스를 생성합니다.
pub async fn ensure_indexes(registry: &ServiceRegistry) -> Result<(), AppError> {
    let users: Arc<dyn UserRepository> = registry.resolve(USER_REPOSITORY)?;
    let posts: Arc<dyn PostRepository> = registry.resolve(POST_REPOSITORY)?;
    let comments: Arc<dyn CommentRepository> = registry.resolve(COMMENT_REPOSITORY)?;

    users.create_indexes().await?;
    posts.create_indexes().await?;
    comments.create_indexes().await?;

    info!("✅ 인덱스 생성 완료");
    Ok(())
}
