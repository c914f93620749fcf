//! 인증 서비스 구현
//!
//! 회원가입, 로그인, 토큰 검증을 담당합니다.
//! 비밀번호는 bcrypt로 해싱하고, 토큰 발급/검증은 [`TokenService`]에 위임합니다.
//!
//! ## 에러 메시지 정책
//!
//! 로그인 실패는 이메일 존재 여부와 관계없이 같은 메시지를 반환합니다.

use std::sync::Arc;
use std::time::Instant;

use mongodb::bson::oid::ObjectId;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{AuthResponse, UserResponse};
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// 인증 서비스
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AuthService {
    /// 환경별 bcrypt cost(`PasswordConfig::bcrypt_cost`)로 생성합니다.
    pub fn new(user_repo: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self::with_bcrypt_cost(user_repo, token_service, PasswordConfig::bcrypt_cost())
    }

    pub fn with_bcrypt_cost(
        user_repo: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            token_service,
            bcrypt_cost,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// 새 사용자 등록
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 이메일 또는 학번이 이미 사용 중
    /// * `InternalError` - 해싱/토큰 발급 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        let start_time = Instant::now();

        let email = request.email.trim().to_string();
        let college_id = request.college_id.trim().to_string();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        if self.user_repo.find_by_college_id(&college_id).await?.is_some() {
            return Err(AppError::ConflictError(
                "User with this college ID already exists".to_string(),
            ));
        }

        let hash_start = Instant::now();
        let password_hash = bcrypt::hash(&request.password, self.bcrypt_cost)
            .context("Password hashing failed")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.name.trim().to_string(), email, password_hash, college_id);
        let created_user = self.user_repo.create(user).await?;

        let user_id = created_user
            .id_string()
            .ok_or_else(|| AppError::InternalError("Created user has no id".to_string()))?;
        let token = self.token_service.generate_token(&user_id)?;

        log::info!("👤 사용자 등록 완료: {} ({:?})", user_id, start_time.elapsed());

        Ok(AuthResponse::new(created_user, token))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// # Errors
    ///
    /// * `AuthenticationError` - 이메일이 없거나 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let email = request.email.trim().to_string();

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let verify_start = Instant::now();
        let is_valid = bcrypt::verify(&request.password, &user.password_hash)
            .context("Password comparison failed")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("🔒 로그인 실패: {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("Stored user has no id".to_string()))?;
        let token = self.token_service.generate_token(&user_id)?;

        log::info!("🔑 로그인 성공: {}", user_id);

        Ok(AuthResponse::new(user, token))
    }

    /// 토큰을 검증하고 해당 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AuthenticationError` - 토큰이 유효하지 않거나 사용자가 존재하지 않음
    pub async fn verify_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self.token_service.verify_token(token)?;

        let user_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("Not authorized, invalid token".to_string()))?;

        self.user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Not authorized, invalid token".to_string()))
    }

    /// 현재 사용자 프로필
    pub async fn current_user(&self, user_id: &ObjectId) -> Result<UserResponse, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
