use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::AuthService;

/// 회원가입
///
/// `POST /api/auth/register` → 201 `{ _id, name, email, college_id, token }`
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("회원가입 요청: {}", payload.email);

    let response = auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인
///
/// `POST /api/auth/login` → 200 `{ _id, name, email, college_id, token }`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 현재 사용자 정보 조회 (인증 필요)
#[get("")]
pub async fn get_me(
    user: AuthenticatedUser,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let profile = auth_service.current_user(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(profile))
}
