//! 인증 요청관련 DTO
//!
//! 회원가입과 로그인 요청 본문을 매핑합니다.
//! 클라이언트가 camelCase(`collegeId`)로 보내는 경우도 허용합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청 구조체
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 표시 이름 (공백 제외 2자 이상)
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    /// 학번 (공백 제외 3자 이상)
    #[serde(alias = "collegeId")]
    #[validate(custom(function = "validate_college_id"))]
    pub college_id: String,
}

/// 로그인 요청 구조체
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 2 {
        return Err(ValidationError::new("invalid_name")
            .with_message("Name must be at least 2 characters long".into()));
    }
    Ok(())
}

fn validate_college_id(college_id: &str) -> Result<(), ValidationError> {
    if college_id.trim().chars().count() < 3 {
        return Err(ValidationError::new("invalid_college_id")
            .with_message("College ID must be at least 3 characters long".into()));
    }
    Ok(())
}
