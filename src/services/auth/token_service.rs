//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 JWT의 발급과 검증을 담당합니다.
//! 클레임은 `sub`(사용자 ID), `iat`, `exp`만 포함합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::models::token::TokenClaims;

/// JWT 토큰 관리 서비스
///
/// 비밀키와 만료 기간은 생성 시점에 고정됩니다.
/// 레지스트리에는 `tokenService`라는 이름의 싱글톤으로 등록됩니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_days: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_days,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_DAYS` 환경 변수로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_days())
    }

    pub fn expiration_days(&self) -> i64 {
        self.expiration_days
    }

    /// 사용자 ID로 토큰을 발급합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.generate_token(&user_id)?;
    /// ```
    pub fn generate_token(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(self.expiration_days);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &TokenClaims) -> AppResult<String> {
        encode(&Header::default(), claims, &self.encoding_key)
            .context("Failed to generate token")
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => {
                    log::debug!("Token verification failed: {}", e);
                    AppError::AuthenticationError("Not authorized, token failed".to_string())
                }
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("Not authorized, no token".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 30)
    }

    #[test]
    fn test_generate_and_verify() {
        let service = service();
        let token = service.generate_token("507f1f77bcf86cd799439011").unwrap();

        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "507f1f77bcf86cd799439011");
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_rejects_token_signed_with_other_secret() {
        let token = TokenService::new("other-secret", 30)
            .generate_token("user")
            .unwrap();

        let error = service().verify_token(&token).unwrap_err();
        assert!(matches!(error, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_rejects_expired_token() {
        let service = service();
        let now = Utc::now().timestamp();
        let token = service
            .encode_claims(&TokenClaims {
                sub: "user".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(message)) => assert_eq!(message, "Token has expired"),
            other => panic!("expected expired token error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            service().verify_token("not.a.jwt"),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("abc.def").is_err());
    }
}
