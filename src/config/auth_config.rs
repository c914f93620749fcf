//! # Authentication Configuration Module
//!
//! JWT 토큰 발급/검증에 필요한 설정을 관리합니다.
//! Spring Security의 `jwt.secret`, `jwt.expiration` 프로퍼티와 같은 역할입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_DAYS="30"
//! ```

use std::env;

use crate::config::Environment;

/// 기본 토큰 만료 기간 (일)
pub const DEFAULT_JWT_EXPIRATION_DAYS: i64 = 30;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본 키를 사용하고 경고 로그를 남깁니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                if Environment::current().is_production() {
                    log::error!("JWT_SECRET not set in production, using insecure default");
                } else {
                    log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                }
                "your-secret-key".to_string()
            })
    }

    /// 토큰 만료 기간(일)을 반환합니다.
    ///
    /// `JWT_EXPIRATION_DAYS`가 양의 정수가 아니면 30일을 사용합니다.
    pub fn expiration_days() -> i64 {
        Self::parse_days(env::var("JWT_EXPIRATION_DAYS").ok().as_deref())
    }

    fn parse_days(raw: Option<&str>) -> i64 {
        raw.and_then(|value| value.parse::<i64>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_JWT_EXPIRATION_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_days_parsing() {
        assert_eq!(JwtConfig::parse_days(Some("7")), 7);
        assert_eq!(JwtConfig::parse_days(Some("0")), DEFAULT_JWT_EXPIRATION_DAYS);
        assert_eq!(JwtConfig::parse_days(Some("-3")), DEFAULT_JWT_EXPIRATION_DAYS);
        assert_eq!(JwtConfig::parse_days(Some("thirty")), DEFAULT_JWT_EXPIRATION_DAYS);
        assert_eq!(JwtConfig::parse_days(None), DEFAULT_JWT_EXPIRATION_DAYS);
    }
}
