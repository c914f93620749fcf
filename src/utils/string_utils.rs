//! # 문자열 유틸리티
//! 
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
/// 
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
/// 
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
/// 
/// # 반환값
/// * `Ok(String)` - 정리된 유효한 문자열
/// * `Err(AppError)` - 빈 문자열이거나 공백만 있는 경우
/// 
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
/// 
/// // 성공 케이스
/// assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
/// 
/// // 실패 케이스
/// assert!(validate_required_string("   ", "name").is_err());
/// assert!(validate_required_string("", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} is required", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 공백만 있는 값은 `None`, 나머지는 trim하여 `Some`
fn clean_optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열은 `None`, 나머지는 trim 후 `Some`이 됩니다.
/// 필드가 아예 없는 경우까지 받으려면 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct CreatePostRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     image_url: Option<String>,
/// }
///
/// // {"image_url": "  https://cdn/a.png  "} → Some("https://cdn/a.png")
/// // {"image_url": ""} → None
/// // {"image_url": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
