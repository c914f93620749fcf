//! 게시글/댓글 요청 DTO
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::posts::{MAX_COMMENT_TEXT_LENGTH, MAX_POST_CONTENT_LENGTH};
use crate::utils::string_utils::deserialize_optional_string;

/// 게시글 작성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(custom(function = "validate_post_content"))]
    pub content: String,

    /// 이미지 URL (빈 문자열은 None으로 처리)
    #[serde(default, alias = "imageUrl", deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
}

/// 게시글 수정 요청
///
/// 전달된 필드만 갱신합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(custom(function = "validate_post_content"))]
    pub content: Option<String>,

    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl UpdatePostRequest {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.image_url.is_none()
    }
}

/// 댓글 작성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(custom(function = "validate_comment_text"))]
    pub text: String,
}

fn validate_post_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::new("empty_content")
            .with_message("Post content cannot be empty".into()));
    }
    if content.chars().count() > MAX_POST_CONTENT_LENGTH {
        return Err(ValidationError::new("content_too_long")
            .with_message("Post content cannot exceed 1000 characters".into()));
    }
    Ok(())
}

fn validate_comment_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("empty_text")
            .with_message("Comment text cannot be empty".into()));
    }
    if text.chars().count() > MAX_COMMENT_TEXT_LENGTH {
        return Err(ValidationError::new("text_too_long")
            .with_message("Comment cannot exceed 500 characters".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_content_bounds() {
        let blank = CreatePostRequest { content: "   ".to_string(), image_url: None };
        assert!(blank.validate().is_err());

        let max = CreatePostRequest { content: "a".repeat(1000), image_url: None };
        assert!(max.validate().is_ok());

        let too_long = CreatePostRequest { content: "a".repeat(1001), image_url: None };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_post_content_counts_characters_not_bytes() {
        let korean = CreatePostRequest { content: "가".repeat(1000), image_url: None };
        assert!(korean.validate().is_ok());
    }

    #[test]
    fn test_update_request_skips_missing_content() {
        let request: UpdatePostRequest = serde_json::from_str(r#"{"imageUrl":"http://img"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert!(!request.is_empty());
        assert_eq!(request.image_url.as_deref(), Some("http://img"));

        let blank: UpdatePostRequest = serde_json::from_str(r#"{"content":" "}"#).unwrap();
        assert!(blank.validate().is_err());

        assert!(UpdatePostRequest::default().is_empty());
    }

    #[test]
    fn test_comment_text_bounds() {
        assert!(CreateCommentRequest { text: "nice".to_string() }.validate().is_ok());
        assert!(CreateCommentRequest { text: "".to_string() }.validate().is_err());
        assert!(CreateCommentRequest { text: "a".repeat(501) }.validate().is_err());
    }

    #[test]
    fn test_blank_image_url_becomes_none() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"content":"hi","image_url":"  "}"#).unwrap();
        assert!(request.image_url.is_none());
    }
}
