//! 문자열 처리 유틸리티
//!
//! 요청 DTO의 선택 필드 정리, 필수값 검증, 닉네임 접두사 검색용
//! 정규식 이스케이프를 제공합니다.

use serde::Deserialize;
use crate::errors::errors::AppError;

/// 필수 문자열을 trim한 뒤 비어 있으면 검증 에러를 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택 문자열을 trim하고, 공백뿐이면 `None`으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// serde `deserialize_with`용: 빈 문자열을 `None`으로 역직렬화합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// MongoDB `$regex`에 리터럴로 넣을 수 있도록 정규식 메타문자를 이스케이프합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '-' | '#') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("  World  ", "nickname").unwrap(), "World");
        assert!(validate_required_string("", "nickname").is_err());
        assert!(validate_required_string("\t\n", "nickname").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  bio  ".to_string())), Some("bio".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct ProfilePatch {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            website: Option<String>,
        }

        let patch: ProfilePatch = serde_json::from_str(r#"{"website": "  https://waffle.dev  "}"#).unwrap();
        assert_eq!(patch.website, Some("https://waffle.dev".to_string()));

        let patch: ProfilePatch = serde_json::from_str(r#"{"website": "   "}"#).unwrap();
        assert_eq!(patch.website, None);

        let patch: ProfilePatch = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(patch.website, None);
    }

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("kim"), "kim");
        assert_eq!(escape_regex("a.b"), "a\\.b");
        assert_eq!(escape_regex("(x)*"), "\\(x\\)\\*");
        assert_eq!(escape_regex("한글"), "한글");
    }
}
