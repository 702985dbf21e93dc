//! 회원가입 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 로컬 회원가입 요청
///
/// 이메일과 닉네임의 중복 여부는 서비스 계층에서 검증합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct CreateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 닉네임 (검색과 관계 목록 표시에 사용)
    ///
    /// 영문, 숫자, 언더스코어, 마침표만 허용합니다.
    #[validate(length(
        min = 3,
        max = 30,
        message = "닉네임은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_nickname"))]
    pub nickname: String,

    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 비밀번호 확인
    pub password_confirm: String,

    /// 공개 계정 여부 (기본 공개)
    #[serde(default)]
    pub public: Option<bool>,
}

fn validate_passwords_match(req: &CreateUserRequest) -> Result<(), ValidationError> {
    if req.password != req.password_confirm {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

pub(crate) fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if !nickname.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.') {
        return Err(ValidationError::new("invalid_nickname")
            .with_message("닉네임은 영문, 숫자, 언더스코어, 마침표만 사용 가능합니다".into()));
    }
    Ok(())
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}
