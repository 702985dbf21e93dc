//! 프로필 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::users::request::create_user::validate_nickname;
use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 부분 수정 요청
///
/// 전달된 필드만 변경합니다. 빈 문자열은 `None`으로 취급합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 3, max = 30, message = "닉네임은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_nickname"))]
    pub nickname: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "이름은 50자 이하여야 합니다"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 300, message = "자기소개는 300자 이하여야 합니다"))]
    pub bio: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    pub website: Option<String>,

    /// 공개 계정 여부. 비공개에서 공개로 바꿔도 대기 중인 요청은 자동 승인되지 않습니다.
    #[serde(default)]
    pub public: Option<bool>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.nickname.is_none()
            && self.name.is_none()
            && self.bio.is_none()
            && self.website.is_none()
            && self.public.is_none()
    }
}

/// 프로필 사진 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfilePhotoRequest {
    #[validate(url(message = "유효한 이미지 URL을 입력해주세요"))]
    pub profile_photo_url: String,
}
