//! 사용자 응답 DTO

use serde::Serialize;
use mongodb::bson::DateTime;
use crate::config::SignupType;
use crate::domain::entities::users::user::{RelationEdge, User};

/// 프로필 응답
///
/// 다른 사용자가 볼 때는 이메일, 가입 경로, 승인 대기 개수를 제외합니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    pub public: bool,
    pub follower_count: u64,
    pub following_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_type: Option<SignupType>,
    pub created_at: DateTime,
}

impl UserResponse {
    /// 다른 사용자에게 보여줄 프로필
    pub fn public_view(user: &User) -> Self {
        Self::build(user, false)
    }

    /// 본인에게 보여줄 프로필
    pub fn owner_view(user: &User) -> Self {
        Self::build(user, true)
    }

    fn build(user: &User, owner: bool) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            nickname: user.nickname.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            website: user.website.clone(),
            profile_photo_url: user.profile_photo_url.clone(),
            public: user.public,
            follower_count: user.follower_count() as u64,
            following_count: user.following_count() as u64,
            pending_count: owner.then(|| user.pending_count() as u64),
            email: owner.then(|| user.email.clone()),
            signup_type: owner.then_some(user.signup_type),
            created_at: user.created_at,
        }
    }
}

/// 관계 목록과 검색 결과의 한 원소
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// 관계가 생성된 시각 (검색 결과에서는 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime>,
}

impl From<RelationEdge> for UserSummary {
    fn from(edge: RelationEdge) -> Self {
        Self {
            id: edge.user_id.to_hex(),
            nickname: edge.nickname,
            profile_photo_url: edge.profile_photo_url,
            since: Some(edge.created_at),
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            nickname: user.nickname.clone(),
            profile_photo_url: user.profile_photo_url.clone(),
            since: None,
        }
    }
}
