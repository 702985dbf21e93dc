//! 관계 응답 DTO

use serde::Serialize;
use crate::domain::dto::users::response::UserSummary;
use crate::domain::entities::users::user::User;
use crate::domain::relationship::{FollowOutcome, Page, RelationState};

/// 관계 목록 페이지 (`items`, `total_count`)
pub type RelationPageResponse = Page<UserSummary>;

/// 팔로우 요청 결과
#[derive(Debug, Clone, Serialize)]
pub struct FollowResponse {
    pub result: FollowOutcome,
    pub state: RelationState,
}

impl From<FollowOutcome> for FollowResponse {
    fn from(outcome: FollowOutcome) -> Self {
        Self {
            result: outcome,
            state: outcome.state(),
        }
    }
}

/// `isFollowing` 응답
#[derive(Debug, Clone, Serialize)]
pub struct IsFollowingResponse {
    pub is_following: bool,
    pub state: RelationState,
}

impl IsFollowingResponse {
    /// `is_following`은 요청자의 팔로잉 집합만 봅니다. `state`는 양쪽 문서를 함께 본 결과입니다.
    pub fn new(is_following: bool, state: RelationState) -> Self {
        Self { is_following, state }
    }
}

/// 관계 개수
///
/// 승인 대기 개수는 본인에게만 포함됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountsResponse {
    pub follower_count: u64,
    pub following_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<u64>,
}

impl CountsResponse {
    pub fn of(user: &User, include_pending: bool) -> Self {
        Self {
            follower_count: user.follower_count() as u64,
            following_count: user.following_count() as u64,
            pending_count: include_pending.then(|| user.pending_count() as u64),
        }
    }
}
