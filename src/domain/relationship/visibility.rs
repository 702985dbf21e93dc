//! 관계 목록 공개 범위
//!
//! 공개 계정의 팔로잉/팔로워 목록은 누구나 볼 수 있습니다. 비공개 계정은
//! 본인과 확정 팔로워만 볼 수 있고, 승인 대기 목록은 본인만 볼 수 있습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{RelationEdge, User};
use crate::errors::errors::AppError;

/// 조회할 관계 집합의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Following,
    Follower,
    Waiting,
}

impl RelationKind {
    /// 소유자의 해당 관계 집합
    pub fn edges(self, owner: &User) -> &[RelationEdge] {
        match self {
            RelationKind::Following => &owner.following,
            RelationKind::Follower => &owner.follower,
            RelationKind::Waiting => &owner.waiting_follower,
        }
    }

    /// 조회자가 소유자의 이 집합을 볼 수 있는지 확인합니다.
    pub fn authorize(self, viewer_id: &ObjectId, owner: &User) -> Result<(), AppError> {
        match self {
            RelationKind::Waiting => ensure_owner(viewer_id, owner),
            RelationKind::Following | RelationKind::Follower => ensure_can_view_relations(viewer_id, owner),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Following => "following",
            RelationKind::Follower => "follower",
            RelationKind::Waiting => "waiting",
        }
    }
}

pub fn is_owner(viewer_id: &ObjectId, owner: &User) -> bool {
    owner.id.as_ref() == Some(viewer_id)
}

/// 공개 계정이거나, 본인이거나, 확정 팔로워인 경우 true
pub fn can_view_relations(viewer_id: &ObjectId, owner: &User) -> bool {
    owner.public || is_owner(viewer_id, owner) || owner.is_followed_by(viewer_id)
}

pub fn ensure_can_view_relations(viewer_id: &ObjectId, owner: &User) -> Result<(), AppError> {
    if can_view_relations(viewer_id, owner) {
        Ok(())
    } else {
        Err(AppError::AccessDenied("비공개 계정의 관계 목록은 팔로워만 볼 수 있습니다".to_string()))
    }
}

pub fn ensure_owner(viewer_id: &ObjectId, owner: &User) -> Result<(), AppError> {
    if is_owner(viewer_id, owner) {
        Ok(())
    } else {
        Err(AppError::AccessDenied("팔로우 요청 목록은 본인만 볼 수 있습니다".to_string()))
    }
}
