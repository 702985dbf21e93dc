//! 팔로우 관계 상태 머신
//!
//! 순서쌍 (요청자 R, 대상 T)마다 세 가지 상태가 있습니다.
//!
//! ```text
//!                 request_follow (T 공개)
//!        ┌──────────────────────────────────────┐
//!        │                                      ▼
//!     ┌──────┐  request_follow (T 비공개)  ┌───────────┐
//!     │ NONE │ ─────────────────────────▶ │  PENDING  │
//!     └──────┘ ◀───────── refuse ──────── └───────────┘
//!        ▲                                      │ approve
//!        │                                      ▼
//!        │                unfollow        ┌───────────┐
//!        └─────────────────────────────── │ CONFIRMED │
//!                                         └───────────┘
//! ```
//!
//! 모든 함수는 이미 로드된 두 애그리거트를 메모리에서만 변경합니다.
//! 실패한 전이는 어떤 집합도 건드리지 않으므로, 호출자는 `Ok`일 때만
//! 두 애그리거트를 함께 커밋하면 됩니다. 전이는 멱등이 아니며, 같은 요청을
//! 반복하면 에러를 반환합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::Serialize;
use crate::domain::entities::users::user::{RelationEdge, User};
use crate::errors::errors::AppError;

/// 순서쌍 (요청자, 대상)의 관계 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationState {
    /// 관계 없음
    None,
    /// 대상의 `waiting_follower`에 요청자가 있음
    Pending,
    /// 양방향 간선이 모두 존재함
    Confirmed,
}

/// `request_follow` 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowOutcome {
    /// 공개 계정: 즉시 팔로우 확정
    Followed,
    /// 비공개 계정: 승인 대기열에 등록
    Requested,
}

impl FollowOutcome {
    pub fn state(self) -> RelationState {
        match self {
            FollowOutcome::Followed => RelationState::Confirmed,
            FollowOutcome::Requested => RelationState::Pending,
        }
    }
}

/// 요청자 → 대상의 현재 상태를 계산합니다.
///
/// 어느 한쪽 간선만 남아 있는 경우도 `Confirmed`로 취급하여 새 요청을 막습니다.
pub fn relation_state(requester: &User, target: &User) -> RelationState {
    let (Some(requester_id), Some(target_id)) = (requester.id, target.id) else {
        return RelationState::None;
    };

    if requester.follows(&target_id) || target.is_followed_by(&requester_id) {
        RelationState::Confirmed
    } else if target.has_pending_request_from(&requester_id) {
        RelationState::Pending
    } else {
        RelationState::None
    }
}

/// 요청자가 대상을 확정 팔로우 중인지 확인합니다.
pub fn is_following(requester: &User, target_id: &ObjectId) -> bool {
    requester.follows(target_id)
}

/// 팔로우를 요청합니다. NONE 상태에서만 가능합니다.
///
/// 대상이 공개 계정이면 곧바로 CONFIRMED, 비공개 계정이면 PENDING으로 전이합니다.
pub fn request_follow(requester: &mut User, target: &mut User, now: DateTime) -> Result<FollowOutcome, AppError> {
    let (requester_id, target_id) = pair_ids(requester, target)?;

    if requester_id == target_id {
        return Err(AppError::AlreadyRelated("자기 자신은 팔로우할 수 없습니다".to_string()));
    }

    match relation_state(requester, target) {
        RelationState::Confirmed => {
            return Err(AppError::AlreadyRelated(format!("이미 팔로우 중인 사용자입니다: {}", target_id)));
        }
        RelationState::Pending => {
            return Err(AppError::AlreadyRelated(format!("이미 팔로우 요청을 보냈습니다: {}", target_id)));
        }
        RelationState::None => {}
    }

    if target.public {
        confirm(requester, requester_id, target, target_id, now);
        Ok(FollowOutcome::Followed)
    } else {
        let edge = RelationEdge::pointing_to(requester_id, requester, now);
        target.waiting_follower.push(edge);
        target.updated_at = now;
        Ok(FollowOutcome::Requested)
    }
}

/// 대기 중인 요청을 승인합니다. PENDING 상태에서만 가능합니다.
pub fn approve(target: &mut User, requester: &mut User, now: DateTime) -> Result<(), AppError> {
    let (requester_id, target_id) = pair_ids(requester, target)?;

    if requester_id == target_id || !target.has_pending_request_from(&requester_id) {
        return Err(AppError::NoPendingRequest(format!("팔로우 요청이 없습니다: {}", requester_id)));
    }

    remove_edge(&mut target.waiting_follower, &requester_id);
    confirm(requester, requester_id, target, target_id, now);
    Ok(())
}

/// 대기 중인 요청을 거절합니다. PENDING 상태에서만 가능하며 간선은 생성되지 않습니다.
pub fn refuse(target: &mut User, requester: &User, now: DateTime) -> Result<(), AppError> {
    let (requester_id, target_id) = pair_ids(requester, target)?;

    if requester_id == target_id || !remove_edge(&mut target.waiting_follower, &requester_id) {
        return Err(AppError::NoPendingRequest(format!("팔로우 요청이 없습니다: {}", requester_id)));
    }

    target.updated_at = now;
    Ok(())
}

/// 확정된 팔로우를 해제합니다.
///
/// 양쪽 간선이 모두 있어야 하며, 한쪽이라도 없으면 아무것도 지우지 않고 실패합니다.
pub fn unfollow(requester: &mut User, target: &mut User, now: DateTime) -> Result<(), AppError> {
    let (requester_id, target_id) = pair_ids(requester, target)?;

    if requester_id == target_id
        || !requester.follows(&target_id)
        || !target.is_followed_by(&requester_id)
    {
        return Err(AppError::NotFollowing(format!("팔로우 중인 사용자가 아닙니다: {}", target_id)));
    }

    remove_edge(&mut requester.following, &target_id);
    remove_edge(&mut target.follower, &requester_id);
    requester.updated_at = now;
    target.updated_at = now;
    Ok(())
}

/// 양방향 확정 간선을 추가합니다.
fn confirm(requester: &mut User, requester_id: ObjectId, target: &mut User, target_id: ObjectId, now: DateTime) {
    let follower_edge = RelationEdge::pointing_to(requester_id, requester, now);
    let following_edge = RelationEdge::pointing_to(target_id, target, now);

    if !target.is_followed_by(&requester_id) {
        target.follower.push(follower_edge);
    }
    if !requester.follows(&target_id) {
        requester.following.push(following_edge);
    }

    requester.updated_at = now;
    target.updated_at = now;
}

/// `user_id`를 가리키는 간선을 제거하고, 제거 여부를 반환합니다.
fn remove_edge(edges: &mut Vec<RelationEdge>, user_id: &ObjectId) -> bool {
    let before = edges.len();
    edges.retain(|edge| &edge.user_id != user_id);
    edges.len() != before
}

fn pair_ids(requester: &User, target: &User) -> Result<(ObjectId, ObjectId), AppError> {
    match (requester.id, target.id) {
        (Some(requester_id), Some(target_id)) => Ok((requester_id, target_id)),
        _ => Err(AppError::InternalError("저장되지 않은 사용자는 관계를 맺을 수 없습니다".to_string())),
    }
}
