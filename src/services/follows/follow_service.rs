//! 팔로우 관계 서비스 구현

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::domain::dto::follows::{CountsResponse, FollowResponse, IsFollowingResponse, RelationPageResponse};
use crate::domain::dto::users::response::UserSummary;
use crate::domain::relationship::{visibility, PageWindow, RelationKind};
use crate::errors::errors::AppError;
use crate::repositories::users::UserRepository;
use crate::services::follows::RelationshipCoordinator;

/// 팔로우/승인/거절/언팔로우와 관계 목록 조회
///
/// 모든 연산은 [`RelationshipCoordinator`]에 위임하며, 여기서는 DTO 변환만 합니다.
#[service(name = "follow")]
pub struct FollowService {
    user_repo: Arc<UserRepository>,
}

impl FollowService {
    fn coordinator(&self) -> RelationshipCoordinator<'_, UserRepository> {
        RelationshipCoordinator::new(self.user_repo.as_ref())
    }

    pub async fn request_follow(&self, me: &ObjectId, target_id: &ObjectId) -> Result<FollowResponse, AppError> {
        let outcome = self.coordinator().request_follow(me, target_id).await?;
        Ok(FollowResponse::from(outcome))
    }

    pub async fn unfollow(&self, me: &ObjectId, target_id: &ObjectId) -> Result<(), AppError> {
        self.coordinator().unfollow(me, target_id).await
    }

    /// 내게 온 `requester_id`의 요청을 승인합니다.
    pub async fn approve(&self, me: &ObjectId, requester_id: &ObjectId) -> Result<(), AppError> {
        self.coordinator().approve(me, requester_id).await
    }

    pub async fn refuse(&self, me: &ObjectId, requester_id: &ObjectId) -> Result<(), AppError> {
        self.coordinator().refuse(me, requester_id).await
    }

    pub async fn is_following(&self, me: &ObjectId, target_id: &ObjectId) -> Result<IsFollowingResponse, AppError> {
        let (is_following, state) = self.coordinator().follow_status(me, target_id).await?;
        Ok(IsFollowingResponse::new(is_following, state))
    }

    pub async fn list(
        &self,
        viewer_id: &ObjectId,
        owner_id: &ObjectId,
        kind: RelationKind,
        window: PageWindow,
    ) -> Result<RelationPageResponse, AppError> {
        let page = self
            .coordinator()
            .list_relations(viewer_id, owner_id, kind, window)
            .await?;

        log::debug!(
            "관계 목록 {} 조회: owner={}, viewer={}, {}/{}",
            kind.as_str(), owner_id, viewer_id, page.items.len(), page.total_count
        );

        Ok(page.map(UserSummary::from))
    }

    /// 관계 개수. 승인 대기 개수는 본인에게만 포함됩니다.
    pub async fn counts(&self, viewer_id: Option<&ObjectId>, owner_id: &ObjectId) -> Result<CountsResponse, AppError> {
        let owner = self.coordinator().load(owner_id).await?;
        let is_owner = viewer_id.is_some_and(|viewer| visibility::is_owner(viewer, &owner));

        Ok(CountsResponse::of(&owner, is_owner))
    }
}
