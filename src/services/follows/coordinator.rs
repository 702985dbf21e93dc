//! 관계 전이 실행기
//!
//! 두 사용자를 캐시 없이 로드하고, 상태 머신을 메모리에서 적용한 뒤,
//! 저장소에 버전 검사 쌍 커밋을 요청합니다. 로드와 커밋 사이에 다른 요청이
//! 같은 사용자를 바꾸면 저장소가 `VersionConflict`를 알리고, 실행기는
//! 처음부터 다시 로드하여 전이를 재적용합니다. 재시도 한도를 넘으면
//! `VersionConflict`를 그대로 반환합니다.
//!
//! 비즈니스 에러(`AlreadyRelated` 등)는 재시도하지 않습니다.

use log::{info, warn};
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::config::RelationConfig;
use crate::domain::entities::users::user::{RelationEdge, User};
use crate::domain::relationship::{engine, pagination, FollowOutcome, Page, PageWindow, RelationKind, RelationState};
use crate::errors::errors::AppError;
use crate::repositories::users::UserStore;

pub struct RelationshipCoordinator<'a, S: UserStore + ?Sized> {
    store: &'a S,
    max_retries: u32,
}

impl<'a, S: UserStore + ?Sized> RelationshipCoordinator<'a, S> {
    /// `RELATION_COMMIT_RETRIES` 설정을 재시도 한도로 사용합니다.
    pub fn new(store: &'a S) -> Self {
        Self::with_retries(store, RelationConfig::commit_retries())
    }

    pub fn with_retries(store: &'a S, max_retries: u32) -> Self {
        Self { store, max_retries }
    }

    /// `requester`가 `target`을 팔로우합니다.
    pub async fn request_follow(&self, requester_id: &ObjectId, target_id: &ObjectId) -> Result<FollowOutcome, AppError> {
        let outcome = self
            .run("request_follow", requester_id, target_id, engine::request_follow)
            .await?;

        info!("➕ 팔로우 {:?}: {} → {}", outcome, requester_id, target_id);
        Ok(outcome)
    }

    /// `target`(본인)이 `requester`의 요청을 승인합니다.
    pub async fn approve(&self, target_id: &ObjectId, requester_id: &ObjectId) -> Result<(), AppError> {
        self.run("approve", target_id, requester_id, engine::approve).await?;

        info!("✅ 팔로우 요청 승인: {} → {}", requester_id, target_id);
        Ok(())
    }

    /// `target`(본인)이 `requester`의 요청을 거절합니다.
    pub async fn refuse(&self, target_id: &ObjectId, requester_id: &ObjectId) -> Result<(), AppError> {
        self.run("refuse", target_id, requester_id, |target, requester, now| {
            engine::refuse(target, requester, now)
        })
        .await?;

        info!("🚫 팔로우 요청 거절: {} → {}", requester_id, target_id);
        Ok(())
    }

    /// `requester`가 `target` 팔로우를 해제합니다.
    pub async fn unfollow(&self, requester_id: &ObjectId, target_id: &ObjectId) -> Result<(), AppError> {
        self.run("unfollow", requester_id, target_id, engine::unfollow).await?;

        info!("➖ 언팔로우: {} → {}", requester_id, target_id);
        Ok(())
    }

    /// `requester`의 팔로잉에 `target`이 있는지와, 두 사람 사이의 관계 상태
    pub async fn follow_status(&self, requester_id: &ObjectId, target_id: &ObjectId) -> Result<(bool, RelationState), AppError> {
        let requester = self.load(requester_id).await?;
        let target = self.load(target_id).await?;

        Ok((
            engine::is_following(&requester, target_id),
            engine::relation_state(&requester, &target),
        ))
    }

    /// 공개 범위를 확인한 뒤 `owner`의 관계 집합 한 페이지를 반환합니다.
    pub async fn list_relations(
        &self,
        viewer_id: &ObjectId,
        owner_id: &ObjectId,
        kind: RelationKind,
        window: PageWindow,
    ) -> Result<Page<RelationEdge>, AppError> {
        let owner = self.load(owner_id).await?;
        kind.authorize(viewer_id, &owner)?;

        Ok(pagination::paginate_edges(kind.edges(&owner), window))
    }

    /// 존재하지 않으면 `UserNotFound`
    pub async fn load(&self, id: &ObjectId) -> Result<User, AppError> {
        self.store
            .load_user(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }

    async fn run<T, F>(&self, operation: &str, first_id: &ObjectId, second_id: &ObjectId, transition: F) -> Result<T, AppError>
    where
        F: Fn(&mut User, &mut User, DateTime) -> Result<T, AppError>,
    {
        let mut attempt = 0;

        loop {
            let mut first = self.load(first_id).await?;
            let mut second = if first_id == second_id {
                first.clone()
            } else {
                self.load(second_id).await?
            };

            let outcome = transition(&mut first, &mut second, DateTime::now())?;

            match self.store.commit_pair(&first, &second).await {
                Ok(()) => return Ok(outcome),
                Err(AppError::VersionConflict(reason)) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!("⚠️ {} 버전 충돌, 재시도 {}/{}: {}", operation, attempt, self.max_retries, reason);
                }
                Err(e) => {
                    if matches!(e, AppError::VersionConflict(_)) {
                        warn!("❌ {} 재시도 한도 초과: {} / {}", operation, first_id, second_id);
                    }
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use async_trait::async_trait;
    use crate::domain::relationship::engine::tests::{assert_invariants, user};
    use crate::repositories::users::InMemoryUserStore;

    fn seeded(store: &InMemoryUserStore, nickname: &str, public: bool) -> ObjectId {
        store.insert(user(nickname, public)).id.unwrap()
    }

    fn window(offset: i64, limit: i64) -> PageWindow {
        PageWindow::new(offset, limit).unwrap()
    }

    #[actix_web::test]
    async fn test_public_follow_is_confirmed_and_persisted() {
        let store = InMemoryUserStore::new();
        let requester = seeded(&store, "requester", true);
        let target = seeded(&store, "target", true);
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);

        let outcome = coordinator.request_follow(&requester, &target).await.unwrap();

        assert_eq!(outcome, FollowOutcome::Followed);
        assert!(coordinator.follow_status(&requester, &target).await.unwrap().0);
        assert_eq!(store.get(&target).unwrap().follower_count(), 1);
        assert_eq!(store.get(&requester).unwrap().version, 1);
        assert_eq!(store.get(&target).unwrap().version, 1);
    }

    #[actix_web::test]
    async fn test_private_follow_then_approve() {
        let store = InMemoryUserStore::new();
        let requester = seeded(&store, "requester", true);
        let target = seeded(&store, "target", false);
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);

        let outcome = coordinator.request_follow(&requester, &target).await.unwrap();
        assert_eq!(outcome, FollowOutcome::Requested);
        assert!(!coordinator.follow_status(&requester, &target).await.unwrap().0);
        assert_eq!(store.get(&target).unwrap().pending_count(), 1);

        coordinator.approve(&target, &requester).await.unwrap();

        assert_eq!(store.get(&target).unwrap().pending_count(), 0);
        assert_eq!(
            coordinator.follow_status(&requester, &target).await.unwrap().1,
            RelationState::Confirmed
        );
    }

    #[actix_web::test]
    async fn test_refuse_then_unfollow_fails() {
        let store = InMemoryUserStore::new();
        let requester = seeded(&store, "requester", true);
        let target = seeded(&store, "target", false);
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);
        coordinator.request_follow(&requester, &target).await.unwrap();

        coordinator.refuse(&target, &requester).await.unwrap();

        assert_eq!(
            coordinator.follow_status(&requester, &target).await.unwrap().1,
            RelationState::None
        );
        assert!(matches!(
            coordinator.unfollow(&requester, &target).await,
            Err(AppError::NotFollowing(_))
        ));
        assert!(matches!(
            coordinator.refuse(&target, &requester).await,
            Err(AppError::NoPendingRequest(_))
        ));
    }

    #[actix_web::test]
    async fn test_follow_flag_reads_requester_following_only() {
        let store = InMemoryUserStore::new();
        let requester = store.insert(user("requester", true));
        let requester_id = requester.id.unwrap();
        let mut target = user("target", true);
        target.follower.push(RelationEdge::pointing_to(requester_id, &requester, DateTime::now()));
        let target_id = store.insert(target).id.unwrap();
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);

        let (is_following, state) = coordinator.follow_status(&requester_id, &target_id).await.unwrap();

        assert!(!is_following);
        assert_eq!(state, RelationState::Confirmed);
    }

    #[actix_web::test]
    async fn test_unfollow_confirmed_pair() {
        let store = InMemoryUserStore::new();
        let requester = seeded(&store, "requester", true);
        let target = seeded(&store, "target", true);
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);
        coordinator.request_follow(&requester, &target).await.unwrap();

        coordinator.unfollow(&requester, &target).await.unwrap();

        assert!(store.get(&requester).unwrap().following.is_empty());
        assert!(store.get(&target).unwrap().follower.is_empty());
    }

    #[actix_web::test]
    async fn test_failed_transition_does_not_commit() {
        let store = InMemoryUserStore::new();
        let requester = seeded(&store, "requester", true);
        let target = seeded(&store, "target", true);
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);
        coordinator.request_follow(&requester, &target).await.unwrap();

        let again = coordinator.request_follow(&requester, &target).await;

        assert!(matches!(again, Err(AppError::AlreadyRelated(_))));
        assert_eq!(store.get(&requester).unwrap().version, 1);
        assert_eq!(store.get(&target).unwrap().follower_count(), 1);
    }

    #[actix_web::test]
    async fn test_missing_user_is_not_found() {
        let store = InMemoryUserStore::new();
        let requester = seeded(&store, "requester", true);
        let ghost = ObjectId::new();
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);

        assert!(matches!(
            coordinator.request_follow(&requester, &ghost).await,
            Err(AppError::UserNotFound(_))
        ));
        assert!(matches!(
            coordinator.follow_status(&requester, &ghost).await,
            Err(AppError::UserNotFound(_))
        ));
        assert_eq!(store.get(&requester).unwrap().version, 0);
    }

    #[actix_web::test]
    async fn test_self_transitions_fail() {
        let store = InMemoryUserStore::new();
        let me = seeded(&store, "me", true);
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);

        assert!(matches!(coordinator.request_follow(&me, &me).await, Err(AppError::AlreadyRelated(_))));
        assert!(matches!(coordinator.approve(&me, &me).await, Err(AppError::NoPendingRequest(_))));
        assert!(matches!(coordinator.unfollow(&me, &me).await, Err(AppError::NotFollowing(_))));
        assert_eq!(store.get(&me).unwrap().version, 0);
    }

    #[actix_web::test]
    async fn test_list_relations_is_gated_and_paginated() {
        let store = InMemoryUserStore::new();
        let owner = seeded(&store, "owner", false);
        let stranger = seeded(&store, "stranger", true);
        let followers: Vec<_> = (0..5)
            .map(|i| seeded(&store, &format!("follower{}", i), true))
            .collect();
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);

        for follower in &followers {
            coordinator.request_follow(follower, &owner).await.unwrap();
            coordinator.approve(&owner, follower).await.unwrap();
        }

        let page = coordinator
            .list_relations(&followers[0], &owner, RelationKind::Follower, window(2, 2))
            .await
            .unwrap();
        assert_eq!(page.total_count, 5);
        assert_eq!(page.items.len(), 2);

        let past_end = coordinator
            .list_relations(&owner, &owner, RelationKind::Follower, window(10, 2))
            .await
            .unwrap();
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total_count, 5);

        assert!(matches!(
            coordinator.list_relations(&stranger, &owner, RelationKind::Follower, window(0, 10)).await,
            Err(AppError::AccessDenied(_))
        ));
        assert!(matches!(
            coordinator.list_relations(&followers[0], &owner, RelationKind::Waiting, window(0, 10)).await,
            Err(AppError::AccessDenied(_))
        ));
    }

    /// 첫 커밋 직전에 경쟁 요청의 커밋을 끼워 넣는 저장소
    struct RacingStore {
        inner: InMemoryUserStore,
        requester: ObjectId,
        target: ObjectId,
        raced: AtomicU32,
        commits: AtomicU32,
    }

    #[async_trait]
    impl UserStore for RacingStore {
        async fn load_user(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
            self.inner.load_user(id).await
        }

        async fn commit_pair(&self, first: &User, second: &User) -> Result<(), AppError> {
            self.commits.fetch_add(1, Ordering::SeqCst);

            if self.raced.fetch_add(1, Ordering::SeqCst) == 0 {
                let mut requester = self.inner.get(&self.requester).unwrap();
                let mut target = self.inner.get(&self.target).unwrap();
                engine::request_follow(&mut requester, &mut target, DateTime::now()).unwrap();
                self.inner.commit_pair(&requester, &target).await.unwrap();
            }

            self.inner.commit_pair(first, second).await
        }
    }

    #[actix_web::test]
    async fn test_conflict_reloads_and_observes_committed_state() {
        let inner = InMemoryUserStore::new();
        let requester = seeded(&inner, "requester", true);
        let target = seeded(&inner, "target", true);
        let store = RacingStore {
            inner,
            requester,
            target,
            raced: AtomicU32::new(0),
            commits: AtomicU32::new(0),
        };
        let coordinator = RelationshipCoordinator::with_retries(&store, 3);

        let result = coordinator.request_follow(&requester, &target).await;

        assert!(matches!(result, Err(AppError::AlreadyRelated(_))));
        assert_eq!(store.commits.load(Ordering::SeqCst), 1);
        assert_eq!(store.inner.get(&target).unwrap().follower_count(), 1);
        assert_eq!(store.inner.get(&requester).unwrap().following_count(), 1);
    }

    /// 항상 버전 충돌을 알리는 저장소
    struct ConflictingStore {
        inner: InMemoryUserStore,
        commits: AtomicU32,
    }

    #[async_trait]
    impl UserStore for ConflictingStore {
        async fn load_user(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
            self.inner.load_user(id).await
        }

        async fn commit_pair(&self, _first: &User, _second: &User) -> Result<(), AppError> {
            self.commits.fetch_add(1, Ordering::SeqCst);
            Err(AppError::VersionConflict("always".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_retries_are_bounded() {
        let inner = InMemoryUserStore::new();
        let requester = seeded(&inner, "requester", true);
        let target = seeded(&inner, "target", true);
        let store = ConflictingStore { inner, commits: AtomicU32::new(0) };
        let coordinator = RelationshipCoordinator::with_retries(&store, 2);

        let result = coordinator.request_follow(&requester, &target).await;

        assert!(matches!(result, Err(AppError::VersionConflict(_))));
        assert_eq!(store.commits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_racing_requests_yield_exactly_one_success() {
        let store = Arc::new(InMemoryUserStore::new());
        let requester = seeded(&store, "requester", true);
        let target = seeded(&store, "target", true);

        let results: Vec<Result<FollowOutcome, AppError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || {
                        actix_web::rt::System::new().block_on(async move {
                            RelationshipCoordinator::with_retries(store.as_ref(), 8)
                                .request_follow(&requester, &target)
                                .await
                        })
                    })
                })
                .collect();

            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        let successes = results.iter().filter(|result| result.is_ok()).count();
        assert_eq!(successes, 1);
        assert!(results
            .iter()
            .filter_map(|result| result.as_ref().err())
            .all(|e| matches!(e, AppError::AlreadyRelated(_))));
        assert_eq!(store.get(&target).unwrap().follower_count(), 1);
        assert_invariants(&store.all());
    }

    #[test]
    fn test_invariants_hold_under_concurrent_mixed_operations() {
        let store = Arc::new(InMemoryUserStore::new());
        let ids: Vec<ObjectId> = [("alpha", true), ("bravo", false), ("charlie", true)]
            .iter()
            .map(|(nickname, public)| seeded(&store, nickname, *public))
            .collect();

        std::thread::scope(|scope| {
            for worker in 0..6usize {
                let store = Arc::clone(&store);
                let ids = ids.clone();
                scope.spawn(move || {
                    actix_web::rt::System::new().block_on(async move {
                        let coordinator = RelationshipCoordinator::with_retries(store.as_ref(), 16);
                        for step in 0..60usize {
                            let a = ids[(worker + step) % 3];
                            let b = ids[(worker * 7 + step * 3 + 1) % 3];
                            // 비즈니스 에러와 재시도 초과는 정상 결과로 취급합니다
                            let _ = match (worker + step) % 4 {
                                0 => coordinator.request_follow(&a, &b).await.map(|_| ()),
                                1 => coordinator.approve(&b, &a).await,
                                2 => coordinator.refuse(&b, &a).await,
                                _ => coordinator.unfollow(&a, &b).await,
                            };
                        }
                    });
                });
            }
        });

        assert_invariants(&store.all());
    }
}
