//! 팔로우 관계 서비스 모듈
//!
//! - [`coordinator`] - 저장소에 독립적인 전이 실행기 (로드, 전이, 쌍 커밋, 재시도)
//! - [`follow_service`] - `UserRepository`에 연결된 싱글톤 서비스

pub mod coordinator;
pub mod follow_service;

pub use coordinator::RelationshipCoordinator;
pub use follow_service::FollowService;
