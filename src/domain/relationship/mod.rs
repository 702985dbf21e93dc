//! 팔로우 관계 도메인
//!
//! 저장소와 무관한 순수 로직만 담습니다.
//!
//! - [`engine`] - NONE/PENDING/CONFIRMED 상태 전이
//! - [`pagination`] - 정렬된 관계 목록 페이지
//! - [`visibility`] - 관계 목록 공개 범위

pub mod engine;
pub mod pagination;
pub mod visibility;

pub use engine::{FollowOutcome, RelationState};
pub use pagination::{Page, PageWindow};
pub use visibility::RelationKind;
