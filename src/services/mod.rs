//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로로 싱글톤 관리되며 리포지토리를 주입받습니다.
//!
//! - [`users`] - 가입, 프로필 조회/수정, 닉네임 검색
//! - [`follows`] - 팔로우 관계 전이와 관계 목록
//! - [`auth`] - Bearer 토큰 검증
//!
//! ```rust,ignore
//! use crate::services::follows::FollowService;
//!
//! let follow_service = FollowService::instance();
//! let response = follow_service.request_follow(&me, &target).await?;
//! ```

pub mod users;
pub mod follows;
pub mod auth;
