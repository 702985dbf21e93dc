//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 핵심 인프라를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 인스턴스 보관소
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **의존성 해결**: `Arc<T>` 필드 자동 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 (팔로우 관계 에러 포함)
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use singleton_macro::service;
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! #[service(name = "follow")]
//! pub struct FollowService {
//!     user_repo: Arc<UserRepository>,  // 자동 주입
//! }
//!
//! let follow_service = FollowService::instance();
//! ```
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis_client);
//! ServiceLocator::initialize_all().await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
