//! # Domain Layer Module
//!
//! 비즈니스 규칙을 담는 도메인 계층입니다. 이 계층의 코드는 저장소나 HTTP를
//! 알지 못하며, 로드된 애그리거트 위에서만 동작합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities      - User 애그리거트, RelationEdge
//! ├── relationship  - 팔로우 상태 머신 / 페이지네이션 / 가시성 게이트
//! ├── models        - 인증 컨텍스트 (AuthenticatedUser, TokenClaims)
//! └── dto           - Request / Response
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod relationship;
pub mod models;
pub mod dto;

pub use entities::*;
pub use models::*;
