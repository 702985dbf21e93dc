//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로로 싱글톤 관리되는 MongoDB 리포지토리와, 관계 전이가
//! 의존하는 저장소 추상화 [`UserStore`](users::UserStore)를 제공합니다.
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
