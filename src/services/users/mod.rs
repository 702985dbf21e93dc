//! 사용자 서비스 모듈
//!
//! 회원가입(bcrypt 해싱, 중복 검사), 프로필 조회/수정, 닉네임 접두사 검색을 담당합니다.
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::instance();
//! let created = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
