//! Users Entity Module
//!
//! 사용자 애그리거트([`user::User`])와 관계 간선([`user::RelationEdge`])을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new_local(
//!     "user@example.com".to_string(),
//!     "waffle_kim".to_string(),
//!     hashed_password,
//!     true,
//!     None,
//! );
//! assert_eq!(user.follower_count(), 0);
//! ```

pub mod user;
