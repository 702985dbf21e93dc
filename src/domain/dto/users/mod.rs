//! 사용자 DTO
//!
//! - [`request`] - 가입, 프로필 수정, 닉네임 검색
//! - [`response`] - 프로필 응답, 관계 목록 원소

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
