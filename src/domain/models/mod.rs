//! # Domain Models Module
//!
//! 영속되지 않는 값 객체를 정의합니다.
//!
//! - [`auth`] - 요청 단위로 추출되는 인증 사용자와 인증 모드
//! - [`token`] - 외부에서 발급된 JWT의 클레임

pub mod auth;
pub mod token;
