//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 정적 함수로 제공합니다. 각 설정 구조체는
//! 상태를 갖지 않으며 호출 시점의 환경 변수를 읽고, 없으면 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 해싱, 서버 바인딩
//! - [`auth_config`] - JWT 검증 비밀키, 가입 경로
//! - [`relation_config`] - 페이지 크기, 관계 전이 재시도, 기본 프로필 사진
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{PageConfig, RelationConfig, ServerConfig};
//!
//! let bind = ServerConfig::bind_address();
//! let page_size = PageConfig::default_size();
//! let retries = RelationConfig::commit_retries();
//! ```
//!
//! 환경 변수는 `main`에서 `PROFILE`에 맞는 `.env.{profile}` 파일로 로드됩니다.

pub mod data_config;
pub mod auth_config;
pub mod relation_config;

pub use data_config::*;
pub use auth_config::*;
pub use relation_config::*;
