//! 인증 서비스 모듈
//!
//! 이 서비스는 토큰을 발급하지 않습니다. 외부 인증 서비스가 HS256으로 서명한
//! JWT를 검증하여 요청자 신원만 확인합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let token = token_service.extract_bearer_token(header)?;
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::*;
