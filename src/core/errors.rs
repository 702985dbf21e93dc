//! # 통합 에러 처리
//!
//! 핵심 프레임워크에서 사용하는 에러 타입을 재노출합니다.
//! 정의는 [`crate::errors::errors`]에 있으며, 서비스와 미들웨어는
//! 어느 경로로 가져와도 동일한 `AppError` 타입을 사용합니다.

pub use crate::errors::errors::{AppError, AppResult, ErrorContext};
