//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 요청자 신원을 확인하는 인증 미들웨어를 제공합니다.
//!
//! - Bearer 토큰 추출 및 HS256 검증
//! - 검증된 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/v1/me")
//!             .wrap(AuthMiddleware::required())
//!             .route("", web::get().to(get_me))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::{AuthMiddleware};
