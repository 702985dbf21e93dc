//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 팔로우 관계 엔진의 비즈니스 에러(`UserNotFound`, `AlreadyRelated` 등)는
//! 모두 요청 단위로 복구 가능한 에러이며, 엔진 내부에서 재시도하지 않습니다.
//! `VersionConflict`만 저장소 계층의 재시도 신호로 사용됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! fn ensure_not_self(requester: &str, target: &str) -> Result<(), AppError> {
//!     if requester == target {
//!         return Err(AppError::AlreadyRelated("자기 자신은 팔로우할 수 없습니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 참조한 사용자가 존재하지 않음 (404 Not Found)
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// 이미 팔로우 중이거나 요청 대기 중, 또는 자기 자신 팔로우 (409 Conflict)
    #[error("Already related: {0}")]
    AlreadyRelated(String),

    /// 승인/거절할 대기 요청이 없음 (404 Not Found)
    #[error("No pending request: {0}")]
    NoPendingRequest(String),

    /// 언팔로우할 확정 관계가 없음 (404 Not Found)
    #[error("Not following: {0}")]
    NotFollowing(String),

    /// 비공개 계정의 관계 목록 접근 거부 (403 Forbidden)
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// 잘못된 페이지네이션 파라미터 (400 Bad Request)
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    /// 낙관적 동시성 검사 실패 (409 Conflict, 재시도 소진 시에만 노출)
    #[error("Version conflict: {0}")]
    VersionConflict(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::InvalidPagination(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound(_)
            | AppError::NoPendingRequest(_)
            | AppError::NotFollowing(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_)
            | AppError::AlreadyRelated(_)
            | AppError::VersionConflict(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) | AppError::AccessDenied(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_user_not_found_response() {
        let error = AppError::UserNotFound("507f1f77bcf86cd799439011".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_relation_errors_status_codes() {
        assert_eq!(AppError::AlreadyRelated("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::NoPendingRequest("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFollowing("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AccessDenied("x".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::InvalidPagination("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::VersionConflict("x".into()).status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
