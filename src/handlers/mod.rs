//! HTTP 요청 핸들러 모듈
//!
//! 각 핸들러는 경로/쿼리/본문을 추출하고 싱글톤 서비스(`XxxService::instance()`)에
//! 위임한 뒤, `Result<HttpResponse, AppError>`로 응답합니다. 에러는
//! `AppError`의 `ResponseError` 구현이 `{"error": "..."}` JSON으로 변환합니다.
//!
//! - [`users`] - 가입, 검색, 프로필
//! - [`follows`] - 팔로우 관계 전이, 관계 목록, 개수

pub mod users;
pub mod follows;

use actix_web::web;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

/// 쿼리 문자열 추출 실패도 `{"error": ...}` JSON 400으로 응답합니다.
///
/// `offset`/`number`는 문자열로 받으므로 여기까지 오지 않고 `InvalidPagination`이 됩니다.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)).into()
    })
}

/// 요청 본문 JSON 추출 실패를 `ValidationError`로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
    })
}

/// 경로의 사용자 ID(24자리 hex)를 파싱합니다.
pub(crate) fn parse_user_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 사용자 ID 형식입니다: {}", raw)))
}
