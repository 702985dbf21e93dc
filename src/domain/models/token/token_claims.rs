//! JWT 클레임
//!
//! 토큰은 외부 인증 서비스가 발급합니다. 이 서비스는 서명과 만료만 검증하고
//! `sub`를 요청자 사용자 ID로 사용합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ObjectId의 hex 문자열)
/// - `roles`: 사용자 권한 목록 (없으면 빈 목록)
/// - `iat`, `exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}
