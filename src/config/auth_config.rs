//! 인증 관련 설정
//!
//! 이 서비스는 토큰을 발급하지 않습니다. 외부 인증 서비스가 발급한 HS256 JWT를
//! 검증하기 위한 공유 비밀키와, 사용자의 가입 경로([`SignupType`])만 다룹니다.

use std::env;

/// JWT 검증 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 서명 검증용 공유 비밀키 (`JWT_SECRET`)
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 만료 시간 검증 허용 오차 (초, `JWT_LEEWAY_SECONDS`, 기본 60)
    pub fn leeway_seconds() -> u64 {
        env::var("JWT_LEEWAY_SECONDS")
            .ok()
            .and_then(|leeway| leeway.parse().ok())
            .unwrap_or(60)
    }
}

/// 사용자 가입 경로
///
/// 로컬 가입 사용자만 비밀번호 해시를 가집니다. 소셜 가입 사용자는
/// 외부 인증 서비스가 계정을 만들고 이 서비스에는 프로필만 존재합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignupType {
    Local,

    Google,

    Facebook,
}
