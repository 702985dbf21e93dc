//! JWT 토큰 검증 서비스 구현
//!
//! 요청 헤더의 Bearer 토큰을 검증하고 클레임을 추출합니다.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use singleton_macro::service;
use crate::config::JwtConfig;
use crate::domain::token::TokenClaims;
use crate::errors::errors::AppError;

/// JWT 토큰 검증 서비스
///
/// HMAC-SHA256 서명과 만료 시간을 검증합니다.
#[service(name="token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let claims = token_service.verify_token(token)?;
    /// println!("User ID: {}", claims.sub);
    /// ```
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        verify_with_secret(token, &JwtConfig::secret(), JwtConfig::leeway_seconds())
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식 또는 빈 토큰
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        bearer_token(auth_header)
    }
}

fn bearer_token(auth_header: &str) -> Result<&str, AppError> {
    match auth_header.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
    }
}

fn verify_with_secret(token: &str, secret: &str, leeway: u64) -> Result<TokenClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(secret.as_ref());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = leeway;

    decode::<TokenClaims>(token, &decoding_key, &validation)
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            },
            _ => {
                log::debug!("토큰 검증 실패: {}", e);
                AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
            }
        })
}
