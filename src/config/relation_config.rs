//! 팔로우 관계 및 프로필 관련 설정

use std::env;

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// 관계 목록 페이지네이션 설정
pub struct PageConfig;

impl PageConfig {
    /// `number` 파라미터 생략 시 페이지 크기 (`PAGE_DEFAULT_SIZE`, 기본 30)
    pub fn default_size() -> i64 {
        env_i64("PAGE_DEFAULT_SIZE", 30).clamp(1, Self::max_size())
    }

    /// 허용되는 최대 페이지 크기 (`PAGE_MAX_SIZE`, 기본 100)
    pub fn max_size() -> i64 {
        env_i64("PAGE_MAX_SIZE", 100).max(1)
    }
}

/// 관계 전이 커밋 설정
pub struct RelationConfig;

impl RelationConfig {
    /// 버전 충돌 시 전이를 다시 시도하는 횟수 (`RELATION_COMMIT_RETRIES`, 기본 3)
    pub fn commit_retries() -> u32 {
        env_i64("RELATION_COMMIT_RETRIES", 3).clamp(0, 20) as u32
    }
}

/// 프로필 설정
pub struct ProfileConfig;

impl ProfileConfig {
    /// 가입 직후 사용하는 기본 프로필 사진 URL (`DEFAULT_PROFILE_PHOTO_URL`)
    pub fn default_photo_url() -> String {
        env::var("DEFAULT_PROFILE_PHOTO_URL")
            .unwrap_or_else(|_| "https://static.example.com/profile/default.png".to_string())
    }
}
