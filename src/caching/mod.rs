//! 캐싱 계층 모듈
//!
//! 사용자 조회 결과를 Redis에 JSON으로 캐싱합니다. 캐시는 읽기 전용 경로에서만
//! 사용되며, 관계 전이는 항상 MongoDB에서 최신 문서를 읽습니다.
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("user:64f...", &user, 600).await?;
//! let cached: Option<User> = cache.get("user:64f...").await?;
//! ```
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
