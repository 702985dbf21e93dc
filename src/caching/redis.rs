//! # Redis 캐시 클라이언트 구현
//!
//! 멀티플렉싱 연결 하나로 동시 요청을 처리하며, 값은 serde_json으로
//! 직렬화하여 문자열로 저장합니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use log::info;
use crate::config::StoreConfig;

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("user:email:a@b.co", &user, 600).await?;
/// let cached: Option<User> = redis.get("user:email:a@b.co").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 PING으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(StoreConfig::redis_url())?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// JSON으로 저장된 값을 조회합니다. 역직렬화 실패는 `TypeError`입니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json).map_err(type_error("Deserialization failed")))
            .transpose()
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(type_error("Serialization failed"))?;
        conn.set(key, json).await
    }

    /// TTL(초)과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(type_error("Serialization failed"))?;
        conn.set_ex(key, json, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    /// 패턴에 맞는 키 목록. 컬렉션 단위 캐시 무효화에 사용됩니다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}

impl Default for RedisClient {
    /// 연결 확인 없이 클라이언트만 만듭니다. 서버 구동 시에는 `RedisClient::new`를 사용합니다.
    fn default() -> Self {
        let client = Client::open(StoreConfig::redis_url())
            .expect("Failed to create Redis client with default configuration");

        Self { client }
    }
}

fn type_error(context: &'static str) -> impl Fn(serde_json::Error) -> redis::RedisError {
    move |e| redis::RedisError::from((redis::ErrorKind::TypeError, context, e.to_string()))
}
