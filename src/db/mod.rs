//! Database Connection Management Module
//!
//! MongoDB 연결을 관리합니다. 관계 전이는 두 사용자 문서를 한 트랜잭션으로
//! 커밋하므로, 배포 대상 MongoDB는 레플리카 셋(또는 샤드 클러스터)이어야 합니다.
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="social_service_dev"
//! ```

use mongodb::{Client, ClientSession, options::ClientOptions};
use log::info;
use crate::config::StoreConfig;
use crate::errors::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// `MONGODB_URI`, `DATABASE_NAME`으로 연결하고 ping으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let database_name = StoreConfig::database_name();

        let mut client_options = ClientOptions::parse(StoreConfig::mongodb_uri()).await?;
        client_options.app_name = Some("social_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 다중 문서 트랜잭션용 세션을 시작합니다.
    pub async fn start_session(&self) -> Result<ClientSession, AppError> {
        self.client
            .start_session()
            .await
            .map_err(|e| AppError::DatabaseError(format!("세션 시작 실패: {}", e)))
    }
}
