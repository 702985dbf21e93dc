//! # 사용자 리포지토리 구현
//!
//! MongoDB를 주 저장소로, Redis를 조회 캐시로 사용합니다.
//!
//! - 가입 중복 검사용 `find_by_email`만 캐시를 먼저 확인합니다. 이메일은 바뀌지 않고
//!   존재 여부만 쓰이므로 캐시된 문서가 오래되어도 결과가 달라지지 않습니다.
//! - 프로필과 관계 개수는 `load_user`로 항상 최신 문서를 읽습니다. 조회 캐시를 두면
//!   커밋 직전에 읽은 문서가 무효화 뒤에 다시 캐시될 수 있습니다.
//! - 모든 쓰기는 `version`을 1 증가시키고 이메일 캐시를 무효화합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure, TRANSIENT_TRANSACTION_ERROR, UNKNOWN_TRANSACTION_COMMIT_RESULT},
    options::{IndexOptions, ReturnDocument},
    ClientSession, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    config::StoreConfig,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
    domain::relationship::{Page, PageWindow},
    repositories::users::UserStore,
    utils::string_utils::escape_regex,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 커밋 결과를 알 수 없을 때 commit을 다시 시도하는 횟수
const COMMIT_RESULT_RETRIES: usize = 3;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일로 사용자를 조회합니다 (캐시 우선).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = email_cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(db_error)?;

        if let Some(ref user) = user {
            self.cache_user(&cache_key, user).await;
        }

        Ok(user)
    }

    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "nickname": nickname })
            .await
            .map_err(db_error)
    }

    /// 닉네임 접두사로 검색합니다 (대소문자 구분, 닉네임 순).
    ///
    /// 관계 집합은 결과에 필요 없으므로 projection으로 제외합니다.
    pub async fn search_by_nickname_prefix(&self, prefix: &str, window: PageWindow) -> Result<Page<User>, AppError> {
        let filter = doc! { "nickname": { "$regex": format!("^{}", escape_regex(prefix)) } };
        let collection = self.collection::<User>();

        let total_count = collection
            .count_documents(filter.clone())
            .await
            .map_err(db_error)?;

        if window.limit == 0 || window.offset as u64 >= total_count {
            return Ok(Page::empty(total_count));
        }

        let items: Vec<User> = collection
            .find(filter)
            .projection(doc! { "following": 0, "follower": 0, "waiting_follower": 0 })
            .sort(doc! { "nickname": 1, "_id": 1 })
            .skip(window.offset as u64)
            .limit(window.limit)
            .await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)?;

        Ok(Page { items, total_count })
    }

    /// 새 사용자를 저장합니다. 이메일/닉네임 중복은 `ConflictError`입니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        if self.find_by_nickname(&user.nickname).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 닉네임입니다".to_string()));
        }

        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| conflict_or_db_error(e, "이미 사용 중인 이메일 또는 닉네임입니다"))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("생성된 사용자 ID를 확인할 수 없습니다".to_string())
        })?;
        user.id = Some(id);

        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    /// 프로필 필드를 `$set`으로 부분 수정하고 `version`을 올립니다.
    ///
    /// 관계 집합은 건드리지 않으므로 진행 중인 관계 전이와는 버전 검사로 직렬화됩니다.
    pub async fn update_profile(&self, id: &ObjectId, mut set_doc: Document) -> Result<Option<User>, AppError> {
        set_doc.insert("updated_at", mongodb::bson::DateTime::now());

        let updated_user = self.collection::<User>()
            .find_one_and_update(
                doc! { "_id": *id },
                doc! { "$set": set_doc, "$inc": { "version": 1 } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| conflict_or_db_error(e, "이미 사용 중인 닉네임입니다"))?;

        if let Some(ref user) = updated_user {
            self.invalidate_user_caches(user).await;
        }

        Ok(updated_user)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 유니크 + 접두사 검색 정렬
        let nickname_index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("nickname_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, nickname_index, created_at_index])
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn cache_user(&self, cache_key: &str, user: &User) {
        if let Err(e) = self.redis
            .set_with_expiry(cache_key, user, StoreConfig::user_cache_ttl_seconds())
            .await
        {
            debug!("사용자 캐시 저장 실패 ({}): {}", cache_key, e);
        }
    }

    async fn invalidate_user_caches(&self, user: &User) {
        if let Err(e) = self.redis.del(&email_cache_key(&user.email)).await {
            warn!("이메일 캐시 무효화 실패 ({}): {}", user.email, e);
        }
    }

    /// 트랜잭션 안에서 버전 검사 후 두 문서를 교체합니다.
    async fn replace_pair(&self, session: &mut ClientSession, first: &User, second: &User) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        for user in [first, second] {
            let id = user.id.ok_or_else(|| {
                AppError::InternalError("저장되지 않은 사용자는 커밋할 수 없습니다".to_string())
            })?;

            let mut next = user.clone();
            next.version = user.version + 1;

            let result = collection
                .replace_one(version_filter(&id, user.version), &next)
                .session(&mut *session)
                .await
                .map_err(transaction_error)?;

            if result.matched_count == 0 {
                return Err(AppError::VersionConflict(format!(
                    "사용자 {}의 버전이 변경되었습니다",
                    id
                )));
            }
        }

        Ok(())
    }

    async fn commit_with_retry(&self, session: &mut ClientSession) -> Result<(), AppError> {
        let mut attempt = 0;
        loop {
            match session.commit_transaction().await {
                Ok(()) => return Ok(()),
                Err(e) if e.contains_label(UNKNOWN_TRANSACTION_COMMIT_RESULT) && attempt < COMMIT_RESULT_RETRIES => {
                    attempt += 1;
                    warn!("⚠️ 커밋 결과 불명, 재시도 {}/{}: {}", attempt, COMMIT_RESULT_RETRIES, e);
                }
                Err(e) => return Err(transaction_error(e)),
            }
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn load_user(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(db_error)
    }

    async fn commit_pair(&self, first: &User, second: &User) -> Result<(), AppError> {
        let mut session = self.db.start_session().await?;
        session.start_transaction().await.map_err(transaction_error)?;

        if let Err(e) = self.replace_pair(&mut session, first, second).await {
            if let Err(abort_error) = session.abort_transaction().await {
                debug!("트랜잭션 중단 실패: {}", abort_error);
            }
            return Err(e);
        }

        self.commit_with_retry(&mut session).await?;

        self.invalidate_user_caches(first).await;
        self.invalidate_user_caches(second).await;

        Ok(())
    }
}

fn email_cache_key(email: &str) -> String {
    format!("user:email:{}", email)
}

/// `version` 필드가 없는 기존 문서는 버전 0으로 취급합니다.
fn version_filter(id: &ObjectId, version: i64) -> Document {
    if version == 0 {
        doc! {
            "_id": *id,
            "$or": [ { "version": 0_i64 }, { "version": { "$exists": false } } ],
        }
    } else {
        doc! { "_id": *id, "version": version }
    }
}

fn db_error(e: MongoError) -> AppError {
    AppError::DatabaseError(e.to_string())
}

/// 일시적 트랜잭션 에러(쓰기 충돌 포함)는 재시도 가능한 버전 충돌로 봅니다.
fn transaction_error(e: MongoError) -> AppError {
    if e.contains_label(TRANSIENT_TRANSACTION_ERROR) {
        AppError::VersionConflict(format!("동시 수정 충돌: {}", e))
    } else {
        db_error(e)
    }
}

fn conflict_or_db_error(e: MongoError, message: &str) -> AppError {
    if is_duplicate_key(&e) {
        AppError::ConflictError(message.to_string())
    } else {
        db_error(e)
    }
}

fn is_duplicate_key(e: &MongoError) -> bool {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_filter_accepts_legacy_documents_at_zero() {
        let id = ObjectId::new();

        let filter = version_filter(&id, 0);
        assert!(filter.contains_key("$or"));

        let filter = version_filter(&id, 4);
        assert_eq!(filter.get_i64("version").unwrap(), 4);
        assert_eq!(filter.get_object_id("_id").unwrap(), id);
    }

    #[test]
    fn test_email_cache_key() {
        assert_eq!(email_cache_key("a@b.co"), "user:email:a@b.co");
    }
}
