//! 관계 전이가 의존하는 저장소 추상화

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

/// 사용자 애그리거트 저장소
///
/// 관계 전이는 항상 두 애그리거트를 함께 바꾸므로, 저장소는 두 문서를
/// 하나의 단위로 커밋할 수 있어야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 캐시를 거치지 않고 최신 문서를 읽습니다.
    async fn load_user(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 두 사용자를 원자적으로 저장합니다.
    ///
    /// 각 문서는 읽을 당시의 `version`과 일치할 때만 쓰이고, 저장된 문서의
    /// `version`은 1 증가합니다. 하나라도 일치하지 않으면 아무것도 쓰지 않고
    /// `AppError::VersionConflict`를 반환합니다.
    async fn commit_pair(&self, first: &User, second: &User) -> Result<(), AppError>;
}
