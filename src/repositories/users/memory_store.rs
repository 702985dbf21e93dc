//! 테스트용 인메모리 `UserStore`

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use super::UserStore;

/// 하나의 뮤텍스 아래에서 버전 검사와 두 문서 쓰기를 함께 수행합니다.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<ObjectId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자를 저장하고 ID가 채워진 사본을 돌려줍니다.
    pub fn insert(&self, mut user: User) -> User {
        let id = *user.id.get_or_insert_with(ObjectId::new);
        self.users.lock().unwrap().insert(id, user.clone());
        user
    }

    pub fn get(&self, id: &ObjectId) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn load_user(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.get(id))
    }

    async fn commit_pair(&self, first: &User, second: &User) -> Result<(), AppError> {
        let (Some(first_id), Some(second_id)) = (first.id, second.id) else {
            return Err(AppError::InternalError("저장되지 않은 사용자입니다".to_string()));
        };
        if first_id == second_id {
            return Err(AppError::InternalError("같은 사용자를 두 번 커밋할 수 없습니다".to_string()));
        }

        let mut users = self.users.lock().unwrap();

        for user in [first, second] {
            let stored_version = user.id.and_then(|id| users.get(&id)).map(|stored| stored.version);
            if stored_version != Some(user.version) {
                return Err(AppError::VersionConflict(format!(
                    "사용자 {}의 버전이 변경되었습니다",
                    user.id_string().unwrap_or_default()
                )));
            }
        }

        for (id, user) in [(first_id, first), (second_id, second)] {
            let mut next = user.clone();
            next.version += 1;
            users.insert(id, next);
        }

        Ok(())
    }
}
