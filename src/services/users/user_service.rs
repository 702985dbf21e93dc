//! 사용자 서비스 구현

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::{doc, oid::ObjectId, Document};
use singleton_macro::service;
use validator::Validate;
use crate::{
    config::{PasswordConfig, ProfileConfig},
    domain::{
        entities::users::user::User,
        dto::users::{
            request::{CreateUserRequest, NicknameQuery, ProfilePhotoRequest, SearchUserQuery, UpdateProfileRequest},
            response::{UserResponse, UserSummary},
        },
        dto::follows::RelationPageResponse,
    },
    errors::errors::{AppError, ErrorContext},
    repositories::users::{user_repo::UserRepository, UserStore},
    utils::string_utils::validate_required_string,
};

#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 로컬 회원가입
    ///
    /// 토큰은 발급하지 않습니다. 프로필 사진은 `DEFAULT_PROFILE_PHOTO_URL`로 시작합니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        let start_time = std::time::Instant::now();

        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let user = User::new_local(
            request.email.trim().to_lowercase(),
            request.nickname,
            password_hash,
            request.public.unwrap_or(true),
            Some(ProfileConfig::default_photo_url()),
        );

        let created_user = self.user_repo.create(user).await?;

        log::info!(
            "👤 사용자 생성: {} ({})",
            created_user.nickname,
            created_user.id_string().unwrap_or_default()
        );

        Ok(UserResponse::owner_view(&created_user))
    }

    /// 닉네임으로 찾은 다른 사용자의 프로필
    pub async fn get_profile_by_nickname(&self, query: NicknameQuery) -> Result<UserResponse, AppError> {
        query.validate()?;

        let user = self.user_repo.find_by_nickname(&query.nickname).await?;
        nickname_profile(user, &query.nickname)
    }

    /// 다른 사용자가 보는 프로필 (관계 개수 포함)
    pub async fn get_profile(&self, id: &ObjectId) -> Result<UserResponse, AppError> {
        let user = self.find_user(id).await?;
        Ok(UserResponse::public_view(&user))
    }

    /// 내 프로필
    pub async fn get_me(&self, id: &ObjectId) -> Result<UserResponse, AppError> {
        let user = self.find_user(id).await?;
        Ok(UserResponse::owner_view(&user))
    }

    pub async fn get_profile_photo(&self, id: &ObjectId) -> Result<Option<String>, AppError> {
        let user = self.find_user(id).await?;
        Ok(user.profile_photo_url)
    }

    /// 프로필 부분 수정
    ///
    /// 이미 만들어진 관계 간선의 닉네임/사진은 갱신하지 않습니다.
    pub async fn update_profile(&self, id: &ObjectId, request: UpdateProfileRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        if request.is_empty() {
            return Err(AppError::ValidationError("수정할 항목이 없습니다".to_string()));
        }

        let user = self
            .user_repo
            .update_profile(id, profile_set_doc(&request))
            .await?
            .ok_or_else(|| not_found(id))?;

        log::info!("✏️ 프로필 수정: {}", id);

        Ok(UserResponse::owner_view(&user))
    }

    pub async fn update_profile_photo(&self, id: &ObjectId, request: ProfilePhotoRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        let user = self
            .user_repo
            .update_profile(id, doc! { "profile_photo_url": request.profile_photo_url })
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(UserResponse::owner_view(&user))
    }

    /// 닉네임 접두사 검색 (대소문자 구분, 닉네임 순)
    pub async fn search(&self, query: SearchUserQuery) -> Result<RelationPageResponse, AppError> {
        query.validate()?;
        let prefix = validate_required_string(&query.nickname_prefix, "nickname_prefix")?;
        let window = query.page().to_window()?;

        let page = self
            .user_repo
            .search_by_nickname_prefix(&prefix, window)
            .await?;

        Ok(page.map(|user| UserSummary::from(&user)))
    }

    async fn find_user(&self, id: &ObjectId) -> Result<User, AppError> {
        load_profile(self.user_repo.as_ref(), id).await
    }
}

/// 프로필은 캐시 없이 최신 문서로 만듭니다. 관계 개수와 공개 여부가 커밋 직후에도 맞아야 합니다.
async fn load_profile<S: UserStore + ?Sized>(store: &S, id: &ObjectId) -> Result<User, AppError> {
    store.load_user(id).await?.ok_or_else(|| not_found(id))
}

fn nickname_profile(user: Option<User>, nickname: &str) -> Result<UserResponse, AppError> {
    user.map(|user| UserResponse::public_view(&user))
        .ok_or_else(|| AppError::UserNotFound(format!("사용자를 찾을 수 없습니다: {}", nickname)))
}

fn not_found(id: &ObjectId) -> AppError {
    AppError::UserNotFound(format!("사용자를 찾을 수 없습니다: {}", id))
}

/// 전달된 필드만 담은 `$set` 문서
fn profile_set_doc(request: &UpdateProfileRequest) -> Document {
    let mut set_doc = Document::new();

    if let Some(ref nickname) = request.nickname {
        set_doc.insert("nickname", nickname);
    }
    if let Some(ref name) = request.name {
        set_doc.insert("name", name);
    }
    if let Some(ref bio) = request.bio {
        set_doc.insert("bio", bio);
    }
    if let Some(ref website) = request.website {
        set_doc.insert("website", website);
    }
    if let Some(public) = request.public {
        set_doc.insert("public", public);
    }

    set_doc
}
