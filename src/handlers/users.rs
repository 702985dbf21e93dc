//! 사용자 핸들러
//!
//! `/api/v1/users` 스코프(선택 인증)와 `/api/v1/me` 스코프(필수 인증)의
//! 가입, 검색, 프로필 엔드포인트입니다.

use actix_web::{web, HttpResponse, get, post, put};
use serde_json::json;
use crate::core::errors::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::users::request::{CreateUserRequest, NicknameQuery, ProfilePhotoRequest, SearchUserQuery, UpdateProfileRequest};
use crate::handlers::parse_user_id;
use crate::services::users::UserService;

/// 회원가입 (201)
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 닉네임 접두사 검색
#[get("/search")]
pub async fn search_users(
    query: web::Query<SearchUserQuery>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let page = service.search(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 닉네임으로 프로필 조회
#[get("/profile")]
pub async fn get_user_by_nickname(
    query: web::Query<NicknameQuery>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_profile_by_nickname(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::instance();
    let user = service.get_profile(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[get("/{user_id}/profilePhoto")]
pub async fn get_profile_photo(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::instance();
    let photo = service.get_profile_photo(&user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "profile_photo_url": photo })))
}

#[get("")]
pub async fn get_me(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let me = service.get_me(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(me))
}

#[put("/profile")]
pub async fn update_my_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let me = service.update_profile(&user.object_id()?, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(me))
}

#[put("/profilePhoto")]
pub async fn update_my_profile_photo(
    user: AuthenticatedUser,
    payload: web::Json<ProfilePhotoRequest>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let me = service.update_profile_photo(&user.object_id()?, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(me))
}
