//! 팔로우 관계 핸들러
//!
//! 요청자는 항상 토큰의 주체입니다. `/users/{user_id}/...`는 대상 사용자에 대한
//! 연산이고, `/me/...`는 본인의 관계 목록과 개수입니다.

use actix_web::{web, HttpResponse, get, post, delete};
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::auth::{AuthenticatedUser, OptionalUser};
use crate::domain::dto::follows::PageQuery;
use crate::domain::relationship::RelationKind;
use crate::handlers::parse_user_id;
use crate::services::follows::FollowService;

/// 팔로우 요청. 공개 계정은 즉시 확정, 비공개 계정은 승인 대기
#[post("/{user_id}/follow")]
pub async fn follow(
    user: AuthenticatedUser,
    target_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let target_id = parse_user_id(&target_id)?;

    let service = FollowService::instance();
    let response = service.request_follow(&user.object_id()?, &target_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{user_id}/unfollow")]
pub async fn unfollow(
    user: AuthenticatedUser,
    target_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let target_id = parse_user_id(&target_id)?;

    let service = FollowService::instance();
    service.unfollow(&user.object_id()?, &target_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// `user_id`가 보낸 팔로우 요청을 승인
#[post("/{user_id}/approve")]
pub async fn approve(
    user: AuthenticatedUser,
    requester_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let requester_id = parse_user_id(&requester_id)?;

    let service = FollowService::instance();
    service.approve(&user.object_id()?, &requester_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[post("/{user_id}/refuse")]
pub async fn refuse(
    user: AuthenticatedUser,
    requester_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let requester_id = parse_user_id(&requester_id)?;

    let service = FollowService::instance();
    service.refuse(&user.object_id()?, &requester_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[get("/{user_id}/isFollowing")]
pub async fn is_following(
    user: AuthenticatedUser,
    target_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let target_id = parse_user_id(&target_id)?;

    let service = FollowService::instance();
    let response = service.is_following(&user.object_id()?, &target_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{user_id}/following")]
pub async fn following(
    user: AuthenticatedUser,
    owner_id: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    list(&user, parse_user_id(&owner_id)?, RelationKind::Following, &query).await
}

#[get("/{user_id}/follower")]
pub async fn follower(
    user: AuthenticatedUser,
    owner_id: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    list(&user, parse_user_id(&owner_id)?, RelationKind::Follower, &query).await
}

/// 승인 대기 목록 (본인만)
#[get("/{user_id}/waiting")]
pub async fn waiting(
    user: AuthenticatedUser,
    owner_id: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    list(&user, parse_user_id(&owner_id)?, RelationKind::Waiting, &query).await
}

/// 관계 개수. 승인 대기 개수는 본인 요청일 때만 포함
#[get("/{user_id}/counts")]
pub async fn counts(
    user: OptionalUser,
    owner_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let owner_id = parse_user_id(&owner_id)?;
    let viewer_id = user.0.as_ref().map(AuthenticatedUser::object_id).transpose()?;

    let service = FollowService::instance();
    let response = service.counts(viewer_id.as_ref(), &owner_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/following")]
pub async fn my_following(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    list(&user, user.object_id()?, RelationKind::Following, &query).await
}

#[get("/follower")]
pub async fn my_follower(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    list(&user, user.object_id()?, RelationKind::Follower, &query).await
}

#[get("/waiting")]
pub async fn my_waiting(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    list(&user, user.object_id()?, RelationKind::Waiting, &query).await
}

#[get("/counts")]
pub async fn my_counts(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let me = user.object_id()?;

    let service = FollowService::instance();
    let response = service.counts(Some(&me), &me).await?;

    Ok(HttpResponse::Ok().json(response))
}

async fn list(
    user: &AuthenticatedUser,
    owner_id: ObjectId,
    kind: RelationKind,
    query: &PageQuery,
) -> Result<HttpResponse, AppError> {
    let viewer_id = user.object_id()?;
    let window = query.to_window()?;

    let service = FollowService::instance();
    let page = service.list(&viewer_id, &owner_id, kind, window).await?;

    Ok(HttpResponse::Ok().json(page))
}
