//! 소셜 서비스 백엔드
//!
//! 가입, 프로필, 팔로우 관계를 제공하는 Rust 기반 소셜 그래프 서비스입니다.
//! 공개 계정은 팔로우 요청이 즉시 확정되고, 비공개 계정은 승인 대기를 거칩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 로컬 계정 생성, 프로필 수정, 닉네임 접두사 검색
//! - **팔로우 관계**: 요청, 승인, 거절, 언팔로우와 관계 상태 조회
//! - **관계 목록**: 팔로잉/팔로워/승인 대기 목록 페이지 조회와 공개 범위 검사
//! - **동시성**: 문서 `version` 기반 낙관적 동시성과 MongoDB 트랜잭션
//! - **JWT 인증**: 외부에서 발급된 HS256 토큰 검증
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 관계 전이 조정, 재시도
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Relationship   │ ← 순수 상태 전이, 공개 범위, 페이지
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 버전 검사 커밋, 캐시
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_service_backend::services::follows::FollowService;
//!
//! let follow_service = FollowService::instance();
//!
//! // 공개 계정이면 Followed, 비공개 계정이면 Requested
//! let response = follow_service.request_follow(&me, &target).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
