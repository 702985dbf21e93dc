//! # Domain Entities Module
//!
//! MongoDB `users` 컬렉션 문서와 1:1로 매핑되는 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/      ← 이 모듈 (영속 애그리거트)
//! ├── relationship/  ← 팔로우 상태 머신, 페이지네이션, 가시성 규칙
//! ├── models/        ← 인증 컨텍스트 모델
//! └── dto/           ← 요청/응답 객체
//! ```
//!
//! 관계 집합은 사용자 문서 안에 배열로 내장되며, 문서 전체가 `version` 필드로
//! 낙관적 동시성 검사를 받습니다.

pub mod users;
