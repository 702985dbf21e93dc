//! 사용자 리포지토리 모듈
//!
//! - [`user_store`] - 관계 전이용 저장소 트레이트 (버전 검사 원자적 쌍 커밋)
//! - [`user_repo`] - MongoDB + Redis 구현
//! - `memory_store` - 테스트용 인메모리 구현

pub mod user_store;
pub mod user_repo;
#[cfg(test)]
pub mod memory_store;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
#[cfg(test)]
pub use memory_store::InMemoryUserStore;
