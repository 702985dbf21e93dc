//! 팔로우 관계 DTO
//!
//! - [`page_query`] - `offset`(페이지 번호) / `number`(페이지 크기) 쿼리
//! - [`relation_response`] - 관계 목록 페이지, 관계 상태, 개수 응답

pub mod page_query;
pub mod relation_response;

pub use page_query::PageQuery;
pub use relation_response::*;
