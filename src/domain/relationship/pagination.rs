//! 관계 목록 페이지네이션
//!
//! 관계 집합은 순서가 없는 집합이므로, 페이지를 자르기 전에 항상
//! `(created_at, user_id)` 순으로 정렬합니다. 같은 집합에 대해 같은 창을
//! 요청하면 언제나 같은 원소가 반환됩니다.

use serde::Serialize;
use crate::domain::entities::users::user::RelationEdge;
use crate::errors::errors::AppError;

/// 잘라낸 페이지와 전체 개수
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn empty(total_count: u64) -> Self {
        Self { items: Vec::new(), total_count }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}

/// 항목 단위 페이지 창 (건너뛸 개수, 최대 개수)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn new(offset: i64, limit: i64) -> Result<Self, AppError> {
        if offset < 0 || limit < 0 {
            return Err(AppError::InvalidPagination(format!(
                "offset과 limit은 0 이상이어야 합니다 (offset={}, limit={})",
                offset, limit
            )));
        }

        Ok(Self { offset, limit })
    }

    /// API의 페이지 번호/페이지 크기를 항목 단위 창으로 변환합니다.
    pub fn from_page_index(page: i64, size: i64) -> Result<Self, AppError> {
        if page < 0 || size < 0 {
            return Err(AppError::InvalidPagination(format!(
                "페이지 번호와 크기는 0 이상이어야 합니다 (offset={}, number={})",
                page, size
            )));
        }

        let offset = page
            .checked_mul(size)
            .ok_or_else(|| AppError::InvalidPagination("페이지 번호가 너무 큽니다".to_string()))?;

        Self::new(offset, size)
    }
}

/// 이미 정렬된 슬라이스에서 창에 해당하는 부분을 잘라냅니다.
///
/// `offset`이 전체 개수 이상이면 빈 페이지와 올바른 전체 개수를 반환합니다.
pub fn paginate<T: Clone>(items: &[T], window: PageWindow) -> Page<T> {
    let total = items.len();
    let start = usize::try_from(window.offset).unwrap_or(usize::MAX).min(total);
    let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);
    let end = start.saturating_add(limit).min(total);

    Page {
        items: items[start..end].to_vec(),
        total_count: total as u64,
    }
}

/// 관계 간선을 안정적인 순서로 정렬한 뒤 페이지를 자릅니다.
pub fn paginate_edges(edges: &[RelationEdge], window: PageWindow) -> Page<RelationEdge> {
    let mut ordered: Vec<&RelationEdge> = edges.iter().collect();
    ordered.sort_by_key(|edge| edge.order_key());

    paginate(&ordered, window).map(RelationEdge::clone)
}
