//! 페이지 쿼리 DTO

use serde::Deserialize;
use crate::config::PageConfig;
use crate::domain::relationship::PageWindow;
use crate::errors::errors::AppError;
use crate::utils::string_utils::deserialize_optional_string;

/// 목록 조회 쿼리
///
/// `offset`은 0부터 시작하는 페이지 번호, `number`는 페이지 크기입니다.
/// 페이지 크기는 `PAGE_MAX_SIZE`를 넘지 않도록 잘립니다.
///
/// 값은 문자열로 받아 [`PageQuery::to_window`]에서 해석합니다. 숫자가 아닌 값도
/// 추출 단계를 통과해 `InvalidPagination`으로 보고됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub number: Option<String>,
}

impl PageQuery {
    /// 항목 단위 창으로 변환합니다.
    pub fn to_window(&self) -> Result<PageWindow, AppError> {
        let page = parse_param("offset", self.offset.as_deref())?.unwrap_or(0);
        let size = parse_param("number", self.number.as_deref())?
            .unwrap_or_else(PageConfig::default_size);

        PageWindow::from_page_index(page, size.min(PageConfig::max_size()))
    }
}

fn parse_param(name: &str, raw: Option<&str>) -> Result<Option<i64>, AppError> {
    raw.map(|value| {
        value.parse::<i64>().map_err(|_| {
            AppError::InvalidPagination(format!("{}은(는) 정수여야 합니다: {}", name, value))
        })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    fn query(offset: Option<&str>, number: Option<&str>) -> PageQuery {
        PageQuery {
            offset: offset.map(str::to_string),
            number: number.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let window = PageQuery::default().to_window().unwrap();

        assert_eq!(window.offset, 0);
        assert_eq!(window.limit, PageConfig::default_size());
    }

    #[test]
    fn test_page_index_times_size() {
        let window = query(Some("3"), Some("20")).to_window().unwrap();

        assert_eq!(window, PageWindow::new(60, 20).unwrap());
    }

    #[test]
    fn test_size_is_capped() {
        let max = i64::MAX.to_string();
        let window = query(Some("0"), Some(&max)).to_window().unwrap();

        assert_eq!(window.limit, PageConfig::max_size());
    }

    #[test]
    fn test_negative_values_are_invalid_pagination() {
        assert!(matches!(query(Some("-1"), None).to_window(), Err(AppError::InvalidPagination(_))));
        assert!(matches!(query(None, Some("-5")).to_window(), Err(AppError::InvalidPagination(_))));
    }

    #[test]
    fn test_non_numeric_values_reach_invalid_pagination() {
        let parsed = Query::<PageQuery>::from_query("offset=abc&number=10").unwrap().into_inner();

        assert!(matches!(parsed.to_window(), Err(AppError::InvalidPagination(_))));

        let parsed = Query::<PageQuery>::from_query("offset=1&number=1.5").unwrap().into_inner();

        assert!(matches!(parsed.to_window(), Err(AppError::InvalidPagination(_))));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let parsed = Query::<PageQuery>::from_query("offset=&number=").unwrap().into_inner();

        assert_eq!(parsed.to_window().unwrap(), PageWindow::new(0, PageConfig::default_size()).unwrap());
    }
}
