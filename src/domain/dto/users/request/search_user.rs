//! 닉네임 검색 쿼리 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::dto::follows::PageQuery;
use crate::utils::string_utils::deserialize_optional_string;

/// `GET /users/search?nickname_prefix=&offset=&number=`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchUserQuery {
    /// 대소문자를 구분하는 닉네임 접두사
    #[validate(length(min = 1, max = 30, message = "검색어는 1-30자 사이여야 합니다"))]
    pub nickname_prefix: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub number: Option<String>,
}

/// `GET /users/profile?nickname=`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NicknameQuery {
    #[validate(length(min = 3, max = 30, message = "닉네임은 3-30자 사이여야 합니다"))]
    pub nickname: String,
}

impl SearchUserQuery {
    pub fn page(&self) -> PageQuery {
        PageQuery {
            offset: self.offset.clone(),
            number: self.number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    fn parse(raw: &str) -> SearchUserQuery {
        Query::<SearchUserQuery>::from_query(raw).unwrap().into_inner()
    }

    #[test]
    fn test_query_with_page() {
        let query = parse("nickname_prefix=waf&offset=1&number=10");

        assert_eq!(query.nickname_prefix, "waf");
        assert_eq!(query.page().offset.as_deref(), Some("1"));
        assert_eq!(query.page().number.as_deref(), Some("10"));
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_nickname_query() {
        let query = Query::<NicknameQuery>::from_query("nickname=waffle.kim").unwrap().into_inner();

        assert_eq!(query.nickname, "waffle.kim");
        assert!(query.validate().is_ok());
        assert!(Query::<NicknameQuery>::from_query("").is_err());
    }

    #[test]
    fn test_empty_prefix_is_invalid() {
        let query = parse("nickname_prefix=");
        assert!(query.validate().is_err());
    }
}
