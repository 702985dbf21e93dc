//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조체입니다. 엔티티를 그대로 노출하지 않고,
//! 비밀번호 해시나 관계 집합 원본 같은 내부 필드는 응답에서 제외합니다.
//!
//! ```text
//! dto/
//! ├── users/              # 가입, 프로필, 검색
//! │   ├── request/
//! │   └── response/
//! └── follows/            # 관계 목록 페이지, 관계 상태, 개수
//! ```
//!
//! 요청 DTO는 `validator`로 형식을 검증하고, 실패는 `AppError::ValidationError`
//! (페이지 파라미터는 `AppError::InvalidPagination`)로 변환됩니다.

pub mod users;
pub mod follows;

pub use users::*;
pub use follows::*;
