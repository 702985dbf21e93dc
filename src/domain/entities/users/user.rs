//! User Entity Implementation
//!
//! 사용자 애그리거트입니다. 프로필 정보와 함께 세 개의 관계 집합
//! (`following`, `follower`, `waiting_follower`)을 직접 소유하며,
//! 관계 전이는 항상 두 사용자 애그리거트를 한 단위로 저장합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::SignupType;

/// 관계 집합의 한 원소
///
/// 상대 사용자의 ID와 화면 표시용 비정규화 정보를 담습니다.
/// 소유 관계가 아닌 역참조이며, 생성 이후 변경되지 않고 삭제만 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    /// 상대 사용자 ID
    pub user_id: ObjectId,
    /// 생성 시점의 상대 닉네임
    pub nickname: String,
    /// 생성 시점의 상대 프로필 사진
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// 관계 생성 시각 (페이지 정렬 기준)
    pub created_at: DateTime,
}

impl RelationEdge {
    /// `counterpart`를 가리키는 간선을 만듭니다.
    pub fn pointing_to(counterpart_id: ObjectId, counterpart: &User, created_at: DateTime) -> Self {
        Self {
            user_id: counterpart_id,
            nickname: counterpart.nickname.clone(),
            profile_photo_url: counterpart.profile_photo_url.clone(),
            created_at,
        }
    }

    /// 안정적인 페이지 순서를 위한 정렬 키 (생성 시각, 상대 ID)
    pub fn order_key(&self) -> (DateTime, ObjectId) {
        (self.created_at, self.user_id)
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 가입 경로
    pub signup_type: SignupType,
    /// 닉네임 (unique, 검색 대상)
    pub nickname: String,
    /// 실명 또는 표시 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 자기소개
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// 웹사이트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// 프로필 사진 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// 공개 계정 여부. 비공개 계정은 팔로우 요청을 승인해야 합니다.
    #[serde(default = "default_public")]
    pub public: bool,
    /// 해시된 비밀번호 (소셜 가입 사용자는 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 사용자 역할
    #[serde(default)]
    pub roles: Vec<String>,
    /// 내가 팔로우하는 사용자 (확정)
    #[serde(default)]
    pub following: Vec<RelationEdge>,
    /// 나를 팔로우하는 사용자 (확정)
    #[serde(default)]
    pub follower: Vec<RelationEdge>,
    /// 승인 대기 중인 팔로우 요청자
    #[serde(default)]
    pub waiting_follower: Vec<RelationEdge>,
    /// 낙관적 동시성 제어용 버전. 모든 쓰기마다 1씩 증가합니다.
    #[serde(default)]
    pub version: i64,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

fn default_public() -> bool {
    true
}

impl User {
    /// 새 로컬 가입 사용자 (이메일/비밀번호)
    pub fn new_local(
        email: String,
        nickname: String,
        password_hash: String,
        public: bool,
        profile_photo_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            signup_type: SignupType::Local,
            nickname,
            name: None,
            bio: None,
            website: None,
            profile_photo_url,
            public,
            password_hash: Some(password_hash),
            roles: vec!["user".to_string()],
            following: Vec::new(),
            follower: Vec::new(),
            waiting_follower: Vec::new(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 확정 팔로워 수
    pub fn follower_count(&self) -> usize {
        self.follower.len()
    }

    /// 확정 팔로잉 수
    pub fn following_count(&self) -> usize {
        self.following.len()
    }

    /// 승인 대기 요청 수
    pub fn pending_count(&self) -> usize {
        self.waiting_follower.len()
    }

    pub fn follows(&self, user_id: &ObjectId) -> bool {
        self.following.iter().any(|edge| &edge.user_id == user_id)
    }

    pub fn is_followed_by(&self, user_id: &ObjectId) -> bool {
        self.follower.iter().any(|edge| &edge.user_id == user_id)
    }

    pub fn has_pending_request_from(&self, user_id: &ObjectId) -> bool {
        self.waiting_follower.iter().any(|edge| &edge.user_id == user_id)
    }
}
