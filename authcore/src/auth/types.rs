//! 인증 관련 공통 타입 정의

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 세션 확립 시점에 고정되며, 이후 프로필 형태와 접근 가능 화면을 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Customer,
    Owner,
}

impl UserRole {
    /// 와이어 리터럴("CUSTOMER" / "OWNER")에서 역할 파싱
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CUSTOMER" => Some(UserRole::Customer),
            "OWNER" => Some(UserRole::Owner),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "CUSTOMER",
            UserRole::Owner => "OWNER",
        }
    }
}

impl Default for UserRole {
    /// state 파라미터 복원 실패 시 대체되는 기본 역할
    fn default() -> Self {
        UserRole::Customer
    }
}

/// 클라이언트가 보관하는 세션
///
/// CallbackProcessor의 성공 실행만이 세션을 생성한다.
/// SessionStore에 저장된 값이 유일한 원본이며, 메모리 복사본은 파생물이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub role: UserRole,
    pub is_authenticated: bool,
}

/// 역할별 프로필 (tagged union)
///
/// 역할별 필드 접근은 반드시 `RoleGuard` 또는 `as_customer`/`as_owner`로
/// 좁힌 뒤에만 가능하다. 런타임 필드 탐지는 사용하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum Profile {
    #[serde(rename = "CUSTOMER")]
    Customer(CustomerProfile),
    #[serde(rename = "OWNER")]
    Owner(OwnerProfile),
}

impl Profile {
    pub fn role(&self) -> UserRole {
        match self {
            Profile::Customer(_) => UserRole::Customer,
            Profile::Owner(_) => UserRole::Owner,
        }
    }

    pub fn as_customer(&self) -> Option<&CustomerProfile> {
        match self {
            Profile::Customer(p) => Some(p),
            Profile::Owner(_) => None,
        }
    }

    pub fn as_owner(&self) -> Option<&OwnerProfile> {
        match self {
            Profile::Owner(p) => Some(p),
            Profile::Customer(_) => None,
        }
    }
}

/// 예비 부부 회원 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub wedding_date: Option<NaiveDate>,
    pub wedding_venue: Option<String>,
}

/// 입점 업체(사장님) 회원 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub name: String,
    pub business_name: String,
    pub business_number: String,
    pub bank_account: String,
    pub business_address: String,
}

/// 백엔드 코드 교환 요청
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest {
    pub code: String,
    pub social_provider: String,
    pub role: UserRole,
    /// 백엔드 자체 검증용으로 원본 state를 그대로 되돌려 준다
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// 백엔드 코드 교환 응답
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
}
