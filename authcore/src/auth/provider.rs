//! 소셜 제공자 정의와 인증 URL 생성

use crate::auth::state::encode_state;
use crate::auth::types::UserRole;
use crate::config::{AuthConfig, ProviderSettings};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// 소셜 로그인 제공자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SocialProvider {
    Kakao,
    Naver,
}

impl SocialProvider {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kakao" => Some(SocialProvider::Kakao),
            "naver" => Some(SocialProvider::Naver),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Kakao => "KAKAO",
            SocialProvider::Naver => "NAVER",
        }
    }
}

/// 제공자 인증 URL 생성
///
/// `{auth_url}?response_type=code&client_id=...&redirect_uri=...&state=...`
/// 형태의 URL만 조립한다. 네트워크 호출은 없으며, 브라우저 이동은 호출자 몫이다.
pub fn build_authorization_url(
    provider: SocialProvider,
    role: UserRole,
    config: &AuthConfig,
) -> String {
    let settings: &ProviderSettings = match provider {
        SocialProvider::Kakao => &config.kakao,
        SocialProvider::Naver => &config.naver,
    };

    let params = vec![
        ("response_type", "code".to_string()),
        ("client_id", settings.client_id.clone()),
        ("redirect_uri", settings.redirect_uri.clone()),
        ("state", encode_state(role)),
    ];

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", settings.auth_url, query)
}
