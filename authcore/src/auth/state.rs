//! OAuth state 파라미터 코덱
//!
//! 제공자의 state 파라미터에 의도한 역할을 실어 리다이렉트 왕복을 통과시킨다.
//! 제공자 중간 경유지가 값을 다시 인코딩할 수도, 하지 않을 수도 있으므로
//! 디코더는 평문 리터럴과 JSON 래핑(각각 0~1회 percent 인코딩) 모두를 허용한다.

use crate::auth::types::UserRole;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct StatePayload {
    role: String,
}

/// 역할을 URL-safe state 토큰으로 인코딩
///
/// 같은 역할에 대해 항상 같은 문자열을 생성한다.
/// 와이어 형태는 percent 인코딩된 `{"role":"..."}` JSON 객체.
pub fn encode_state(role: UserRole) -> String {
    let json = format!(r#"{{"role":"{}"}}"#, role.as_str());
    utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string()
}

/// state 토큰에서 역할 복원
///
/// 어떤 입력에도 실패하지 않는다. 순서대로 시도:
/// 1. 역할 리터럴 그대로인 경우
/// 2. percent 디코딩 후 리터럴 재시도, 이어서 JSON `{"role": ...}` 파싱
/// 3. 전부 실패하면 기본 역할(CUSTOMER)로 대체하고 warn 로그만 남긴다
pub fn decode_state(raw: Option<&str>) -> UserRole {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => {
            warn!("state 파라미터 없음, 기본 역할로 대체");
            return UserRole::default();
        }
    };

    if let Some(role) = UserRole::from_str(raw) {
        return role;
    }

    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    if let Some(role) = UserRole::from_str(&decoded) {
        return role;
    }

    if let Ok(payload) = serde_json::from_str::<StatePayload>(&decoded) {
        if let Some(role) = UserRole::from_str(&payload.role) {
            return role;
        }
    }

    warn!(state = %raw, "state 파라미터 해석 실패, 기본 역할로 대체");
    UserRole::default()
}
