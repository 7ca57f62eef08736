//! 역할 좁히기
//!
//! 화면 계층이 역할별 데이터를 그리기 전에 현재 프로필이 기대 역할과
//! 일치하는지 단언하는 용도. `None`은 "접근 불가 / 재로그인 안내"이며
//! 빈 프로필로 취급해서는 안 된다.

use crate::auth::types::{CustomerProfile, OwnerProfile, Profile, UserRole};

/// 기대 역할과 일치할 때만 프로필을 돌려준다. 절대 실패하지 않는다.
pub fn narrow(profile: &Profile, expected: UserRole) -> Option<&Profile> {
    match (profile, expected) {
        (Profile::Customer(_), UserRole::Customer) => Some(profile),
        (Profile::Owner(_), UserRole::Owner) => Some(profile),
        (Profile::Customer(_), UserRole::Owner) => None,
        (Profile::Owner(_), UserRole::Customer) => None,
    }
}

/// 예비 부부 프로필로 좁히기
pub fn narrow_customer(profile: &Profile) -> Option<&CustomerProfile> {
    profile.as_customer()
}

/// 업체 프로필로 좁히기
pub fn narrow_owner(profile: &Profile) -> Option<&OwnerProfile> {
    profile.as_owner()
}
