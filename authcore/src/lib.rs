//! authcore — 마켓플레이스 클라이언트 공통 인증 라이브러리
//!
//! 예비 부부(CUSTOMER)와 입점 업체(OWNER) 두 역할을 카카오/네이버
//! 소셜 로그인으로 인증하고, 세션 영속과 역할별 프로필 캐시를 관리한다.
//!
//! # 흐름
//! 1. 로그인 화면이 [`auth::AuthService::login_url`]로 제공자 인증 URL을 만들어 이동
//! 2. 제공자가 `code`/`state`와 함께 등록된 콜백 경로로 되돌림
//! 3. [`auth::CallbackProcessor`]가 정확히 한 번 실행되어 코드를 백엔드와 교환
//! 4. 세션이 [`auth::SessionStore`]에 기록된 뒤 [`auth::ProfileCache`]가 갱신
//! 5. 로그아웃은 백엔드 성패와 무관하게 클라이언트 상태를 비움

pub mod api;
pub mod auth;
pub mod config;
pub mod logging;
pub mod tool;

pub use api::{AuthBackend, HttpAuthBackend};
pub use auth::{
    AuthService, CallbackOutcome, CallbackPhase, CallbackProcessor, Profile, ProfileCache, Route,
    Session, SessionStore, SocialProvider, UserRole,
};
pub use config::AuthConfig;
pub use tool::AppError;
