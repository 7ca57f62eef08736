//! 통합 인증 모듈
//!
//! 소셜 로그인 시작부터 콜백 처리, 세션 영속, 프로필 캐시까지의
//! 클라이언트 측 인증 수명주기 전체를 담당한다.

pub mod callback;
pub mod guard;
pub mod profile;
pub mod provider;
pub mod service;
pub mod session;
pub mod state;
pub mod types;

pub use callback::{CallbackOutcome, CallbackPhase, CallbackProcessor, Route};
pub use profile::ProfileCache;
pub use provider::{build_authorization_url, SocialProvider};
pub use service::AuthService;
pub use session::{FileStorage, KeyValueStorage, MemoryStorage, SessionStore};
pub use state::{decode_state, encode_state};
pub use types::{CustomerProfile, OwnerProfile, Profile, Session, UserRole};
