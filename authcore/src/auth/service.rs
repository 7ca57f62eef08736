//! 통합 인증 서비스
//!
//! 로그인 URL 생성, 콜백 처리, 세션 복원, 로그아웃을 한곳에서 묶는다.
//! 수명주기: 앱 시작 시 `restore()` 1회, 로그아웃 시 `logout()`으로 종료.

use crate::api::backend::{AuthBackend, HttpAuthBackend};
use crate::auth::callback::CallbackProcessor;
use crate::auth::profile::ProfileCache;
use crate::auth::provider::{build_authorization_url, SocialProvider};
use crate::auth::session::SessionStore;
use crate::auth::types::{Session, UserRole};
use crate::config::AuthConfig;
use crate::tool::error::AppError;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{info, warn};

static INSTANCE: OnceCell<AuthService> = OnceCell::new();

/// 통합 인증 서비스
pub struct AuthService {
    config: AuthConfig,
    backend: Arc<dyn AuthBackend>,
    session_store: SessionStore,
    profile_cache: Arc<ProfileCache>,
}

impl AuthService {
    /// 프로세스 전역 싱글턴
    ///
    /// 첫 호출 시 환경설정으로 초기화된다. 세션 저장소가 유일한 원본으로
    /// 동작하려면 화면들이 같은 인스턴스를 공유해야 한다.
    pub fn global() -> Result<&'static AuthService, AppError> {
        INSTANCE.get_or_try_init(|| AuthService::new(AuthConfig::from_env()))
    }

    /// 설정으로부터 프로덕션 구성(HTTP 백엔드 + 파일 저장소) 생성
    pub fn new(config: AuthConfig) -> Result<Self, AppError> {
        let backend: Arc<dyn AuthBackend> =
            Arc::new(HttpAuthBackend::new(config.backend_base_url.clone()));
        let session_store = SessionStore::with_data_dir(&config.data_dir)?;
        Ok(Self::with_backend(config, backend, session_store))
    }

    /// 저장소와 백엔드를 직접 주입 (테스트용)
    pub fn with_backend(
        config: AuthConfig,
        backend: Arc<dyn AuthBackend>,
        session_store: SessionStore,
    ) -> Self {
        let profile_cache = Arc::new(ProfileCache::new(session_store.clone(), backend.clone()));
        Self {
            config,
            backend,
            session_store,
            profile_cache,
        }
    }

    /// 로그인 버튼이 이동할 제공자 인증 URL
    pub fn login_url(&self, provider: SocialProvider, role: UserRole) -> String {
        build_authorization_url(provider, role, &self.config)
    }

    /// 콜백 페이지 로드당 하나 만드는 프로세서
    ///
    /// 1회 실행 보장은 프로세서 인스턴스 단위다. 콜백 화면이 리마운트돼도
    /// 같은 페이지 로드 안에서는 이 인스턴스를 그대로 재사용해야
    /// 코드 이중 제출이 막힌다. 마운트마다 새로 만들면 가드가 매번
    /// Idle에서 시작한다.
    pub fn callback_processor(&self) -> CallbackProcessor {
        CallbackProcessor::new(
            self.backend.clone(),
            self.session_store.clone(),
            self.profile_cache.clone(),
        )
    }

    /// 앱 시작 시 저장된 세션 복원
    pub fn restore(&self) -> Option<Session> {
        let session = self.session_store.load();
        if let Some(ref s) = session {
            info!(role = s.role.as_str(), "저장된 세션 복원");
        }
        session
    }

    /// 로그아웃
    ///
    /// 백엔드 로그아웃 호출이 실패해도 클라이언트 세션과 프로필 캐시는
    /// 무조건 비운다. 사용자에게 보이는 "로그아웃됨"과 클라이언트 상태가
    /// 어긋나는 일이 없어야 한다.
    pub async fn logout(&self) -> Result<(), AppError> {
        if let Some(session) = self.session_store.load() {
            if let Err(e) = self.backend.logout(&session.access_token).await {
                warn!(error = %e, "백엔드 로그아웃 실패, 클라이언트 세션은 정리");
            }
        }

        self.profile_cache.invalidate();
        self.session_store.clear()?;
        info!("로그아웃 완료");
        Ok(())
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    pub fn profile_cache(&self) -> &Arc<ProfileCache> {
        &self.profile_cache
    }
}
