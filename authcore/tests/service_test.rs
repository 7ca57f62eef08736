//! AuthService 수명주기 통합 테스트

use async_trait::async_trait;
use authcore::auth::session::{MemoryStorage, SessionStore};
use authcore::auth::types::{
    CustomerProfile, ExchangeRequest, ExchangeResponse, OwnerProfile, Session,
};
use authcore::auth::{AuthService, SocialProvider, UserRole};
use authcore::config::{AuthConfig, ProviderSettings};
use authcore::tool::error::AppError;
use authcore::AuthBackend;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 로그아웃 거동 제어용 mock
struct LogoutBackend {
    logout_calls: AtomicUsize,
    fail_logout: bool,
}

#[async_trait]
impl AuthBackend for LogoutBackend {
    async fn exchange_code(&self, _req: &ExchangeRequest) -> Result<ExchangeResponse, AppError> {
        Err(AppError::ExchangeRejected("not under test".into()))
    }

    async fn fetch_customer_profile(
        &self,
        _access_token: &str,
    ) -> Result<CustomerProfile, AppError> {
        Ok(CustomerProfile {
            name: "이예신".into(),
            phone: "010-1234-5678".into(),
            address: "서울시 마포구".into(),
            wedding_date: None,
            wedding_venue: None,
        })
    }

    async fn fetch_owner_profile(&self, _access_token: &str) -> Result<OwnerProfile, AppError> {
        Err(AppError::NotAuthenticated("not under test".into()))
    }

    async fn logout(&self, _access_token: &str) -> Result<(), AppError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout {
            Err(AppError::TransportFailure("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

fn test_config() -> AuthConfig {
    AuthConfig {
        kakao: ProviderSettings {
            client_id: "kakao-app-key".into(),
            redirect_uri: "http://localhost:3000/oauth/kakao".into(),
            auth_url: "https://kauth.kakao.com/oauth/authorize".into(),
        },
        naver: ProviderSettings {
            client_id: "naver-app-key".into(),
            redirect_uri: "http://localhost:3000/oauth/naver".into(),
            auth_url: "https://nid.naver.com/oauth2.0/authorize".into(),
        },
        backend_base_url: "http://localhost:8080/api/v1".into(),
        data_dir: "./.auth".into(),
    }
}

fn service_with(fail_logout: bool) -> (AuthService, Arc<LogoutBackend>) {
    let backend = Arc::new(LogoutBackend {
        logout_calls: AtomicUsize::new(0),
        fail_logout,
    });
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    let service = AuthService::with_backend(test_config(), backend.clone(), store);
    (service, backend)
}

fn seed_session(service: &AuthService) {
    service
        .session_store()
        .save(&Session {
            access_token: "token".into(),
            refresh_token: None,
            role: UserRole::Customer,
            is_authenticated: true,
        })
        .unwrap();
}

#[tokio::test]
async fn test_logout_clears_session_and_cache() {
    let (service, backend) = service_with(false);
    seed_session(&service);
    service
        .profile_cache()
        .refresh(UserRole::Customer)
        .await
        .unwrap();
    assert!(service.profile_cache().get().is_some());

    service.logout().await.unwrap();

    assert_eq!(backend.logout_calls.load(Ordering::SeqCst), 1);
    assert!(service.session_store().load().is_none());
    assert!(service.profile_cache().get().is_none());
}

#[tokio::test]
async fn test_logout_clears_client_state_even_if_backend_fails() {
    let (service, backend) = service_with(true);
    seed_session(&service);

    // 백엔드 로그아웃 실패는 클라이언트 정리를 막지 못한다
    service.logout().await.unwrap();

    assert_eq!(backend.logout_calls.load(Ordering::SeqCst), 1);
    assert!(service.session_store().load().is_none());
}

#[tokio::test]
async fn test_logout_without_session_skips_backend_call() {
    let (service, backend) = service_with(false);

    service.logout().await.unwrap();

    assert_eq!(backend.logout_calls.load(Ordering::SeqCst), 0);
    assert!(service.session_store().load().is_none());
}

#[tokio::test]
async fn test_restore_returns_saved_session() {
    let (service, _backend) = service_with(false);
    assert!(service.restore().is_none());

    seed_session(&service);
    let restored = service.restore().unwrap();
    assert_eq!(restored.role, UserRole::Customer);
    assert!(restored.is_authenticated);
}

#[tokio::test]
async fn test_login_url_uses_provider_settings() {
    let (service, _backend) = service_with(false);

    let url = service.login_url(SocialProvider::Naver, UserRole::Owner);
    assert!(url.starts_with("https://nid.naver.com/oauth2.0/authorize?"));
    assert!(url.contains("client_id=naver%2Dapp%2Dkey") || url.contains("client_id=naver-app-key"));
    assert!(url.contains("response_type=code"));
}
