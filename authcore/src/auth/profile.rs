//! 역할별 프로필 캐시
//!
//! 인증 후 1회 조회한 프로필을 보관하고, 프로필 수정 후에는 재조회로
//! 백엔드와의 불일치가 한 왕복 이상 지속되지 않게 한다.

use crate::api::backend::AuthBackend;
use crate::auth::session::SessionStore;
use crate::auth::types::{Profile, UserRole};
use crate::tool::error::AppError;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// 프로필 캐시
///
/// 세션이 원본이고 캐시는 파생물이다. 로그아웃 시 세션과 함께 버려진다.
pub struct ProfileCache {
    session_store: SessionStore,
    backend: Arc<dyn AuthBackend>,
    cached: Mutex<Option<Profile>>,
}

impl ProfileCache {
    pub fn new(session_store: SessionStore, backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            session_store,
            backend,
            cached: Mutex::new(None),
        }
    }

    /// 역할에 맞는 "내 정보" 요청을 보내 캐시를 교체
    ///
    /// 세션 저장소가 미인증 상태를 보고하면 네트워크 호출 없이
    /// 즉시 `Ok(None)`을 돌려준다.
    pub async fn refresh(&self, role: UserRole) -> Result<Option<Profile>, AppError> {
        if !self.session_store.is_authenticated() {
            debug!("미인증 상태, 프로필 갱신 생략");
            return Ok(None);
        }

        let session = self.session_store.load().ok_or_else(|| {
            AppError::NotAuthenticated("세션 복원 실패".into())
        })?;

        let profile = match role {
            UserRole::Customer => Profile::Customer(
                self.backend
                    .fetch_customer_profile(&session.access_token)
                    .await?,
            ),
            UserRole::Owner => Profile::Owner(
                self.backend
                    .fetch_owner_profile(&session.access_token)
                    .await?,
            ),
        };

        *self.cached.lock() = Some(profile.clone());
        info!(role = role.as_str(), "프로필 갱신 완료");
        Ok(Some(profile))
    }

    /// 마지막으로 조회한 프로필 (네트워크 호출 없음)
    pub fn get(&self) -> Option<Profile> {
        self.cached.lock().clone()
    }

    /// 캐시 소거 (로그아웃 경로)
    pub fn invalidate(&self) {
        *self.cached.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::MemoryStorage;
    use crate::auth::types::{
        CustomerProfile, ExchangeRequest, ExchangeResponse, OwnerProfile, Session,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubBackend {
        customer_calls: AtomicUsize,
        owner_calls: AtomicUsize,
    }

    impl StubBackend {
        fn new() -> Self {
            Self {
                customer_calls: AtomicUsize::new(0),
                owner_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AuthBackend for StubBackend {
        async fn exchange_code(
            &self,
            _req: &ExchangeRequest,
        ) -> Result<ExchangeResponse, AppError> {
            unreachable!("프로필 테스트는 교환을 호출하지 않는다")
        }

        async fn fetch_customer_profile(
            &self,
            _access_token: &str,
        ) -> Result<CustomerProfile, AppError> {
            self.customer_calls.fetch_add(1, Ordering::SeqCst);
            Ok(CustomerProfile {
                name: "이예신".into(),
                phone: "010-1234-5678".into(),
                address: "서울시 마포구".into(),
                wedding_date: None,
                wedding_venue: None,
            })
        }

        async fn fetch_owner_profile(
            &self,
            _access_token: &str,
        ) -> Result<OwnerProfile, AppError> {
            self.owner_calls.fetch_add(1, Ordering::SeqCst);
            Ok(OwnerProfile {
                name: "김사장".into(),
                business_name: "더가든홀".into(),
                business_number: "123-45-67890".into(),
                bank_account: "110-234-567890".into(),
                business_address: "서울시 강남구".into(),
            })
        }

        async fn logout(&self, _access_token: &str) -> Result<(), AppError> {
            Ok(())
        }
    }

    fn authenticated_store(role: UserRole) -> SessionStore {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        store
            .save(&Session {
                access_token: "token".into(),
                refresh_token: None,
                role,
                is_authenticated: true,
            })
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_refresh_is_noop_when_not_authenticated() {
        let backend = Arc::new(StubBackend::new());
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        let cache = ProfileCache::new(store, backend.clone());

        let result = cache.refresh(UserRole::Customer).await.unwrap();
        assert!(result.is_none());
        assert!(cache.get().is_none());
        assert_eq!(backend.customer_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_refresh_dispatches_by_role() {
        let backend = Arc::new(StubBackend::new());
        let cache = ProfileCache::new(authenticated_store(UserRole::Owner), backend.clone());

        let profile = cache.refresh(UserRole::Owner).await.unwrap().unwrap();
        assert_eq!(profile.role(), UserRole::Owner);
        assert_eq!(backend.owner_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.customer_calls.load(Ordering::SeqCst), 0);

        // get()은 네트워크 없이 마지막 값을 돌려준다
        assert_eq!(cache.get().unwrap().role(), UserRole::Owner);
        assert_eq!(backend.owner_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_drops_cached_value() {
        let backend = Arc::new(StubBackend::new());
        let cache = ProfileCache::new(authenticated_store(UserRole::Customer), backend);

        cache.refresh(UserRole::Customer).await.unwrap();
        assert!(cache.get().is_some());

        cache.invalidate();
        assert!(cache.get().is_none());
    }
}
