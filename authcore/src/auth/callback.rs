//! 리다이렉트 콜백 처리
//!
//! 제공자 리다이렉트가 도착하면 인증 코드를 정확히 한 번만 백엔드에
//! 제출해야 한다. 콜백 화면은 재마운트될 수 있고, 대부분의 백엔드는
//! 코드를 1회 사용 후 무효화하므로 이중 제출은 곧 로그인 실패다.
//! "이미 실행됨" 불리언 대신 명명된 단계를 가진 상태 기계로 모델링해
//! 1회 실행 보장을 독립적으로 검증할 수 있게 한다.

use crate::api::backend::AuthBackend;
use crate::auth::profile::ProfileCache;
use crate::auth::provider::SocialProvider;
use crate::auth::session::SessionStore;
use crate::auth::state::decode_state;
use crate::auth::types::{ExchangeRequest, Session};
use crate::tool::error::AppError;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};
use url::form_urlencoded;

/// 콜백 처리 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackPhase {
    Idle,
    Processing,
    Succeeded,
    Failed,
}

/// 처리 종료 후 이동할 목적지
#[derive(Debug, Clone)]
pub enum Route {
    /// 인증 완료 영역 홈
    AuthenticatedHome,
    /// 로그인 화면, 에러 표시와 함께
    Login { error: AppError },
}

/// 한 번의 실행 결과
#[derive(Debug, Clone)]
pub struct CallbackOutcome {
    pub route: Route,
    /// code/state가 제거된 쿼리 문자열. 콜백 화면의 주소창 교체용으로,
    /// 새로고침해도 코드가 재제출되지 않게 한다.
    pub cleaned_query: String,
}

/// 콜백 프로세서
///
/// 인스턴스당 1회만 실행된다. UI 이벤트 루프는 단일 스레드이고
/// 단계 검사는 어떤 suspend 지점보다 먼저 동기적으로 일어나므로
/// 별도의 잠금 없이 이중 실행이 차단된다.
pub struct CallbackProcessor {
    phase: Mutex<CallbackPhase>,
    backend: Arc<dyn AuthBackend>,
    session_store: SessionStore,
    profile_cache: Arc<ProfileCache>,
}

impl CallbackProcessor {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        session_store: SessionStore,
        profile_cache: Arc<ProfileCache>,
    ) -> Self {
        Self {
            phase: Mutex::new(CallbackPhase::Idle),
            backend,
            session_store,
            profile_cache,
        }
    }

    pub fn phase(&self) -> CallbackPhase {
        *self.phase.lock()
    }

    /// 콜백 쿼리 문자열 처리
    ///
    /// 첫 실행만 실제 처리를 수행하며, 재실행은 교환 요청도 저장소 쓰기도
    /// 없이 `None`을 돌려준다. 완료된 실행은 성공이든 실패든 정확히 하나의
    /// 목적지를 돌려준다.
    pub async fn run(
        &self,
        provider: SocialProvider,
        query: &str,
    ) -> Option<CallbackOutcome> {
        {
            let mut phase = self.phase.lock();
            if *phase != CallbackPhase::Idle {
                warn!(phase = ?*phase, "콜백 재실행 차단");
                return None;
            }
            *phase = CallbackPhase::Processing;
        }

        let (code, state) = extract_oauth_params(query);
        let cleaned_query = strip_oauth_params(query);

        let code = match code {
            Some(c) if !c.is_empty() => c,
            _ => {
                let error = AppError::MissingCode;
                error.log("콜백 처리");
                *self.phase.lock() = CallbackPhase::Failed;
                return Some(CallbackOutcome {
                    route: Route::Login { error },
                    cleaned_query,
                });
            }
        };

        let role = decode_state(state.as_deref());

        let request = ExchangeRequest {
            code,
            social_provider: provider.as_str().to_string(),
            role,
            state,
        };

        let outcome = match self.backend.exchange_code(&request).await {
            Ok(resp) => {
                let session = Session {
                    access_token: resp.access_token,
                    refresh_token: resp.refresh_token,
                    role,
                    is_authenticated: true,
                };

                // 저장이 끝난 뒤에만 프로필 갱신이 출발한다
                if let Err(error) = self.session_store.save(&session) {
                    error.log("세션 저장");
                    *self.phase.lock() = CallbackPhase::Failed;
                    return Some(CallbackOutcome {
                        route: Route::Login { error },
                        cleaned_query,
                    });
                }

                if let Err(e) = self.profile_cache.refresh(role).await {
                    // 세션은 이미 유효하므로 로그인 자체는 성공으로 취급
                    e.log("콜백 후 프로필 갱신");
                }

                info!(provider = provider.as_str(), role = role.as_str(), "소셜 로그인 성공");
                *self.phase.lock() = CallbackPhase::Succeeded;
                CallbackOutcome {
                    route: Route::AuthenticatedHome,
                    cleaned_query,
                }
            }
            Err(error) => {
                error.log("코드 교환");
                *self.phase.lock() = CallbackPhase::Failed;
                CallbackOutcome {
                    route: Route::Login { error },
                    cleaned_query,
                }
            }
        };

        Some(outcome)
    }
}

/// 쿼리 문자열에서 code/state 추출
fn extract_oauth_params(query: &str) -> (Option<String>, Option<String>) {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut code = None;
    let mut state = None;
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        match k.as_ref() {
            "code" => code = Some(v.into_owned()),
            "state" => state = Some(v.into_owned()),
            _ => {}
        }
    }
    (code, state)
}

/// 쿼리 문자열에서 code/state 파라미터 제거
pub fn strip_oauth_params(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        if k != "code" && k != "state" {
            serializer.append_pair(&k, &v);
        }
    }
    serializer.finish()
}
