//! 백엔드 인증 API 포트
//!
//! 코드 교환과 프로필 조회는 모두 이 트레이트를 통해서만 나간다.
//! 테스트에서는 mock 구현으로 대체한다.

use crate::auth::types::{CustomerProfile, ExchangeRequest, ExchangeResponse, OwnerProfile};
use crate::tool::error::AppError;
use async_trait::async_trait;
use tracing::debug;

/// 백엔드 인증 API
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// 인증 코드를 세션 토큰으로 교환
    async fn exchange_code(&self, req: &ExchangeRequest) -> Result<ExchangeResponse, AppError>;

    /// 예비 부부 회원 프로필 조회
    async fn fetch_customer_profile(&self, access_token: &str)
        -> Result<CustomerProfile, AppError>;

    /// 업체 회원 프로필 조회
    async fn fetch_owner_profile(&self, access_token: &str) -> Result<OwnerProfile, AppError>;

    /// 백엔드 로그아웃 (best-effort, 실패해도 클라이언트 세션은 비운다)
    async fn logout(&self, access_token: &str) -> Result<(), AppError>;
}

/// reqwest 기반 프로덕션 구현
#[derive(Clone)]
pub struct HttpAuthBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// 상태 코드를 에러 분류로 변환
    ///
    /// 4xx는 백엔드의 명시적 거부, 그 외 비정상 응답은 전송 계층 문제로 본다.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        if status.is_client_error() {
            Err(AppError::ExchangeRejected(format!("HTTP {status}: {body}")))
        } else {
            Err(AppError::TransportFailure(format!("HTTP {status}: {body}")))
        }
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn exchange_code(&self, req: &ExchangeRequest) -> Result<ExchangeResponse, AppError> {
        debug!(provider = %req.social_provider, "코드 교환 요청");

        let resp = self
            .client
            .post(format!("{}/auth/social/login", self.base_url))
            .json(req)
            .send()
            .await?;

        let resp = Self::check_status(resp).await?;
        resp.json::<ExchangeResponse>()
            .await
            .map_err(|e| AppError::TransportFailure(format!("응답 파싱 실패: {e}")))
    }

    async fn fetch_customer_profile(
        &self,
        access_token: &str,
    ) -> Result<CustomerProfile, AppError> {
        let resp = self
            .client
            .get(format!("{}/customers/me", self.base_url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await?;

        let resp = Self::check_status(resp).await?;
        resp.json::<CustomerProfile>()
            .await
            .map_err(|e| AppError::TransportFailure(format!("응답 파싱 실패: {e}")))
    }

    async fn fetch_owner_profile(&self, access_token: &str) -> Result<OwnerProfile, AppError> {
        let resp = self
            .client
            .get(format!("{}/owners/me", self.base_url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await?;

        let resp = Self::check_status(resp).await?;
        resp.json::<OwnerProfile>()
            .await
            .map_err(|e| AppError::TransportFailure(format!("응답 파싱 실패: {e}")))
    }

    async fn logout(&self, access_token: &str) -> Result<(), AppError> {
        let resp = self
            .client
            .post(format!("{}/auth/logout", self.base_url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await?;

        Self::check_status(resp).await.map(|_| ())
    }
}
