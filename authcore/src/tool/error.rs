//! 인증 클라이언트 에러 관리
//!
//! 소셜 로그인과 세션 수명주기에서 발생하는 에러를 체계적으로 관리합니다.
//! 각 에러는 심각도에 따라 로깅되며, 화면 계층은 에러 종류에 따라
//! 라우팅(재로그인 유도 / 네트워크 안내)을 결정합니다.

use thiserror::Error;
use tracing::{error, info, warn};

/// 공통 애플리케이션 에러 정의
#[derive(Error, Debug, Clone)]
pub enum AppError {
    // 콜백 처리 에러
    #[error("인증 코드 누락")]
    MissingCode,

    #[error("코드 교환 거부: {0}")]
    ExchangeRejected(String),

    // 네트워크 에러
    #[error("네트워크 오류: {0}")]
    TransportFailure(String),

    // 세션 관련 에러
    #[error("인증되지 않은 상태: {0}")]
    NotAuthenticated(String),

    #[error("저장소 오류: {0}")]
    Storage(String),

    // 설정 에러
    #[error("설정 오류: {0}")]
    Configuration(String),
}

impl AppError {
    /// 에러의 심각도를 반환합니다.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Critical: 클라이언트 상태 훼손 가능
            AppError::Storage(_) | AppError::Configuration(_) => ErrorSeverity::Critical,

            // High: 로그인 플로우 실패
            AppError::ExchangeRejected(_) | AppError::TransportFailure(_) => ErrorSeverity::High,

            // Medium: 사용자 재시도로 복구 가능
            AppError::MissingCode => ErrorSeverity::Medium,

            // Low: 정상 경로의 일부 (미로그인 상태 접근)
            AppError::NotAuthenticated(_) => ErrorSeverity::Low,
        }
    }

    /// 에러를 심각도에 맞는 레벨로 로깅합니다.
    pub fn log(&self, context: &str) {
        let severity = self.severity();
        let error_msg = self.to_string();

        match severity {
            ErrorSeverity::Critical => {
                error!("[CRITICAL] {} - {}", context, error_msg);
            }
            ErrorSeverity::High => {
                error!("[HIGH] {} - {}", context, error_msg);
            }
            ErrorSeverity::Medium => {
                warn!("[MEDIUM] {} - {}", context, error_msg);
            }
            ErrorSeverity::Low => {
                info!("[LOW] {} - {}", context, error_msg);
            }
        }
    }

    /// 사용자에게 재시도를 권해도 되는 에러인지 여부
    ///
    /// 교환 거부는 같은 코드 재제출이 무의미하므로 false,
    /// 네트워크 오류와 코드 누락은 재시도 대상이다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::MissingCode | AppError::TransportFailure(_))
    }
}

/// 에러 심각도 레벨
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorSeverity {
    Critical, // 클라이언트 상태 훼손
    High,     // 로그인 플로우 실패
    Medium,   // 사용자 재시도 대상
    Low,      // 정상 경로의 일부
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            if status.is_client_error() {
                return AppError::ExchangeRejected(format!("HTTP {status}"));
            }
        }
        AppError::TransportFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(AppError::Storage("x".into()).severity(), ErrorSeverity::Critical);
        assert_eq!(
            AppError::ExchangeRejected("x".into()).severity(),
            ErrorSeverity::High
        );
        assert_eq!(AppError::MissingCode.severity(), ErrorSeverity::Medium);
        assert_eq!(
            AppError::NotAuthenticated("x".into()).severity(),
            ErrorSeverity::Low
        );
    }

    #[test]
    fn test_retryable() {
        assert!(AppError::MissingCode.is_retryable());
        assert!(AppError::TransportFailure("timeout".into()).is_retryable());
        assert!(!AppError::ExchangeRejected("expired code".into()).is_retryable());
    }
}
