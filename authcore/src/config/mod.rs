//! 환경설정 로딩
//!
//! 제공자별 OAuth 설정과 백엔드 주소를 환경변수에서 읽는다.
//! `.env` 파일은 현재 디렉토리와 상위 디렉토리에서 순서대로 찾는다.

use std::env;

/// 제공자별 OAuth 설정
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub client_id: String,
    pub redirect_uri: String,
    pub auth_url: String,
}

/// 인증 클라이언트 전체 설정
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub kakao: ProviderSettings,
    pub naver: ProviderSettings,
    /// 코드 교환과 프로필 조회를 담당하는 백엔드 API 베이스 URL
    pub backend_base_url: String,
    /// 세션 키 파일이 저장되는 디렉토리
    pub data_dir: String,
}

impl AuthConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Self {
        // .env 파일 로드 (현재 디렉토리와 상위 디렉토리에서 찾기)
        let env_paths = vec![".env", "../.env", "../../.env"];
        let mut env_loaded = false;

        for path in env_paths {
            if std::path::Path::new(path).exists() {
                dotenv::from_filename(path).ok();
                env_loaded = true;
                break;
            }
        }

        if !env_loaded {
            dotenv::dotenv().ok(); // 기본 .env 파일 시도
        }

        Self {
            kakao: ProviderSettings {
                client_id: env::var("KAKAO_CLIENT_ID")
                    .unwrap_or_else(|_| "kakao_client_id".into()),
                redirect_uri: env::var("KAKAO_REDIRECT_URI")
                    .unwrap_or_else(|_| "http://localhost:3000/oauth/kakao".into()),
                auth_url: env::var("KAKAO_AUTH_URL")
                    .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".into()),
            },
            naver: ProviderSettings {
                client_id: env::var("NAVER_CLIENT_ID")
                    .unwrap_or_else(|_| "naver_client_id".into()),
                redirect_uri: env::var("NAVER_REDIRECT_URI")
                    .unwrap_or_else(|_| "http://localhost:3000/oauth/naver".into()),
                auth_url: env::var("NAVER_AUTH_URL")
                    .unwrap_or_else(|_| "https://nid.naver.com/oauth2.0/authorize".into()),
            },
            backend_base_url: env::var("BACKEND_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api/v1".into()),
            data_dir: env::var("AUTH_DATA_DIR").unwrap_or_else(|_| "./.auth".into()),
        }
    }
}
