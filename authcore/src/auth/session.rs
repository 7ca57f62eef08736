//! 세션 영속 저장소
//!
//! 세션은 필드마다 별도 키로 저장한다. 역할만 필요한 비인증 코드가
//! 블롭 역직렬화 없이 부분 조회할 수 있게 하기 위함이다.
//! 저장 값은 프로세스 재시작을 견디며, 로그아웃 시 전체 키가 함께 비워진다.

use crate::auth::types::{Session, UserRole};
use crate::tool::error::AppError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// 논리 키 이름 (저장 엔진 독립)
pub const KEY_ACCESS_TOKEN: &str = "accessToken";
pub const KEY_REFRESH_TOKEN: &str = "refreshToken";
pub const KEY_IS_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_ROLE: &str = "userRole";

const ALL_KEYS: [&str; 4] = [
    KEY_ACCESS_TOKEN,
    KEY_REFRESH_TOKEN,
    KEY_IS_LOGGED_IN,
    KEY_USER_ROLE,
];

/// 키/값 저장 엔진
///
/// 테스트에서는 메모리 구현으로 대체한다.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// 파일 기반 저장 엔진
///
/// 키 하나당 파일 하나. 디렉토리가 곧 저장소 전체이다.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| AppError::Storage(format!("저장 디렉토리 생성 실패: {e}")))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| AppError::Storage(format!("{key} 읽기 실패: {e}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        std::fs::write(self.path_for(key), value)
            .map_err(|e| AppError::Storage(format!("{key} 쓰기 실패: {e}")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&path)
            .map_err(|e| AppError::Storage(format!("{key} 삭제 실패: {e}")))
    }
}

/// 테스트용 메모리 저장 엔진
#[derive(Default)]
pub struct MemoryStorage {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.map.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.map.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.map.lock().remove(key);
        Ok(())
    }
}

/// 세션 저장소
///
/// 프로세스 전체에서 세션의 유일한 원본.
/// 생성은 콜백 성공 경로에서만, 소거는 로그아웃에서만 일어난다.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// 설정된 데이터 디렉토리 위에 파일 저장소로 생성
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self::new(Arc::new(FileStorage::new(dir)?)))
    }

    /// 세션을 키별로 나누어 저장
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        self.storage.set(KEY_ACCESS_TOKEN, &session.access_token)?;
        match &session.refresh_token {
            Some(token) => self.storage.set(KEY_REFRESH_TOKEN, token)?,
            None => self.storage.remove(KEY_REFRESH_TOKEN)?,
        }
        self.storage
            .set(KEY_IS_LOGGED_IN, if session.is_authenticated { "true" } else { "false" })?;
        self.storage.set(KEY_USER_ROLE, session.role.as_str())?;

        info!(role = session.role.as_str(), "세션 저장 완료");
        Ok(())
    }

    /// 저장된 세션 복원 (앱 시작 시 1회 호출)
    ///
    /// 필수 키가 없거나 해석 불가능하면 세션 없음으로 취급한다.
    pub fn load(&self) -> Option<Session> {
        let access_token = self.storage.get(KEY_ACCESS_TOKEN).ok()??;
        let role = self
            .storage
            .get(KEY_USER_ROLE)
            .ok()?
            .and_then(|s| UserRole::from_str(&s))?;
        let is_authenticated = self
            .storage
            .get(KEY_IS_LOGGED_IN)
            .ok()?
            .map(|s| s == "true")
            .unwrap_or(false);
        let refresh_token = self.storage.get(KEY_REFRESH_TOKEN).ok()?;

        Some(Session {
            access_token,
            refresh_token,
            role,
            is_authenticated,
        })
    }

    /// 역할만 부분 조회 (비인증 코드용)
    pub fn role(&self) -> Option<UserRole> {
        self.storage
            .get(KEY_USER_ROLE)
            .ok()?
            .and_then(|s| UserRole::from_str(&s))
    }

    /// 인증 플래그 조회
    pub fn is_authenticated(&self) -> bool {
        matches!(
            self.storage.get(KEY_IS_LOGGED_IN),
            Ok(Some(ref v)) if v == "true"
        )
    }

    /// 모든 세션 키 제거 (멱등)
    pub fn clear(&self) -> Result<(), AppError> {
        for key in ALL_KEYS {
            self.storage.remove(key)?;
        }
        debug!("세션 키 전체 제거");
        Ok(())
    }
}
