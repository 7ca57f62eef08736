//! 로깅 시스템 초기화
//!
//! 클라이언트 라이브러리는 구조화 로그만 내보내고, 구독자 구성은
//! 호스트 앱 몫이다. 단독 실행(데모, 테스트 바이너리)을 위한
//! 헬퍼만 제공한다.

use tracing_subscriber::EnvFilter;

/// 로깅 시스템 초기화 함수
///
/// `RUST_LOG` 환경변수로 레벨을 제어한다. 이미 전역 구독자가 있으면
/// 조용히 무시한다 (테스트에서 반복 호출 허용).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
