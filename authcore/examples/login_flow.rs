//! 소셜 로그인 플로우 사용 예시
//!
//! 네트워크 없이 URL 생성과 세션 복원까지만 보여준다.
//! 실제 앱에서는 브라우저가 auth_url로 이동한 뒤 콜백 쿼리를
//! `CallbackProcessor::run`에 넘긴다.

use authcore::auth::{AuthService, SocialProvider, UserRole};
use authcore::config::AuthConfig;

fn main() -> anyhow::Result<()> {
    authcore::logging::init();

    let config = AuthConfig::from_env();
    let service = AuthService::new(config)?;

    // 로그인 버튼: 역할을 state에 실어 제공자로 이동
    let kakao_url = service.login_url(SocialProvider::Kakao, UserRole::Customer);
    let naver_url = service.login_url(SocialProvider::Naver, UserRole::Owner);
    println!("카카오 로그인(예비 부부): {kakao_url}");
    println!("네이버 로그인(입점 업체): {naver_url}");

    // 앱 시작 시 저장된 세션 복원
    match service.restore() {
        Some(session) => println!("복원된 세션: {} ({:?})", session.access_token, session.role),
        None => println!("저장된 세션 없음, 로그인 필요"),
    }

    Ok(())
}
