//! 컨테이너 및 데모 빈 설정
//!
//! 환경 변수(및 `dotenv` 프로필 파일)에서 컨테이너 동작 방식을 읽어옵니다.
//!
//! | 환경 변수 | 기본값 | 설명 |
//! |-----------|--------|------|
//! | `PROFILE` | `dev` | 실행 프로필 (`dev`, `test`, `prod`) |
//! | `CONTAINER_EAGER_INIT` | 운영: `true`, 그 외: `false` | 등록 직후 모든 싱글톤 즉시 생성 |
//! | `NETWORK_CLIENT_URL` | `http://hello-spring.dev` | `NetworkClient` 접속 URL |

use std::env;

pub const DEFAULT_NETWORK_CLIENT_URL: &str = "http://hello-spring.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()))
    }

    /// 알 수 없는 값은 개발 환경으로 취급합니다
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "prod" | "production" => Environment::Production,
            "test" | "testing" => Environment::Test,
            _ => Environment::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "dev",
            Environment::Test => "test",
            Environment::Production => "prod",
        }
    }
}

/// 컨테이너 구동 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    pub profile: Environment,
    /// true면 `AppConfig::application_context`가 모든 싱글톤을 미리 생성합니다
    pub eager_init: bool,
    pub network_client_url: String,
}

impl ContainerConfig {
    /// 환경 변수에서 설정을 읽습니다
    ///
    /// 잘못된 값은 무시하고 프로필별 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let profile = Environment::current();

        let eager_init = env::var("CONTAINER_EAGER_INIT")
            .ok()
            .and_then(|value| parse_bool(&value))
            .unwrap_or_else(|| Self::eager_init_for_env(profile));

        let network_client_url = env::var("NETWORK_CLIENT_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NETWORK_CLIENT_URL.to_string());

        Self {
            profile,
            eager_init,
            network_client_url,
        }
    }

    pub fn for_env(profile: Environment) -> Self {
        Self {
            profile,
            eager_init: Self::eager_init_for_env(profile),
            network_client_url: DEFAULT_NETWORK_CLIENT_URL.to_string(),
        }
    }

    /// 운영 환경은 기동 시점에 설정 오류를 드러내도록 즉시 생성을 기본으로 합니다
    pub fn eager_init_for_env(profile: Environment) -> bool {
        matches!(profile, Environment::Production)
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self::for_env(Environment::Development)
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
