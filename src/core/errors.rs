//! # Container Error Handling
//!
//! 의존성 주입 컨테이너에서 발생하는 모든 에러를 하나의 열거형으로 통합합니다.
//! Spring의 `BeanCreationException`, `NoSuchBeanDefinitionException`,
//! `BeanCurrentlyInCreationException` 계층을 Rust의 `thiserror` 기반 열거형으로
//! 옮겨, 호출자가 `match` 한 번으로 실패 원인을 구분할 수 있게 합니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 컨테이너 |
//! |--------|-------------|
//! | `BeanDefinitionOverrideException` | [`ContainerError::DuplicateKey`] |
//! | `NoSuchBeanDefinitionException` | [`ContainerError::UnknownKey`], [`ContainerError::NoBeanOfType`] |
//! | `NoUniqueBeanDefinitionException` | [`ContainerError::NoUniqueBean`] |
//! | `BeanCurrentlyInCreationException` | [`ContainerError::CyclicDependency`] |
//! | `BeanCreationException` | [`ContainerError::Construction`] |
//! | `BeanNotOfRequiredTypeException` | [`ContainerError::TypeMismatch`] |
//!
//! ## 전파 규칙
//!
//! - 등록/조회 단계 에러(`DuplicateKey`, `UnknownKey`, `CyclicDependency`)는
//!   즉시 호출자에게 반환되고 해당 연산을 중단합니다.
//! - `Construction`은 그 `resolve` 호출 전체를 중단하며, 그 호출 중에 만들어진
//!   싱글톤은 캐시에 남지 않습니다.
//! - 종료 시점의 `HookInvocation`은 [`ShutdownReport`](crate::core::lifecycle::ShutdownReport)에
//!   수집될 뿐 나머지 빈의 소멸을 멈추지 않습니다.

use std::fmt;

use thiserror::Error;

/// 사용자 팩토리와 훅이 돌려주는 에러 타입
///
/// 팩토리 안에서 `?`를 쓰면 [`ContainerError`]를 포함한 어떤 에러든
/// 이 타입으로 자동 변환됩니다.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 생명주기 훅이 호출되는 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    /// 의존성 주입 직후 (`@PostConstruct`)
    Init,
    /// 컨테이너 종료 시 (`@PreDestroy`)
    Destroy,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookPhase::Init => f.write_str("init"),
            HookPhase::Destroy => f.write_str("destroy"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("Duplicate bean key: {0}")]
    DuplicateKey(String),

    #[error("Unknown bean key: {0}")]
    UnknownKey(String),

    #[error("Cyclic dependency detected: {}", .path.join(" -> "))]
    CyclicDependency { path: Vec<String> },

    #[error("Failed to construct bean '{key}': {source}")]
    Construction {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("{phase} hook failed for bean '{key}': {source}")]
    HookInvocation {
        key: String,
        phase: HookPhase,
        #[source]
        source: BoxError,
    },

    #[error("Bean '{key}' is not of required type {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("Bean '{bean}' did not declare a dependency on '{dependency}'")]
    UndeclaredDependency { bean: String, dependency: String },

    #[error("No bean of type {0} is registered")]
    NoBeanOfType(&'static str),

    #[error("Expected a single bean of type {type_name} but found {}", .candidates.join(", "))]
    NoUniqueBean {
        type_name: &'static str,
        candidates: Vec<String>,
    },

    #[error("Container has already been shut down")]
    ContainerClosed,
}

impl ContainerError {
    /// 문제가 된 빈의 키를 반환합니다 (키가 없는 에러는 `None`)
    pub fn key(&self) -> Option<&str> {
        match self {
            ContainerError::DuplicateKey(key) | ContainerError::UnknownKey(key) => Some(key),
            ContainerError::CyclicDependency { path } => path.first().map(String::as_str),
            ContainerError::Construction { key, .. }
            | ContainerError::HookInvocation { key, .. }
            | ContainerError::TypeMismatch { key, .. } => Some(key),
            ContainerError::UndeclaredDependency { bean, .. } => Some(bean),
            ContainerError::NoBeanOfType(_)
            | ContainerError::NoUniqueBean { .. }
            | ContainerError::ContainerClosed => None,
        }
    }
}

pub type ContainerResult<T> = Result<T, ContainerError>;

/// `catch_unwind`로 잡은 패닉 페이로드를 사람이 읽을 수 있는 메시지로 바꿉니다
pub(crate) fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_cyclic_dependency_message_shows_path() {
        let error = ContainerError::CyclicDependency {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };

        assert_eq!(error.to_string(), "Cyclic dependency detected: a -> b -> a");
        assert_eq!(error.key(), Some("a"));
    }

    #[test]
    fn test_construction_error_keeps_source() {
        let cause: BoxError = "connection refused".into();
        let error = ContainerError::Construction {
            key: "memberRepository".to_string(),
            source: cause,
        };

        assert!(error.to_string().contains("memberRepository"));
        let source = error.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn test_hook_error_names_phase() {
        let error = ContainerError::HookInvocation {
            key: "networkClient".to_string(),
            phase: HookPhase::Destroy,
            source: "socket already closed".into(),
        };

        assert!(error.to_string().starts_with("destroy hook failed"));
    }

    #[test]
    fn test_panic_message_extracts_text() {
        let payload = std::panic::catch_unwind(|| {
            panic!("boom");
        }).unwrap_err();
        assert_eq!(panic_message(payload), "panicked: boom");

        let owned = std::panic::catch_unwind(|| {
            panic!("{} failed", "factory");
        }).unwrap_err();
        assert_eq!(panic_message(owned), "panicked: factory failed");
    }

    #[test]
    fn test_container_error_converts_into_box_error() {
        // 팩토리 안에서 `?`로 전파될 수 있어야 한다
        fn factory() -> Result<(), BoxError> {
            Err::<(), _>(ContainerError::UnknownKey("missing".to_string()))?;
            Ok(())
        }

        let error = factory().unwrap_err();
        assert_eq!(error.to_string(), "Unknown bean key: missing");
    }
}
