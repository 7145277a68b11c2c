//! # Bean Lifecycle Management
//!
//! 빈의 생명주기 상태 전이와 초기화/소멸 훅 호출을 담당합니다.
//!
//! ```text
//! Created ──▶ Injected ──▶ Initialized ──▶ (active) ──▶ Destroyed
//!   팩토리       생성자 주입      init 훅                    destroy 훅
//! ```
//!
//! - 초기화 훅은 주입 직후 정확히 한 번 호출됩니다.
//! - 소멸 훅은 컨테이너 종료 시 **초기화의 역순**으로 호출됩니다
//!   (마지막에 만들어진 빈이 가장 먼저 정리됨).
//! - 소멸 훅이 실패하거나 패닉해도 나머지 빈의 정리는 계속됩니다.
//!
//! Spring의 `@PostConstruct` / `@PreDestroy` 어노테이션 대신
//! [`Initializable`] / [`Disposable`] 트레이트를 구현하거나,
//! 빌더의 `on_init` / `on_destroy`로 클로저를 직접 넘깁니다.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError, RwLock};

use log::{error, info};

use crate::core::definition::{Bean, Hook};
use crate::core::errors::{panic_message, BoxError, ContainerError, ContainerResult, HookPhase};

/// 의존성 주입이 끝난 직후 호출되는 초기화 능력 (`InitializingBean`)
pub trait Initializable {
    fn initialize(&self) -> Result<(), BoxError>;
}

/// 컨테이너 종료 시 호출되는 정리 능력 (`DisposableBean`)
pub trait Disposable {
    fn destroy(&self) -> Result<(), BoxError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Injected,
    Initialized,
    Destroyed,
}

/// 종료 시 소멸 대상이 되는 싱글톤 한 개
pub(crate) struct ManagedBean {
    pub(crate) key: String,
    pub(crate) bean: Bean,
    pub(crate) destroy_hook: Option<Hook>,
}

/// 종료 결과 요약
///
/// `destroyed`는 실제 정리 순서대로 기록되며, 훅 실패는 `failures`에 모입니다.
#[derive(Debug, Default)]
pub struct ShutdownReport {
    pub destroyed: Vec<String>,
    pub failures: Vec<ContainerError>,
}

impl ShutdownReport {
    /// 모든 소멸 훅이 성공했는지 여부
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 싱글톤의 상태 전이와 소멸 순서를 추적합니다
#[derive(Default)]
pub struct LifecycleManager {
    managed: Mutex<Vec<ManagedBean>>,
    states: RwLock<HashMap<String, LifecycleState>>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: &str) -> Option<LifecycleState> {
        self.states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }

    pub(crate) fn transition(&self, key: &str, state: LifecycleState) {
        self.states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), state);
    }

    pub(crate) fn forget(&self, key: &str) {
        self.states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    /// 초기화 훅을 호출하고 `Initialized` 상태로 전이합니다
    ///
    /// `track_state`가 false면(트랜지언트 빈) 훅만 호출하고 상태는 남기지 않습니다.
    pub(crate) fn initialize(
        &self,
        key: &str,
        bean: &Bean,
        hook: Option<&Hook>,
        track_state: bool,
    ) -> ContainerResult<()> {
        if let Some(hook) = hook {
            invoke_hook(key, HookPhase::Init, hook, bean)?;
            info!("🔌 Initialized bean '{}'", key);
        }

        if track_state {
            self.transition(key, LifecycleState::Initialized);
        }
        Ok(())
    }

    /// 초기화가 끝난 싱글톤들을 초기화 순서대로 소멸 대상에 추가합니다
    pub(crate) fn manage(&self, beans: Vec<ManagedBean>) {
        self.managed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(beans);
    }

    /// 소멸 대상 빈의 초기화 순서
    pub fn initialization_order(&self) -> Vec<String> {
        self.managed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|managed| managed.key.clone())
            .collect()
    }

    /// 관리 중인 모든 싱글톤을 역순으로 정리합니다
    ///
    /// 두 번째 호출부터는 정리할 대상이 없으므로 빈 리포트를 반환합니다.
    pub fn shutdown(&self) -> ShutdownReport {
        let managed = std::mem::take(
            &mut *self.managed.lock().unwrap_or_else(PoisonError::into_inner),
        );
        self.destroy_all(managed)
    }

    pub(crate) fn destroy_all(&self, beans: Vec<ManagedBean>) -> ShutdownReport {
        let mut report = ShutdownReport::default();

        for managed in beans.into_iter().rev() {
            if let Some(hook) = &managed.destroy_hook {
                match invoke_hook(&managed.key, HookPhase::Destroy, hook, &managed.bean) {
                    Ok(()) => info!("🧹 Destroyed bean '{}'", managed.key),
                    Err(e) => {
                        error!("❌ {}", e);
                        report.failures.push(e);
                    }
                }
            }

            self.transition(&managed.key, LifecycleState::Destroyed);
            report.destroyed.push(managed.key);
        }

        report
    }
}

fn invoke_hook(key: &str, phase: HookPhase, hook: &Hook, bean: &Bean) -> ContainerResult<()> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| hook(bean)));

    let source: BoxError = match outcome {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(source)) => source,
        Err(payload) => panic_message(payload).into(),
    };

    Err(ContainerError::HookInvocation {
        key: key.to_string(),
        phase,
        source,
    })
}
