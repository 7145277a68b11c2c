//! # Dependency Injection Container
//!
//! 빈 정의를 바탕으로 인스턴스를 만들고, 의존성을 주입하고, 싱글톤을 캐싱하고,
//! 종료 시 생명주기 훅을 호출하는 컨테이너입니다.
//! Spring의 `ApplicationContext`(정확히는 `DefaultListableBeanFactory`)에 해당합니다.
//!
//! 전역 서비스 로케이터 대신 명시적인 [`Container`] 인스턴스를 만들어
//! 필요한 곳에 넘깁니다. 테스트마다 독립된 컨테이너를 쓸 수 있습니다.
//!
//! ## 해결(resolve) 과정
//!
//! ```text
//! resolve("memberService")
//!   ├─ 싱글톤 캐시 hit? ──▶ 그대로 반환 (재생성, 재주입 없음)
//!   └─ miss: 생성 락 획득
//!        ├─ 경로에 이미 있음? ──▶ CyclicDependency
//!        ├─ 의존성 깊이 우선 해결: "memberRepository" ...
//!        ├─ 팩토리 호출 (Created → Injected)
//!        ├─ init 훅 호출 (Initialized)
//!        └─ 호출 전체가 성공하면 새 싱글톤을 캐시에 커밋
//! ```
//!
//! 한 번의 `resolve` 호출 중에 새로 만든 싱글톤은 임시로 보관되었다가
//! 호출 전체가 성공했을 때만 캐시에 들어갑니다. 중간에 실패하면 모두 버려지고,
//! 이미 초기화된 인스턴스에는 소멸 훅이 역순으로 호출됩니다.
//!
//! ## 동시성
//!
//! 생성은 하나의 생성 락 아래에서 직렬화되므로 동시에 처음 조회하더라도
//! 싱글톤 키 하나당 인스턴스는 정확히 하나만 만들어집니다. 캐시된 싱글톤은
//! 생성 락을 건드리지 않고 읽기 락만으로 반환됩니다.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::{debug, info, warn};

use crate::core::definition::{Bean, BeanDefinition, Dependencies};
use crate::core::errors::{panic_message, ContainerError, ContainerResult};
use crate::core::lifecycle::{LifecycleManager, LifecycleState, ManagedBean, ShutdownReport};
use crate::core::registry::BeanRegistry;

/// 한 번의 최상위 `resolve` 호출 동안의 작업 상태
#[derive(Default)]
struct Resolution {
    /// 현재 생성 중인 키 (순환 감지용 호출 스택)
    path: Vec<String>,
    /// 이번 호출에서 새로 만들어져 커밋을 기다리는 싱글톤 (초기화 순서)
    staged: Vec<ManagedBean>,
}

impl Resolution {
    fn staged(&self, key: &str) -> Option<Bean> {
        self.staged
            .iter()
            .find(|managed| managed.key == key)
            .map(|managed| Arc::clone(&managed.bean))
    }
}

/// 의존성 주입 컨테이너
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use hello_core::core::{BeanDefinition, Container};
///
/// struct Repo;
/// struct Service {
///     repo: Arc<Repo>,
/// }
///
/// let container = Container::new();
/// container.register(BeanDefinition::singleton("repo", |_| Ok(Repo))).unwrap();
/// container
///     .register(
///         BeanDefinition::singleton("service", |deps| {
///             Ok(Service { repo: deps.get::<Repo>("repo")? })
///         })
///         .depends_on(["repo"]),
///     )
///     .unwrap();
///
/// let first = container.resolve_as::<Service>("service").unwrap();
/// let second = container.resolve_as::<Service>("service").unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// assert!(Arc::ptr_eq(&first.repo, &container.resolve_as::<Repo>("repo").unwrap()));
/// ```
pub struct Container {
    registry: BeanRegistry,
    singletons: RwLock<HashMap<String, Bean>>,
    lifecycle: LifecycleManager,
    creation_lock: Mutex<()>,
    closed: AtomicBool,
}

impl Container {
    pub fn new() -> Self {
        Self {
            registry: BeanRegistry::new(),
            singletons: RwLock::new(HashMap::new()),
            lifecycle: LifecycleManager::new(),
            creation_lock: Mutex::new(()),
            closed: AtomicBool::new(false),
        }
    }

    /// 빈 정의를 등록합니다
    ///
    /// # Errors
    ///
    /// * `DuplicateKey` - 같은 키가 이미 등록됨
    /// * `ContainerClosed` - 이미 종료된 컨테이너
    pub fn register(&self, definition: impl Into<BeanDefinition>) -> ContainerResult<()> {
        self.ensure_open()?;
        self.registry.register(definition.into())
    }

    pub fn definition(&self, key: &str) -> ContainerResult<Arc<BeanDefinition>> {
        self.registry.get_definition(key)
    }

    /// 키에 해당하는 빈을 반환합니다
    ///
    /// 싱글톤은 캐시된 인스턴스를 그대로, 트랜지언트는 매번 새 인스턴스를 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `UnknownKey` - 빈 또는 그 의존성이 등록되지 않음
    /// * `CyclicDependency` - 의존성 그래프에 순환이 있음
    /// * `Construction` - 팩토리가 실패하거나 패닉함 (재시도하지 않음)
    /// * `HookInvocation` - 초기화 훅 실패
    /// * `ContainerClosed` - 이미 종료된 컨테이너
    pub fn resolve(&self, key: &str) -> ContainerResult<Bean> {
        self.resolve_counting(key).map(|(bean, _)| bean)
    }

    /// [`resolve`](Self::resolve)의 타입 지정 버전 (`getBean(name, Class)`)
    ///
    /// 타입은 인스턴스를 만들기 전에 정의로 먼저 확인합니다.
    pub fn resolve_as<T: Any + Send + Sync>(&self, key: &str) -> ContainerResult<Arc<T>> {
        let mismatch = || ContainerError::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>(),
        };

        if BeanDefinition::type_id(&*self.registry.get_definition(key)?) != TypeId::of::<T>() {
            return Err(mismatch());
        }

        self.resolve(key)?.downcast::<T>().map_err(|_| mismatch())
    }

    /// 타입으로 유일한 빈을 찾습니다 (`getBean(Class)`)
    ///
    /// # Errors
    ///
    /// * `NoBeanOfType` - 해당 타입의 빈이 없음
    /// * `NoUniqueBean` - 해당 타입의 빈이 둘 이상
    pub fn resolve_by_type<T: Any + Send + Sync>(&self) -> ContainerResult<Arc<T>> {
        let candidates = self.registry.names_for_type(TypeId::of::<T>());

        match candidates.len() {
            0 => Err(ContainerError::NoBeanOfType(type_name::<T>())),
            1 => self.resolve_as::<T>(&candidates[0]),
            _ => Err(ContainerError::NoUniqueBean {
                type_name: type_name::<T>(),
                candidates,
            }),
        }
    }

    /// 아직 만들어지지 않은 모든 싱글톤을 등록 순서대로 생성합니다
    ///
    /// Spring `ApplicationContext`의 refresh 단계와 같은 역할이며,
    /// 새로 생성된 싱글톤 수를 반환합니다.
    pub fn pre_instantiate_singletons(&self) -> ContainerResult<usize> {
        let mut created = 0;

        for key in self.registry.names() {
            if self.registry.get_definition(&key)?.scope().is_singleton() {
                created += self.resolve_counting(&key)?.1;
            }
        }

        info!("🚀 Pre-instantiated {} singleton(s)", created);
        Ok(created)
    }

    pub fn contains_bean(&self, key: &str) -> bool {
        self.registry.contains(key)
    }

    pub fn is_singleton(&self, key: &str) -> ContainerResult<bool> {
        Ok(self.registry.get_definition(key)?.scope().is_singleton())
    }

    /// 등록 순서대로 모든 빈 이름
    pub fn bean_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// 현재 캐시된 싱글톤 수
    pub fn singleton_count(&self) -> usize {
        self.singletons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn lifecycle_state(&self, key: &str) -> Option<LifecycleState> {
        self.lifecycle.state(key)
    }

    /// 소멸 훅이 호출될 싱글톤들의 초기화 순서
    pub fn initialization_order(&self) -> Vec<String> {
        self.lifecycle.initialization_order()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// 컨테이너를 종료하고 싱글톤의 소멸 훅을 초기화 역순으로 호출합니다
    ///
    /// 훅 실패는 리포트에 모이고 나머지 정리는 계속됩니다.
    /// 두 번째 호출부터는 아무 일도 하지 않고 빈 리포트를 반환합니다.
    pub fn shutdown(&self) -> ShutdownReport {
        let _guard = self
            .creation_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.closed.swap(true, Ordering::SeqCst) {
            return ShutdownReport::default();
        }

        info!("🛑 Shutting down container ({} singletons)", self.singleton_count());
        let report = self.lifecycle.shutdown();
        self.singletons
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();

        if report.is_clean() {
            info!("✅ Container shut down: {} bean(s) destroyed", report.destroyed.len());
        } else {
            warn!(
                "⚠️ Container shut down with {} destroy hook failure(s)",
                report.failures.len()
            );
        }
        report
    }

    fn ensure_open(&self) -> ContainerResult<()> {
        if self.is_closed() {
            return Err(ContainerError::ContainerClosed);
        }
        Ok(())
    }

    /// 빈과 함께 이번 호출에서 새로 커밋된 싱글톤 수를 반환합니다
    fn resolve_counting(&self, key: &str) -> ContainerResult<(Bean, usize)> {
        self.ensure_open()?;

        if let Some(bean) = self.cached(key) {
            debug!("♻️ Singleton cache hit: '{}'", key);
            return Ok((bean, 0));
        }

        let _guard = self
            .creation_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.ensure_open()?;

        let mut resolution = Resolution::default();
        match self.resolve_in(key, &mut resolution) {
            Ok(bean) => {
                let committed = resolution.staged.len();
                self.commit(resolution.staged);
                Ok((bean, committed))
            }
            Err(e) => {
                self.discard(resolution.staged, &e);
                Err(e)
            }
        }
    }

    fn cached(&self, key: &str) -> Option<Bean> {
        self.singletons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn resolve_in(&self, key: &str, resolution: &mut Resolution) -> ContainerResult<Bean> {
        if resolution.path.iter().any(|entry| entry == key) {
            let mut path = resolution.path.clone();
            path.push(key.to_string());
            return Err(ContainerError::CyclicDependency { path });
        }

        let definition = self.registry.get_definition(key)?;
        let singleton = definition.scope().is_singleton();

        if singleton {
            if let Some(bean) = self.cached(key).or_else(|| resolution.staged(key)) {
                return Ok(bean);
            }
        }

        resolution.path.push(key.to_string());
        let created = self.create_bean(&definition, resolution);
        resolution.path.pop();
        let bean = created?;

        if singleton {
            resolution.staged.push(ManagedBean {
                key: key.to_string(),
                bean: Arc::clone(&bean),
                destroy_hook: definition.destroy_hook().cloned(),
            });
        }

        Ok(bean)
    }

    fn create_bean(
        &self,
        definition: &BeanDefinition,
        resolution: &mut Resolution,
    ) -> ContainerResult<Bean> {
        let key = definition.key();

        let mut resolved = Vec::with_capacity(definition.dependencies().len());
        for dependency in definition.dependencies() {
            let bean = self.resolve_in(dependency, resolution)?;
            resolved.push((dependency.clone(), bean));
        }
        let dependencies = Dependencies::new(key, resolved);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| definition.instantiate(&dependencies)));
        let bean = match outcome {
            Ok(Ok(bean)) => bean,
            Ok(Err(source)) => {
                return Err(ContainerError::Construction {
                    key: key.to_string(),
                    source,
                });
            }
            Err(payload) => {
                return Err(ContainerError::Construction {
                    key: key.to_string(),
                    source: panic_message(payload).into(),
                });
            }
        };

        let singleton = definition.scope().is_singleton();
        if singleton {
            self.lifecycle.transition(key, LifecycleState::Created);
            self.lifecycle.transition(key, LifecycleState::Injected);
        }
        info!(
            "🔧 Created bean '{}' ({}, {})",
            key,
            definition.type_name(),
            definition.scope().as_str()
        );

        if let Err(e) = self
            .lifecycle
            .initialize(key, &bean, definition.init_hook(), singleton)
        {
            if singleton {
                self.lifecycle.forget(key);
            }
            return Err(e);
        }

        Ok(bean)
    }

    fn commit(&self, staged: Vec<ManagedBean>) {
        if staged.is_empty() {
            return;
        }

        {
            let mut singletons = self
                .singletons
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            for managed in &staged {
                singletons.insert(managed.key.clone(), Arc::clone(&managed.bean));
            }
        }
        self.lifecycle.manage(staged);
    }

    fn discard(&self, staged: Vec<ManagedBean>, cause: &ContainerError) {
        if staged.is_empty() {
            return;
        }

        warn!(
            "⚠️ Discarding {} singleton(s) created before failure: {}",
            staged.len(),
            cause
        );
        let report = self.lifecycle.destroy_all(staged);

        // 캐시에 들어간 적 없는 빈은 상태도 남기지 않는다
        for key in &report.destroyed {
            self.lifecycle.forget(key);
        }
        for failure in &report.failures {
            warn!("⚠️ Destroy hook failed while discarding: {}", failure);
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        if !self.is_closed() {
            self.shutdown();
        }
    }
}
