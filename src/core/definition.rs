//! # Bean Definition
//!
//! 컨테이너에 등록되는 빈의 "설계도"를 정의합니다.
//! Spring의 `BeanDefinition`처럼 빈 이름, 생성할 타입, 생성자 의존성 목록,
//! 스코프, 생명주기 훅을 담고 있으며, 등록 이후에는 변경할 수 없습니다.
//!
//! 어노테이션 스캔 대신 [`BeanDefinitionBuilder`]로 모든 연결을 명시적으로
//! 선언합니다. 빌더는 빈 타입 `T`를 타입 파라미터로 들고 있기 때문에
//! 팩토리와 훅이 같은 타입을 다룬다는 사실이 컴파일 타임에 보장됩니다.
//!
//! ```rust,ignore
//! use hello_core::core::{BeanDefinition, Container};
//!
//! let container = Container::new();
//! container.register(
//!     BeanDefinition::singleton("memberRepository", |_| Ok(MemoryMemberRepository::new())),
//! )?;
//! container.register(
//!     BeanDefinition::singleton("memberService", |deps| {
//!         let repository = deps.get::<MemoryMemberRepository>("memberRepository")?;
//!         Ok(MemberServiceImpl::new(repository))
//!     })
//!     .depends_on(["memberRepository"]),
//! )?;
//! ```

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::core::errors::{BoxError, ContainerError, ContainerResult};
use crate::core::lifecycle::{Disposable, Initializable};

/// 컨테이너가 관리하는 타입 소거된 빈 인스턴스
pub type Bean = Arc<dyn Any + Send + Sync>;

pub(crate) type Factory = Arc<dyn Fn(&Dependencies) -> Result<Bean, BoxError> + Send + Sync>;
pub(crate) type Hook = Arc<dyn Fn(&Bean) -> Result<(), BoxError> + Send + Sync>;

/// 빈 스코프
///
/// 하나의 키가 공유 인스턴스 하나에 대응하는지, 요청마다 새 인스턴스에
/// 대응하는지를 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// 컨테이너 생애 동안 인스턴스 하나를 공유 (Spring 기본값)
    #[default]
    Singleton,
    /// 조회할 때마다 새 인스턴스 (Spring의 `prototype`)
    Transient,
}

impl Scope {
    pub fn is_singleton(&self) -> bool {
        matches!(self, Scope::Singleton)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Singleton => "singleton",
            Scope::Transient => "transient",
        }
    }
}

/// 등록된 빈의 불변 설계도
///
/// [`BeanDefinition::singleton`] 또는 [`BeanDefinition::transient`]로 만든
/// 빌더를 변환해서 얻습니다. 한 번 만들어지면 필드를 바꿀 수 있는 API가 없습니다.
#[derive(Clone)]
pub struct BeanDefinition {
    key: String,
    type_id: TypeId,
    type_name: &'static str,
    dependencies: Vec<String>,
    scope: Scope,
    factory: Factory,
    init_hook: Option<Hook>,
    destroy_hook: Option<Hook>,
}

impl BeanDefinition {
    /// 싱글톤 스코프 빈의 빌더를 시작합니다
    pub fn singleton<T, F>(key: impl Into<String>, factory: F) -> BeanDefinitionBuilder<T>
    where
        T: Any + Send + Sync,
        F: Fn(&Dependencies) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        BeanDefinitionBuilder::new(key.into(), Scope::Singleton, factory)
    }

    /// 트랜지언트 스코프 빈의 빌더를 시작합니다
    pub fn transient<T, F>(key: impl Into<String>, factory: F) -> BeanDefinitionBuilder<T>
    where
        T: Any + Send + Sync,
        F: Fn(&Dependencies) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        BeanDefinitionBuilder::new(key.into(), Scope::Transient, factory)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// 생성자 인자 순서대로 나열된 의존성 키
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn has_init_hook(&self) -> bool {
        self.init_hook.is_some()
    }

    pub fn has_destroy_hook(&self) -> bool {
        self.destroy_hook.is_some()
    }

    pub(crate) fn instantiate(&self, dependencies: &Dependencies) -> Result<Bean, BoxError> {
        (self.factory)(dependencies)
    }

    pub(crate) fn init_hook(&self) -> Option<&Hook> {
        self.init_hook.as_ref()
    }

    pub(crate) fn destroy_hook(&self) -> Option<&Hook> {
        self.destroy_hook.as_ref()
    }
}

impl fmt::Debug for BeanDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDefinition")
            .field("key", &self.key)
            .field("type_name", &self.type_name)
            .field("dependencies", &self.dependencies)
            .field("scope", &self.scope)
            .field("init_hook", &self.init_hook.is_some())
            .field("destroy_hook", &self.destroy_hook.is_some())
            .finish()
    }
}

/// 타입 `T`의 빈 정의를 조립하는 빌더
///
/// 컨테이너의 `register`는 `impl Into<BeanDefinition>`을 받으므로
/// 빌더를 그대로 넘기면 됩니다.
pub struct BeanDefinitionBuilder<T> {
    definition: BeanDefinition,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> BeanDefinitionBuilder<T> {
    fn new<F>(key: String, scope: Scope, factory: F) -> Self
    where
        F: Fn(&Dependencies) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(move |dependencies: &Dependencies| {
            factory(dependencies).map(|instance| Arc::new(instance) as Bean)
        });

        Self {
            definition: BeanDefinition {
                key,
                type_id: TypeId::of::<T>(),
                type_name: type_name::<T>(),
                dependencies: Vec::new(),
                scope,
                factory,
                init_hook: None,
                destroy_hook: None,
            },
            _marker: PhantomData,
        }
    }

    /// 생성자 의존성을 선언합니다 (호출 순서가 곧 주입 순서)
    pub fn depends_on<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.definition
            .dependencies
            .extend(keys.into_iter().map(Into::into));
        self
    }

    /// 의존성 주입 직후 한 번 호출되는 초기화 훅 (`@PostConstruct`)
    pub fn on_init<F>(mut self, hook: F) -> Self
    where
        F: Fn(&T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.definition.init_hook = Some(erase_hook(&self.definition.key, hook));
        self
    }

    /// 컨테이너 종료 시 호출되는 소멸 훅 (`@PreDestroy`)
    pub fn on_destroy<F>(mut self, hook: F) -> Self
    where
        F: Fn(&T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.definition.destroy_hook = Some(erase_hook(&self.definition.key, hook));
        self
    }

    pub fn build(self) -> BeanDefinition {
        self.definition
    }
}

impl<T: Initializable + Any + Send + Sync> BeanDefinitionBuilder<T> {
    /// [`Initializable::initialize`]를 초기화 훅으로 사용합니다
    pub fn initializable(self) -> Self {
        self.on_init(T::initialize)
    }
}

impl<T: Disposable + Any + Send + Sync> BeanDefinitionBuilder<T> {
    /// [`Disposable::destroy`]를 소멸 훅으로 사용합니다
    pub fn disposable(self) -> Self {
        self.on_destroy(T::destroy)
    }
}

impl<T: Any + Send + Sync> From<BeanDefinitionBuilder<T>> for BeanDefinition {
    fn from(builder: BeanDefinitionBuilder<T>) -> Self {
        builder.build()
    }
}

fn erase_hook<T, F>(key: &str, hook: F) -> Hook
where
    T: Any + Send + Sync,
    F: Fn(&T) -> Result<(), BoxError> + Send + Sync + 'static,
{
    let key = key.to_string();
    Arc::new(move |bean: &Bean| -> Result<(), BoxError> {
        let instance = (**bean)
            .downcast_ref::<T>()
            .ok_or_else(|| ContainerError::TypeMismatch {
                key: key.clone(),
                expected: type_name::<T>(),
            })?;
        hook(instance)
    })
}

/// 팩토리에 전달되는 이미 해결된 생성자 의존성
///
/// 선언된 순서를 유지하며, 선언하지 않은 키는 조회할 수 없습니다.
pub struct Dependencies {
    owner: String,
    resolved: Vec<(String, Bean)>,
}

impl Dependencies {
    pub(crate) fn new(owner: &str, resolved: Vec<(String, Bean)>) -> Self {
        Self {
            owner: owner.to_string(),
            resolved,
        }
    }

    /// 선언된 의존성 `key`를 타입 `D`로 꺼냅니다
    ///
    /// # Errors
    ///
    /// * `UndeclaredDependency` - `depends_on`에 없는 키
    /// * `TypeMismatch` - 해결된 빈이 `D` 타입이 아님
    pub fn get<D: Any + Send + Sync>(&self, key: &str) -> ContainerResult<Arc<D>> {
        let bean = self
            .resolved
            .iter()
            .find(|(dependency, _)| dependency == key)
            .map(|(_, bean)| Arc::clone(bean))
            .ok_or_else(|| ContainerError::UndeclaredDependency {
                bean: self.owner.clone(),
                dependency: key.to_string(),
            })?;

        bean.downcast::<D>().map_err(|_| ContainerError::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<D>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Engine {
        cylinders: u32,
    }

    struct Car {
        engine: Arc<Engine>,
    }

    #[test]
    fn test_builder_keeps_dependency_order() {
        let definition: BeanDefinition = BeanDefinition::singleton("car", |deps| {
            Ok(Car {
                engine: deps.get::<Engine>("engine")?,
            })
        })
        .depends_on(["engine", "wheels"])
        .depends_on(["radio"])
        .into();

        assert_eq!(definition.key(), "car");
        assert_eq!(definition.scope(), Scope::Singleton);
        assert_eq!(definition.dependencies(), ["engine", "wheels", "radio"]);
        assert_eq!(definition.type_id(), TypeId::of::<Car>());
        assert!(definition.type_name().ends_with("Car"));
        assert!(!definition.has_init_hook());
        assert!(!definition.has_destroy_hook());
    }

    #[test]
    fn test_factory_receives_resolved_dependencies() {
        let definition = BeanDefinition::transient("car", |deps| {
            Ok(Car {
                engine: deps.get::<Engine>("engine")?,
            })
        })
        .depends_on(["engine"])
        .build();

        let engine: Bean = Arc::new(Engine { cylinders: 4 });
        let deps = Dependencies::new("car", vec![("engine".to_string(), engine)]);

        let bean = definition.instantiate(&deps).unwrap();
        let car = bean.downcast::<Car>().unwrap();
        assert_eq!(car.engine.cylinders, 4);
    }

    #[test]
    fn test_dependencies_reject_undeclared_key() {
        let deps = Dependencies::new("car", Vec::new());

        match deps.get::<Engine>("engine") {
            Err(ContainerError::UndeclaredDependency { bean, dependency }) => {
                assert_eq!(bean, "car");
                assert_eq!(dependency, "engine");
            }
            other => panic!("Expected UndeclaredDependency, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_dependencies_reject_wrong_type() {
        let engine: Bean = Arc::new(Engine { cylinders: 6 });
        let deps = Dependencies::new("car", vec![("engine".to_string(), engine)]);

        assert!(matches!(
            deps.get::<Car>("engine"),
            Err(ContainerError::TypeMismatch { .. })
        ));
        assert_eq!(deps.get::<Engine>("engine").unwrap().cylinders, 6);
    }

    #[test]
    fn test_hooks_receive_typed_instance() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let definition = BeanDefinition::singleton("engine", |_| Ok(Engine { cylinders: 8 }))
            .on_init(move |engine: &Engine| {
                counter.fetch_add(engine.cylinders as usize, Ordering::SeqCst);
                Ok(())
            })
            .build();

        let bean: Bean = Arc::new(Engine { cylinders: 8 });
        let hook = definition.init_hook().expect("init hook registered");
        hook(&bean).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn test_hook_rejects_foreign_bean() {
        let definition = BeanDefinition::singleton("engine", |_| Ok(Engine { cylinders: 2 }))
            .on_destroy(|_: &Engine| Ok(()))
            .build();

        let foreign: Bean = Arc::new(String::from("not an engine"));
        let hook = definition.destroy_hook().expect("destroy hook registered");

        assert!(hook(&foreign).is_err());
    }

    #[test]
    fn test_default_scope_is_singleton() {
        assert_eq!(Scope::default(), Scope::Singleton);
        assert!(Scope::Singleton.is_singleton());
        assert!(!Scope::Transient.is_singleton());
        assert_eq!(Scope::Transient.as_str(), "transient");
    }
}
