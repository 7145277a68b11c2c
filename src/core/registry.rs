//! # Bean Registry
//!
//! 빈 이름과 [`BeanDefinition`]의 대응을 보관하는 저장소입니다.
//! Spring의 `BeanDefinitionRegistry`에 해당하며, 인스턴스는 만들지 않고
//! 설계도만 관리합니다. 인스턴스 생성과 캐싱은 [`Container`](crate::core::container::Container)의 몫입니다.
//!
//! ## 동작 방식
//!
//! ```text
//! register("memberService", def) ──▶ ┌──────────────────────────────┐
//!                                    │ definitions: key → Arc<Def>  │
//! get_definition("memberService") ◀─ │ order: [등록 순서]            │
//!                                    └──────────────────────────────┘
//! ```
//!
//! - 같은 키를 두 번 등록하면 `DuplicateKey` (덮어쓰기 허용 안 함)
//! - 없는 키를 조회하면 `UnknownKey`
//! - 등록 순서는 `bean_names()`와 즉시 초기화 순서에 그대로 쓰입니다

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::core::definition::BeanDefinition;
use crate::core::errors::{ContainerError, ContainerResult};

#[derive(Default)]
struct RegistryInner {
    definitions: HashMap<String, Arc<BeanDefinition>>,
    order: Vec<String>,
}

/// Thread-safe 빈 정의 저장소
#[derive(Default)]
pub struct BeanRegistry {
    inner: RwLock<RegistryInner>,
}

impl BeanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 빈 정의를 등록합니다
    ///
    /// # Errors
    ///
    /// * `DuplicateKey` - 같은 키가 이미 등록되어 있음
    pub fn register(&self, definition: BeanDefinition) -> ContainerResult<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if inner.definitions.contains_key(definition.key()) {
            return Err(ContainerError::DuplicateKey(definition.key().to_string()));
        }

        debug!(
            "📦 Registering bean '{}' ({}, {}) deps={:?}",
            definition.key(),
            definition.type_name(),
            definition.scope().as_str(),
            definition.dependencies()
        );

        let key = definition.key().to_string();
        inner.order.push(key.clone());
        inner.definitions.insert(key, Arc::new(definition));
        Ok(())
    }

    /// 키로 빈 정의를 조회합니다
    ///
    /// # Errors
    ///
    /// * `UnknownKey` - 등록되지 않은 키
    pub fn get_definition(&self, key: &str) -> ContainerResult<Arc<BeanDefinition>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .definitions
            .get(key)
            .cloned()
            .ok_or_else(|| ContainerError::UnknownKey(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .definitions
            .contains_key(key)
    }

    /// 등록 순서대로 모든 빈 이름을 반환합니다
    pub fn names(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .clone()
    }

    /// 주어진 타입을 생성하는 빈들의 이름 (등록 순서)
    pub fn names_for_type(&self, type_id: TypeId) -> Vec<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .order
            .iter()
            .filter(|key| {
                inner
                    .definitions
                    .get(key.as_str())
                    .is_some_and(|definition| definition.type_id() == type_id)
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Repo;
    struct Service;

    fn repo_definition(key: &str) -> BeanDefinition {
        BeanDefinition::singleton(key, |_| Ok(Repo)).build()
    }

    #[test]
    fn test_register_and_get_definition() {
        let registry = BeanRegistry::new();
        registry.register(repo_definition("repo")).unwrap();

        let definition = registry.get_definition("repo").unwrap();
        assert_eq!(definition.key(), "repo");
        assert!(registry.contains("repo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let registry = BeanRegistry::new();
        registry.register(repo_definition("repo")).unwrap();

        let result = registry.register(repo_definition("repo"));

        assert!(matches!(result, Err(ContainerError::DuplicateKey(key)) if key == "repo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_key_is_reported() {
        let registry = BeanRegistry::new();

        assert!(matches!(
            registry.get_definition("ghost"),
            Err(ContainerError::UnknownKey(key)) if key == "ghost"
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_follow_registration_order() {
        let registry = BeanRegistry::new();
        registry.register(repo_definition("b")).unwrap();
        registry.register(repo_definition("a")).unwrap();
        registry
            .register(BeanDefinition::transient("c", |_| Ok(Service)).build())
            .unwrap();

        assert_eq!(registry.names(), ["b", "a", "c"]);
        assert_eq!(registry.names_for_type(TypeId::of::<Repo>()), ["b", "a"]);
        assert_eq!(registry.names_for_type(TypeId::of::<Service>()), ["c"]);
        assert!(registry.names_for_type(TypeId::of::<String>()).is_empty());
    }
}
