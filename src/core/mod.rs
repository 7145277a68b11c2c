//! # Core Container Module
//!
//! Spring Framework 핵심 컨테이너의 최소 동작(빈 등록, 싱글톤 스코프,
//! 생명주기 콜백)을 Rust로 직접 구현한 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`definition`] - 빈 설계도
//! - **BeanDefinition**: 키, 생성 타입, 의존성 목록, 스코프, 훅
//! - **BeanDefinitionBuilder**: 타입 안전한 명시적 등록 API
//! - **Dependencies**: 팩토리에 주입되는 해결된 의존성
//!
//! ### [`registry`] - 빈 정의 저장소
//! - 중복 키 거부, 미등록 키 조회 에러, 등록 순서 보존
//!
//! ### [`container`] - 의존성 주입 컨테이너
//! - **Container**: Spring의 `ApplicationContext` 역할
//! - **싱글톤 캐시**: 키당 인스턴스 하나, 동시 첫 조회에도 한 번만 생성
//! - **순환 감지**: 해결 경로 기반 `CyclicDependency`
//!
//! ### [`lifecycle`] - 생명주기 관리
//! - **Initializable / Disposable**: `@PostConstruct` / `@PreDestroy` 대체
//! - **LifecycleManager**: 초기화 순서 기록, 종료 시 역순 소멸
//!
//! ### [`errors`] - 통합 에러 처리
//! - **ContainerError**: `thiserror` 기반 컨테이너 에러 열거형
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 컨테이너 |
//! |--------|-------------|
//! | `@Configuration` + `@Bean` | `BeanDefinition::singleton(key, factory)` |
//! | `@Scope("prototype")` | `BeanDefinition::transient(key, factory)` |
//! | 생성자 `@Autowired` | `.depends_on([...])` + `Dependencies::get` |
//! | `ac.getBean("name", Type.class)` | `container.resolve_as::<Type>("name")` |
//! | `ac.getBean(Type.class)` | `container.resolve_by_type::<Type>()` |
//! | `@PostConstruct` | `.on_init(..)` / `Initializable` |
//! | `@PreDestroy` | `.on_destroy(..)` / `Disposable` |
//! | `ac.close()` | `container.shutdown()` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use hello_core::core::{BeanDefinition, Container};
//!
//! let container = Container::new();
//! container.register(
//!     BeanDefinition::singleton("networkClient", |_| Ok(NetworkClient::new(url)))
//!         .initializable()
//!         .disposable(),
//! )?;
//!
//! let client = container.resolve_as::<NetworkClient>("networkClient")?;
//! client.call("hello")?;
//!
//! let report = container.shutdown();
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! Cyclic dependency detected: memberService -> memberRepository -> memberService
//! ```
//! **해결**: 의존성 방향을 단방향으로 재설계
//!
//! ### 미등록 키
//! ```text
//! Unknown bean key: discountPolicy
//! ```
//! **해결**: `container.register()`로 정의를 먼저 등록

pub mod container;
pub mod definition;
pub mod errors;
pub mod lifecycle;
pub mod registry;

pub use container::Container;
pub use definition::{Bean, BeanDefinition, BeanDefinitionBuilder, Dependencies, Scope};
pub use errors::{BoxError, ContainerError, ContainerResult, HookPhase};
pub use lifecycle::{Disposable, Initializable, LifecycleManager, LifecycleState, ShutdownReport};
pub use registry::BeanRegistry;
