//! # Application Configuration
//!
//! 애플리케이션의 빈 구성을 한곳에 선언합니다.
//! 어노테이션 스캔으로 구성 요소를 찾는 대신, 어떤 키가 어떤 팩토리와
//! 의존성으로 만들어지는지를 코드로 나열해 연결 관계를 그대로 읽을 수 있게 합니다.
//!
//! | 빈 키 | 타입 | 스코프 | 의존성 | 훅 |
//! |-------|------|--------|--------|----|
//! | `memberRepository` | `MemoryMemberRepository` | singleton | - | - |
//! | `memberService` | `MemberServiceImpl` | singleton | `memberRepository` | - |
//! | `statefulService` | `StatefulService` | singleton | - | - |
//! | `statelessService` | `StatelessService` | transient | - | - |
//! | `networkClient` | `NetworkClient` | singleton | - | init / destroy |
//!
//! [`AppConfig::member_service`] 같은 팩토리 메서드는 컨테이너 없이 호출할 때마다
//! 새 객체 그래프를 만듭니다. 같은 팩토리를 컨테이너에 등록하면 싱글톤이 됩니다.

use std::sync::Arc;

use log::info;

use crate::clients::network_client::NetworkClient;
use crate::config::container_config::ContainerConfig;
use crate::core::{BeanDefinition, Container, ContainerResult};
use crate::repositories::members::MemoryMemberRepository;
use crate::services::members::MemberServiceImpl;
use crate::services::singleton::{StatefulService, StatelessService};

pub const MEMBER_REPOSITORY: &str = "memberRepository";
pub const MEMBER_SERVICE: &str = "memberService";
pub const STATEFUL_SERVICE: &str = "statefulService";
pub const STATELESS_SERVICE: &str = "statelessService";
pub const NETWORK_CLIENT: &str = "networkClient";

pub struct AppConfig;

impl AppConfig {
    /// 컨테이너 없이 호출할 때마다 새 리포지토리를 만듭니다
    pub fn member_repository() -> MemoryMemberRepository {
        MemoryMemberRepository::new()
    }

    /// 컨테이너 없이 호출할 때마다 새 서비스와 새 리포지토리를 만듭니다
    pub fn member_service() -> MemberServiceImpl {
        MemberServiceImpl::new(Arc::new(Self::member_repository()))
    }

    /// 모든 데모 빈 정의를 컨테이너에 등록합니다
    pub fn register_beans(container: &Container, config: &ContainerConfig) -> ContainerResult<()> {
        container.register(BeanDefinition::singleton(MEMBER_REPOSITORY, |_| {
            Ok(Self::member_repository())
        }))?;

        container.register(
            BeanDefinition::singleton(MEMBER_SERVICE, |deps| {
                let repository = deps.get::<MemoryMemberRepository>(MEMBER_REPOSITORY)?;
                Ok(MemberServiceImpl::new(repository))
            })
            .depends_on([MEMBER_REPOSITORY]),
        )?;

        container.register(BeanDefinition::singleton(STATEFUL_SERVICE, |_| {
            Ok(StatefulService::new())
        }))?;

        container.register(BeanDefinition::transient(STATELESS_SERVICE, |_| {
            Ok(StatelessService)
        }))?;

        let url = config.network_client_url.clone();
        container.register(
            BeanDefinition::singleton(NETWORK_CLIENT, move |_| Ok(NetworkClient::new(url.clone())))
                .initializable()
                .disposable(),
        )?;

        Ok(())
    }

    /// 빈을 등록한 컨테이너를 만들고, 설정에 따라 싱글톤을 미리 생성합니다
    pub fn application_context(config: &ContainerConfig) -> ContainerResult<Container> {
        let container = Container::new();
        Self::register_beans(&container, config)?;
        info!(
            "📋 Registered {} bean definition(s) (profile: {})",
            container.bean_names().len(),
            config.profile.as_str()
        );

        if config.eager_init {
            container.pre_instantiate_singletons()?;
        }

        Ok(container)
    }
}
