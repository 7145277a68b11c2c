//! Hello Core
//!
//! 의존성 주입 컨테이너의 기본 동작을 직접 구현해 보는 학습용 크레이트입니다.
//! 빈 등록, 싱글톤 스코프, 생명주기 콜백을 명시적인 Rust API로 제공합니다.
//!
//! # Features
//!
//! - **명시적 등록**: 어노테이션 스캔 없이 키, 팩토리, 의존성 목록으로 빈 선언
//! - **싱글톤/트랜지언트 스코프**: 키당 공유 인스턴스 또는 매번 새 인스턴스
//! - **생성자 주입**: 선언된 의존성을 깊이 우선으로 해결해 팩토리에 전달
//! - **순환 감지**: 같은 호출 스택에서 다시 요청되는 키를 즉시 에러로 보고
//! - **생명주기 훅**: 주입 직후 초기화, 종료 시 생성 역순으로 소멸
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    AppConfig    │ ← 빈 구성 선언
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Container    │ ← 해결, 싱글톤 캐시, 종료
//! └─────────────────┘
//!      │        │
//!      ▼        ▼
//! ┌────────┐ ┌───────────┐
//! │Registry│ │ Lifecycle │ ← 정의 저장 / 훅 호출
//! └────────┘ └───────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Services, Repos │ ← 컨테이너가 관리하는 빈
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use hello_core::app_config::{AppConfig, MEMBER_SERVICE};
//! use hello_core::config::ContainerConfig;
//! use hello_core::services::members::MemberServiceImpl;
//!
//! let container = AppConfig::application_context(&ContainerConfig::from_env())?;
//!
//! let service1 = container.resolve_as::<MemberServiceImpl>(MEMBER_SERVICE)?;
//! let service2 = container.resolve_as::<MemberServiceImpl>(MEMBER_SERVICE)?;
//! assert!(std::sync::Arc::ptr_eq(&service1, &service2));
//!
//! let report = container.shutdown();
//! ```

pub mod app_config;
pub mod clients;
pub mod config;
pub mod core;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
