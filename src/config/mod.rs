//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반 설정을 제공합니다.
//!
//! # Modules
//!
//! - [`container_config`] - 실행 프로필, 즉시 초기화 여부, 데모 빈 설정

pub mod container_config;

pub use container_config::*;
