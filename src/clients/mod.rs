//! 외부 시스템 클라이언트
//!
//! 초기화/소멸 훅이 필요한 자원을 가진 빈들입니다.

pub mod network_client;

pub use network_client::*;
