//! 도메인 계층
//!
//! 컨테이너가 관리하는 데모 빈들이 다루는 순수 데이터 타입을 정의합니다.

pub mod entities;

pub use entities::*;
