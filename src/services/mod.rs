//! 비즈니스 로직 계층
//!
//! - [`members`] - 회원 가입/조회 서비스
//! - [`singleton`] - 싱글톤 패턴과 공유 상태 문제를 보여주는 서비스들

pub mod members;
pub mod singleton;
