//! # 싱글톤과 공유 상태
//!
//! 싱글톤 빈은 모든 호출자가 같은 인스턴스를 공유합니다.
//! 요청별 값을 필드에 저장하면 다른 요청이 그 값을 덮어쓸 수 있습니다.
//!
//! ```text
//! 사용자 A: order("userA", 10000) ──▶ price = 10000
//! 사용자 B: order("userB", 20000) ──▶ price = 20000   (같은 인스턴스)
//! 사용자 A: price()               ──▶ 20000 ❌
//! ```
//!
//! [`StatefulService`]는 이 문제를 그대로 보여주고,
//! [`StatelessService`]는 값을 반환값으로 돌려주어 문제를 피합니다.

use std::sync::{Mutex, PoisonError};

use log::info;

/// 주문 금액을 필드에 보관하는 (잘못된) 서비스
#[derive(Default)]
pub struct StatefulService {
    price: Mutex<u32>,
}

impl StatefulService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&self, name: &str, price: u32) {
        info!("name = {} price = {}", name, price);
        *self.price.lock().unwrap_or_else(PoisonError::into_inner) = price;
    }

    /// 마지막으로 주문한 사용자의 금액 (호출자의 금액이 아닐 수 있음)
    pub fn price(&self) -> u32 {
        *self.price.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// 상태를 갖지 않는 주문 서비스
#[derive(Debug, Default)]
pub struct StatelessService;

impl StatelessService {
    pub fn order(&self, name: &str, price: u32) -> u32 {
        info!("name = {} price = {}", name, price);
        price
    }
}
