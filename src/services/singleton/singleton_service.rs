//! # 전통적인 싱글톤 패턴
//!
//! 컨테이너 없이 타입 스스로 전역 인스턴스를 하나만 만들도록 강제하는 방식입니다.
//! `once_cell::sync::Lazy`로 첫 접근 시 한 번만 초기화되고, 생성자는 모듈 밖으로
//! 공개되지 않아 다른 인스턴스를 만들 수 없습니다.
//!
//! 이 방식은 동작하지만 전역 가변 상태를 숨기고, 테스트마다 새 인스턴스로
//! 격리할 수 없으며, 구현체가 구체 타입에 고정됩니다. 일반적인 빈은
//! [`Container`](crate::core::Container)에 싱글톤 스코프로 등록해서 같은 보장을 얻습니다.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use once_cell::sync::Lazy;

static INSTANCE: Lazy<SingletonService> = Lazy::new(|| {
    info!("🔒 SingletonService instance created");
    SingletonService {
        calls: AtomicUsize::new(0),
    }
});

pub struct SingletonService {
    calls: AtomicUsize,
}

impl SingletonService {
    /// 프로세스 전체에서 유일한 인스턴스
    pub fn instance() -> &'static SingletonService {
        &INSTANCE
    }

    pub fn logic(&self) {
        let calls = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        info!("싱글톤 객체 로직 호출 (누적 {}회)", calls);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
