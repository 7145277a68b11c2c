//! # 회원 리포지토리
//!
//! 회원 저장소 추상화와 메모리 구현체를 제공합니다.
//! 서비스는 [`MemberRepository`] 트레이트에만 의존하고, 어떤 구현체를
//! 주입할지는 `AppConfig`의 빈 정의가 결정합니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use log::debug;

use crate::domain::entities::members::Member;

/// 회원 저장소
pub trait MemberRepository: Send + Sync {
    fn save(&self, member: Member);

    fn find_by_id(&self, member_id: u64) -> Option<Member>;
}

/// 프로세스 메모리에 회원을 보관하는 리포지토리
///
/// 싱글톤 빈으로 등록되어 여러 서비스가 같은 저장소를 공유하는 것을
/// 보여주기 위한 구현체입니다. 동시 접근을 위해 `RwLock`으로 보호됩니다.
#[derive(Default)]
pub struct MemoryMemberRepository {
    store: RwLock<HashMap<u64, Member>>,
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 회원 수
    pub fn member_count(&self) -> usize {
        self.store.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl MemberRepository for MemoryMemberRepository {
    fn save(&self, member: Member) {
        debug!("💾 Saving member {} ({})", member.id, member.name);
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(member.id, member);
    }

    fn find_by_id(&self, member_id: u64) -> Option<Member> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&member_id)
            .cloned()
    }
}
