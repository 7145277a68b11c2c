//! # 회원 서비스
//!
//! 회원 가입과 조회를 리포지토리에 위임하는 얇은 서비스입니다.
//!
//! ```text
//! MemberServiceImpl ──(Arc<dyn MemberRepository>)──▶ MemoryMemberRepository
//! ```
//!
//! 리포지토리는 생성자로만 주입됩니다. 서비스가 구현체를 직접 만들지 않으므로
//! 컨테이너에서 받은 서비스와 리포지토리가 같은 인스턴스를 공유하는지
//! [`MemberServiceImpl::member_repository`]로 확인할 수 있습니다.

use std::sync::Arc;

use log::info;

use crate::domain::entities::members::Member;
use crate::repositories::members::MemberRepository;

pub trait MemberService: Send + Sync {
    fn join(&self, member: Member);

    fn find_member(&self, member_id: u64) -> Option<Member>;
}

pub struct MemberServiceImpl {
    member_repository: Arc<dyn MemberRepository>,
}

impl MemberServiceImpl {
    pub fn new(member_repository: Arc<dyn MemberRepository>) -> Self {
        Self { member_repository }
    }

    /// 주입된 리포지토리 (인스턴스 동일성 확인용)
    pub fn member_repository(&self) -> &Arc<dyn MemberRepository> {
        &self.member_repository
    }
}

impl MemberService for MemberServiceImpl {
    fn join(&self, member: Member) {
        info!("👤 Member joined: {} ({:?})", member.name, member.grade);
        self.member_repository.save(member);
    }

    fn find_member(&self, member_id: u64) -> Option<Member> {
        self.member_repository.find_by_id(member_id)
    }
}
