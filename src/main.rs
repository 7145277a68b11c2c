//! Hello Core 데모 애플리케이션
//!
//! 컨테이너를 구성하고 싱글톤 동일성, 생명주기 훅 순서, 공유 상태 문제를
//! 차례로 보여준 뒤 컨테이너를 종료합니다.

use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use hello_core::app_config::{
    AppConfig, MEMBER_REPOSITORY, MEMBER_SERVICE, NETWORK_CLIENT, STATEFUL_SERVICE,
};
use hello_core::clients::network_client::NetworkClient;
use hello_core::config::ContainerConfig;
use hello_core::core::BoxError;
use hello_core::domain::entities::members::{Grade, Member};
use hello_core::repositories::members::MemoryMemberRepository;
use hello_core::services::members::{MemberService, MemberServiceImpl};
use hello_core::services::singleton::{SingletonService, StatefulService};
use hello_core::utils::display_terminal::{
    print_boxed_title, print_identity, print_shutdown_summary, print_step_start, print_sub_task,
};

fn main() -> Result<(), BoxError> {
    // 환경 설정 및 로깅 초기화
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = load_env_file(&profile);
    init_logging();

    info!("Current profile: {}", profile);
    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => error!("환경 파일 로드 실패: {}", e),
    }

    let config = ContainerConfig::from_env();
    info!("🚀 Hello Core 컨테이너 시작중... ({:?})", config);

    let container = AppConfig::application_context(&config)?;
    print_boxed_title("🔄 APPLICATION CONTEXT READY");
    for name in container.bean_names() {
        let scope = if container.is_singleton(&name)? { "singleton" } else { "transient" };
        print_sub_task(&name, scope);
    }

    // 1. 컨테이너 없이 만든 서비스는 매번 다른 인스턴스
    print_step_start(1, "Pure factory without container");
    let pure1 = AppConfig::member_service();
    let pure2 = AppConfig::member_service();
    print_identity(
        "memberService",
        std::ptr::from_ref(&pure1),
        std::ptr::from_ref(&pure2),
    );

    // 2. 컨테이너에서 꺼낸 싱글톤은 항상 같은 인스턴스
    print_step_start(2, "Container managed singleton");
    let service1 = container.resolve_as::<MemberServiceImpl>(MEMBER_SERVICE)?;
    let service2 = container.resolve_as::<MemberServiceImpl>(MEMBER_SERVICE)?;
    print_identity("memberService", Arc::as_ptr(&service1), Arc::as_ptr(&service2));
    print_identity(
        "memberRepository",
        Arc::as_ptr(service1.member_repository()),
        Arc::as_ptr(service2.member_repository()),
    );

    service1.join(Member::new(1, "memberA", Grade::Vip));
    let repository = container.resolve_as::<MemoryMemberRepository>(MEMBER_REPOSITORY)?;
    print_sub_task("stored members", &repository.member_count().to_string());
    match service2.find_member(1) {
        Some(member) => print_sub_task("findMember(1)", &format!("{} ({:?})", member.name, member.grade)),
        None => error!("❌ 가입한 회원을 찾을 수 없습니다"),
    }

    // 3. 전통적인 싱글톤 패턴
    print_step_start(3, "Classic singleton pattern");
    let singleton1 = SingletonService::instance();
    let singleton2 = SingletonService::instance();
    print_identity(
        "singletonService",
        std::ptr::from_ref(singleton1),
        std::ptr::from_ref(singleton2),
    );
    singleton1.logic();

    // 4. 공유 싱글톤에 상태를 두면 생기는 문제
    print_step_start(4, "Stateful singleton pitfall");
    let stateful_a = container.resolve_as::<StatefulService>(STATEFUL_SERVICE)?;
    let stateful_b = container.resolve_as::<StatefulService>(STATEFUL_SERVICE)?;
    stateful_a.order("userA", 10000);
    stateful_b.order("userB", 20000);
    print_sub_task("userA price", &stateful_a.price().to_string());

    // 5. 생명주기 콜백
    print_step_start(5, "Lifecycle callbacks");
    let client = container.resolve_as::<NetworkClient>(NETWORK_CLIENT)?;
    client.call("hello from main")?;
    print_sub_task("initialization order", &container.initialization_order().join(" → "));

    let report = container.shutdown();
    print_shutdown_summary(&report);
    for line in client.transcript() {
        print_sub_task("networkClient", &line);
    }

    info!("✅ 데모가 종료되었습니다");
    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드하고 로드한 파일 이름을 반환합니다.
/// 파일의 `RUST_LOG`가 적용되도록 로거 초기화보다 먼저 호출합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file(profile: &str) -> Result<&'static str, dotenv::Error> {
    match profile {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
