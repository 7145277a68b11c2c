//! 터미널 출력 포맷팅 유틸리티
//!
//! 데모 실행 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 인스턴스 동일성 비교, 종료 요약 등을
//! 시각적으로 표현합니다.

use crate::core::ShutdownReport;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// Output:
/// ```text
/// → Step 1: Resolving memberService twice
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 서브 작업의 상태를 표시합니다
///
/// Output:
/// ```text
///    ├─ memberService1: 0x600000c04010
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 두 참조가 같은 인스턴스인지 주소와 함께 출력합니다
///
/// Output:
/// ```text
///    ├─ memberService1: 0x600000c04010
///    ├─ memberService2: 0x600000c04010
///    └─ same instance: ✓
/// ```
pub fn print_identity<T: ?Sized, U: ?Sized>(
    label: &str,
    first: *const T,
    second: *const U,
) -> bool {
    let same = std::ptr::addr_eq(first, second);

    print_sub_task(&format!("{}1", label), &format!("{:p}", first.cast::<()>()));
    print_sub_task(&format!("{}2", label), &format!("{:p}", second.cast::<()>()));
    println!("   └─ same instance: {}", if same { "✓" } else { "✗" });
    same
}

/// 컨테이너 종료 요약을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               🛑 CONTAINER SHUT DOWN              ║
/// ╚══════════════════════════════════════════════════╝
///    🧹 Destroyed (reverse order): networkClient → memberService → memberRepository
///    ❌ Hook failures: 0
/// ```
pub fn print_shutdown_summary(report: &ShutdownReport) {
    println!();
    print_boxed_title("🛑 CONTAINER SHUT DOWN");
    println!(
        "   🧹 Destroyed (reverse order): {}",
        report.destroyed.join(" → ")
    );
    println!("   ❌ Hook failures: {}", report.failures.len());
    for failure in &report.failures {
        println!("      - {}", failure);
    }
    println!();
}
