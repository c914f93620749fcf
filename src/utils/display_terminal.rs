//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 레지스트리 구성 과정을 터미널에 보여주는 출력 함수들입니다.
//! 박스 형태의 제목, 진행 단계, 등록된 컴포넌트 목록을 표시합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 50칸 박스 안에서 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Registering repositories
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Repositories registered (3 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 등록된 컴포넌트 한 줄을 트리 형태로 출력합니다
///
/// ```text
///    ├─ postService [singleton] ← postRepository, commentRepository, userRepository
///    ├─ database [singleton]
/// ```
pub fn print_registration(name: &str, dependencies: &[String], singleton: bool) {
    println!("{}", format_registration(name, dependencies, singleton));
}

fn format_registration(name: &str, dependencies: &[String], singleton: bool) -> String {
    let scope = if singleton { "singleton" } else { "transient" };

    if dependencies.is_empty() {
        format!("   ├─ {} [{}]", name, scope)
    } else {
        format!("   ├─ {} [{}] ← {}", name, scope, dependencies.join(", "))
    }
}

/// 최종 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║         🎉 SERVICE REGISTRY INITIALIZED          ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repositories: 3
///    🔧 Services: 3
///    🚀 Total Components: 7
/// ```
///
/// `total`에는 데이터베이스 핸들처럼 리포지토리/서비스가 아닌 인스턴스도 포함됩니다.
pub fn print_final_summary(repos: usize, services: usize, total: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", total);
    println!();
}
