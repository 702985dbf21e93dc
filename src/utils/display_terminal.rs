//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 레지스트리 초기화와 서버 기동 과정을 터미널에 보기 좋게 출력합니다.

/// 박스 내부 폭 (문자 수)
const BOX_WIDTH: usize = 50;

/// 박스 제목의 세 줄을 만듭니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title_lines(title: &str) -> [String; 3] {
    let border = "═".repeat(BOX_WIDTH);
    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = BOX_WIDTH - 1),
        format!("╚{}╝", border),
    ]
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    for line in boxed_title_lines(title) {
        println!("{}", line);
    }
}

/// 진행 단계 시작을 표시합니다. `→ Step 1: Creating Repository instances`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리 항목 수와 함께 표시합니다.
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 하위 작업 상태를 트리 형태로 표시합니다. `   ├─ user_repository: ✓ Created`
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약을 출력합니다.
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// 이름 캐시 로드 결과를 출력합니다.
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

/// 서버가 노출하는 주요 엔드포인트 목록을 출력합니다.
pub fn print_endpoints(base_url: &str, endpoints: &[(&str, &str)]) {
    print_boxed_title("🌐 SOCIAL SERVICE ENDPOINTS");
    for (method, path) in endpoints {
        println!("   {:<7} {}{}", method, base_url, path);
    }
    println!();
}
