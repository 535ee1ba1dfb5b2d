//! tracing 구독자 초기화.

use tracing_subscriber::EnvFilter;

/// 표준 오류로 로그를 내보내는 구독자를 설치한다.
///
/// `RUST_LOG`가 있으면 그것을, 없으면 `default_filter`(예: `gradegrid=info`)를 쓴다.
/// 이미 설치돼 있으면 아무것도 하지 않는다.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
