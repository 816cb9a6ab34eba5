//! tracing 구독자 초기화.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG`가 있으면 그것을, 없으면 `level`을 필터로 쓴다.
///
/// 출력은 stderr로 보내 `--json` 결과와 섞이지 않게 한다.
pub fn init(level: &str) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
}
