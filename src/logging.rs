use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// stderr로 출력하는 로거를 초기화한다. 결과는 stdout으로만 나간다.
///
/// `RUST_LOG`가 있으면 그 설정을 따른다.
pub fn init(verbose: bool) {
    let default = if verbose {
        "aerosol_tube_penetration=debug"
    } else {
        "aerosol_tube_penetration=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // 테스트 등에서 두 번 호출되면 무시한다.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
