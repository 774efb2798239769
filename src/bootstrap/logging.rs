use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; the fallback keeps our own crates at debug
/// and everything else at info.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sample_manager=debug,sm_core=debug,sm_infra=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
