use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber
///
/// `RUST_LOG` overrides the default of `info` with wgpu internals at `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wgpu_core=warn,wgpu_hal=warn,naga=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}
