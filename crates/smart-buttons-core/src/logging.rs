/// Default filter used by [`init`].
pub const DEFAULT_FILTER: &str = "info,smart_buttons=debug,smart_buttons_dom=info";

/// Install a `tracing` fmt subscriber with the default filter.
///
/// `RUST_LOG` overrides the default when set.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a `tracing` fmt subscriber with an explicit filter directive.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_filter(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}
