//! Logger setup shared by the binaries

/// Install `env_logger`; `RUST_LOG` wins over the `verbose` default.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
