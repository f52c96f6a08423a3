use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with the report on stdout.
/// 0 = warn, 1 = info, 2+ = debug; `RUST_LOG` wins unless `quiet` is set.
pub fn init_logging(verbose_level: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let level = match verbose_level {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
