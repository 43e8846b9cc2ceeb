use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MIS_LOG=makeitso=debug`
pub const LOG_ENV: &str = "MIS_LOG";

/// Install the stderr log subscriber. Filter comes from `MIS_LOG`,
/// defaulting to `warn`. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
