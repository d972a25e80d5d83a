use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PROBIOTIC_MENU_LOG";

/// Install the stderr tracing subscriber.
///
/// Filter comes from `PROBIOTIC_MENU_LOG` (e.g. `debug`,
/// `probiotic_menu_rs::planner=trace`), defaulting to `warn`. Report output
/// goes to stdout, so logs never interleave with it.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
