use tracing_subscriber::EnvFilter;

/// Filter directive environment variable
pub const LOG_ENV: &str = "CSP_LOG";

/// Install the stderr subscriber
///
/// `CSP_LOG` takes a full filter directive; otherwise `DEBUG` selects
/// debug output and everything else stays at `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(|k| std::env::var(k).ok())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(get_env: impl Fn(&str) -> Option<String>) -> &'static str {
    if get_env("DEBUG").is_some_and(|v| !v.is_empty()) {
        "debug"
    } else {
        "warn"
    }
}
