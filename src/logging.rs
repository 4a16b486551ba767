use std::env;
use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_filter(rust_log: Option<String>, verbosity: u8) -> EnvFilter {
    let base = rust_log.map(EnvFilter::new).unwrap_or_else(|| {
        let level = level_for(verbosity).as_str().to_lowercase();
        EnvFilter::new(format!("nutrition_tracker_rs={}", level))
    });

    base.add_directive("reqwest=warn".parse().unwrap_or_else(|_| Level::WARN.into()))
        .add_directive("hyper=warn".parse().unwrap_or_else(|_| Level::WARN.into()))
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the verbosity flag when set. Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let filter = build_filter(env::var("RUST_LOG").ok(), verbosity);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
