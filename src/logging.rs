use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `info` by default; with `verbose`, `debug` unless
/// `RUST_LOG` says otherwise. Calling it twice keeps the first subscriber.
pub fn init(verbose: bool) {
  let filter = if verbose {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
  } else {
    EnvFilter::new("info")
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .try_init()
    .ok();
}
