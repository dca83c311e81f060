use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter. `RUST_LOG` is read when it
/// is unset.
pub const LOG_ENV: &str = "HERALD_LOG";

/// Installs a stderr subscriber. Returns false if one was already installed.
pub fn init_tracing(verbose: bool) -> bool {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("herald_notify=trace,herald_runtime=debug,info")
			} else {
				EnvFilter::new("warn")
			}
		});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.try_init()
		.is_ok()
}
