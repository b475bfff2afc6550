/// teardown step which may fail without stopping the ones after it
pub trait BestEffort {
	/// log a failure of `step` as a warning and move on
	fn or_warn(self, step: &str);
}

impl<T, E: std::fmt::Display> BestEffort for std::result::Result<T, E> {
	fn or_warn(self, step: &str) {
		if let Err(e) = self {
			tracing::warn!(error = %e, "{step} failed, continuing");
		}
	}
}

/// install a global `tracing` subscriber printing on stderr
///
/// returns false if a global subscriber was already set
#[cfg(feature = "logger")]
pub fn setup_tracing(debug: bool) -> bool {
	let level = if debug { tracing::Level::DEBUG } else { tracing::Level::INFO };
	let format = tracing_subscriber::fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_file(false)
		.with_line_number(false)
		.with_source_location(false);

	tracing_subscriber::fmt()
		.event_format(format)
		.with_max_level(level)
		.with_writer(std::sync::Mutex::new(std::io::stderr()))
		.try_init()
		.is_ok()
}
