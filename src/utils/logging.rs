//! Logging utilities for the application
//!
//! Installs a global `tracing` subscriber writing compact lines. `RUST_LOG`
//! takes precedence; otherwise the level given on the command line applies.
//! Records emitted through the `log` facade (error constructors) reach the
//! same subscriber.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

type SetupError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Builds the level filter from `RUST_LOG`, falling back to `default_level`
pub fn build_filter(default_level: &str) -> Result<EnvFilter, SetupError> {
	match EnvFilter::try_from_default_env() {
		Ok(filter) => Ok(filter),
		Err(_) => Ok(EnvFilter::try_new(default_level)?),
	}
}

/// Setup logging to stdout
pub fn setup_logging(default_level: &str) -> Result<(), SetupError> {
	setup_logging_with_writer(std::io::stdout, default_level)
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(writer: W, default_level: &str) -> Result<(), SetupError>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = build_filter(default_level)?;

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(false)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
