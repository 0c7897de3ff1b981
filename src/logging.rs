//! File logging.
//!
//! The picker owns the terminal, so log output goes to a file: either the one
//! configured explicitly or `tracepick.log` in the data directory. The
//! `TRACEPICK_LOG` environment variable takes an `EnvFilter` directive and
//! overrides the configured level.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::app_dirs;

/// Environment variable holding a filter directive such as `tracepick_core=trace`.
pub const LOG_ENV: &str = "TRACEPICK_LOG";
const LOG_FILE_NAME: &str = "tracepick.log";

/// Log file used when none is configured.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber writing to `file` (or the default log file).
///
/// Keep the returned guard alive until exit; dropping it flushes pending lines.
pub fn initialize(file: Option<&Path>, level: &str) -> Result<WorkerGuard> {
	let path = match file {
		Some(path) => path.to_path_buf(),
		None => default_log_file()?,
	};
	let (dir, file_name) = split_log_path(&path)?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(&dir, file_name);
	let (writer, guard) = tracing_appender::non_blocking(appender);
	let filter = build_filter(env::var(LOG_ENV).ok(), level)?;

	let file_layer = fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.with_filter(filter);

	tracing_subscriber::registry()
		.with(file_layer)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	tracing::debug!(path = %path.display(), "logging initialized");
	Ok(guard)
}

/// Prefer a directive from the environment, falling back to `level`.
fn build_filter(directive: Option<String>, level: &str) -> Result<EnvFilter> {
	if let Some(directive) = directive.filter(|value| !value.trim().is_empty()) {
		return EnvFilter::try_new(&directive)
			.with_context(|| format!("invalid {LOG_ENV} directive '{directive}'"));
	}
	EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
	let file_name = path
		.file_name()
		.ok_or_else(|| anyhow!("log path {} does not name a file", path.display()))?;
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
		_ => PathBuf::from("."),
	};
	Ok((dir, PathBuf::from(file_name)))
}
