use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing entries from a source.
#[derive(Debug, Error)]
pub enum SourceError {
	/// Reading the backing file failed.
	#[error("failed to read entries from {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The backing file was not a JSON array of `{id, name}` objects.
	#[error("invalid entry list in {path}: {source}")]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// The discovery command could not be started.
	#[error("failed to run `{command}`: {source}")]
	Spawn {
		command: String,
		#[source]
		source: io::Error,
	},

	/// The discovery command ran but reported failure.
	#[error("`{command}` exited with {status}: {stderr}")]
	CommandFailed {
		command: String,
		status: String,
		stderr: String,
	},

	/// Two entries in one listing share an identifier.
	#[error("duplicate entry id '{id}' in listing")]
	DuplicateId { id: String },

	/// A line of target listing output did not have the expected shape.
	#[error("unexpected target listing line {line_number}: '{line}'")]
	MalformedTarget { line_number: usize, line: String },
}

/// Errors reported by a display surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// Terminal or other I/O failure.
	#[error("display surface I/O failed: {0}")]
	Io(#[from] io::Error),

	/// The surface can no longer deliver user input.
	#[error("display surface closed before the picker finished")]
	Closed,
}
