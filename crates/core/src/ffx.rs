//! Target discovery through the Fuchsia `ffx` tool.
//!
//! `ffx target list -f s` prints one `<address> <nodename>` pair per line, or
//! `No devices found.` when nothing is reachable.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::Command;

use crate::source::EntrySource;
use crate::{Entry, SourceError};

const NO_DEVICES: &str = "No devices found.";

/// One device reported by `ffx target list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfxTarget {
	pub address: String,
	pub nodename: String,
}

impl From<FfxTarget> for Entry {
	/// Addresses repeat across devices, so the nodename is the identifier.
	fn from(target: FfxTarget) -> Self {
		Entry::new(target.nodename, target.address)
	}
}

/// Parse the simple-format output of `ffx target list`.
///
/// A nodename reported more than once keeps only its first line.
pub fn parse_targets(stdout: &str) -> Result<Vec<FfxTarget>, SourceError> {
	let mut targets = Vec::new();
	let mut seen = HashSet::new();
	for (index, line) in stdout.lines().enumerate() {
		let line = line.trim();
		if line.is_empty() || line == NO_DEVICES {
			continue;
		}
		let fields: Vec<&str> = line.split_whitespace().collect();
		let [address, nodename] = fields.as_slice() else {
			return Err(SourceError::MalformedTarget {
				line_number: index + 1,
				line: line.to_string(),
			});
		};
		if !seen.insert(*nodename) {
			tracing::debug!(nodename, address, "skipping repeated target");
			continue;
		}
		targets.push(FfxTarget {
			address: (*address).to_string(),
			nodename: (*nodename).to_string(),
		});
	}
	Ok(targets)
}

/// Entry source that shells out to `ffx` on every pass.
#[derive(Debug, Clone)]
pub struct FfxTargetSource {
	program: PathBuf,
}

impl Default for FfxTargetSource {
	fn default() -> Self {
		Self::new("ffx")
	}
}

impl FfxTargetSource {
	#[must_use]
	pub fn new(program: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
		}
	}

	fn command_line(&self) -> String {
		format!("{} target list -f s", self.program.display())
	}
}

impl EntrySource for FfxTargetSource {
	type Iter = std::vec::IntoIter<Entry>;

	fn entries(&self) -> Result<Self::Iter, SourceError> {
		let output = Command::new(&self.program)
			.args(["target", "list", "-f", "s"])
			.output()
			.map_err(|source| SourceError::Spawn {
				command: self.command_line(),
				source,
			})?;

		if !output.status.success() {
			return Err(SourceError::CommandFailed {
				command: self.command_line(),
				status: output.status.to_string(),
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		let stdout = String::from_utf8_lossy(&output.stdout);
		let targets = parse_targets(&stdout)?;
		tracing::info!(count = targets.len(), "discovered ffx targets");
		let entries: Vec<Entry> = targets.into_iter().map(Entry::from).collect();
		Ok(entries.into_iter())
	}
}
