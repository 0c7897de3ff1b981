//! Producers of picker entries.
//!
//! A source hands out a fresh iterator every time [`EntrySource::entries`] is
//! called, so a listing can be reloaded without rebuilding the source.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::{Entry, SourceError};

/// Restartable producer of entries.
pub trait EntrySource {
	type Iter: Iterator<Item = Entry>;

	/// Start a new pass over the source's entries.
	fn entries(&self) -> Result<Self::Iter, SourceError>;
}

/// In-memory list of entries.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
	entries: Vec<Entry>,
}

impl StaticSource {
	#[must_use]
	pub fn new(entries: Vec<Entry>) -> Self {
		Self { entries }
	}

	/// The three Vulkan sample components shown when no discovery is wired up.
	#[must_use]
	pub fn demo() -> Self {
		Self::new(vec![
			Entry::new("234441", "vkproto"),
			Entry::new("254441", "vkcube"),
			Entry::new("274441", "vkother"),
		])
	}
}

impl EntrySource for StaticSource {
	type Iter = std::vec::IntoIter<Entry>;

	fn entries(&self) -> Result<Self::Iter, SourceError> {
		Ok(self.entries.clone().into_iter())
	}
}

/// Entries stored as a JSON array of `{"id": ..., "name": ...}` objects.
///
/// The file is re-read on every pass.
#[derive(Debug, Clone)]
pub struct JsonSource {
	path: PathBuf,
}

impl JsonSource {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl EntrySource for JsonSource {
	type Iter = std::vec::IntoIter<Entry>;

	fn entries(&self) -> Result<Self::Iter, SourceError> {
		let raw = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
			path: self.path.clone(),
			source,
		})?;
		let entries: Vec<Entry> =
			serde_json::from_str(&raw).map_err(|source| SourceError::Json {
				path: self.path.clone(),
				source,
			})?;
		ensure_unique_ids(&entries)?;
		tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
		Ok(entries.into_iter())
	}
}

/// Run one pass over `source` and collect the entries.
///
/// Fails with [`SourceError::DuplicateId`] when two entries share an id.
pub fn collect_entries<S: EntrySource + ?Sized>(source: &S) -> Result<Vec<Entry>, SourceError> {
	let entries: Vec<Entry> = source.entries()?.collect();
	ensure_unique_ids(&entries)?;
	Ok(entries)
}

fn ensure_unique_ids(entries: &[Entry]) -> Result<(), SourceError> {
	let mut seen = HashSet::with_capacity(entries.len());
	match entries.iter().find(|entry| !seen.insert(entry.id())) {
		Some(entry) => Err(SourceError::DuplicateId {
			id: entry.id().to_string(),
		}),
		None => Ok(()),
	}
}
