//! Visibility filters applied to picker entries.
//!
//! Every filter keeps exactly one piece of state, the current query, and
//! answers a pure `matches` predicate over entries. Filters never push
//! updates: whoever calls [`EntryFilter::set_query`] is responsible for
//! re-evaluating the entries afterwards.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use frizbee::{Config, match_indices};
use regex::Regex;

use crate::Entry;

/// A stateful predicate deciding which entries stay visible.
pub trait EntryFilter {
	/// Replace the current query. Any string is accepted.
	fn set_query(&mut self, text: &str);

	/// Return the query last passed to [`EntryFilter::set_query`].
	fn query(&self) -> &str;

	/// Decide whether `entry` is visible under the current query.
	fn matches(&self, entry: &Entry) -> bool;

	/// Byte ranges of `text` matched by the current query, used to highlight
	/// cells. Empty when nothing matches or the query is empty.
	fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
		let _ = text;
		Vec::new()
	}

	/// Describe why the query could not be applied as typed, if anything.
	fn problem(&self) -> Option<&str> {
		None
	}
}

impl<F: EntryFilter + ?Sized> EntryFilter for Box<F> {
	fn set_query(&mut self, text: &str) {
		(**self).set_query(text);
	}

	fn query(&self) -> &str {
		(**self).query()
	}

	fn matches(&self, entry: &Entry) -> bool {
		(**self).matches(entry)
	}

	fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
		(**self).match_ranges(text)
	}

	fn problem(&self) -> Option<&str> {
		(**self).problem()
	}
}

/// Literal, case-sensitive substring filter over an entry's id and name.
#[derive(Debug, Clone, Default)]
pub struct SubstringFilter {
	query: String,
}

impl SubstringFilter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

impl EntryFilter for SubstringFilter {
	fn set_query(&mut self, text: &str) {
		text.clone_into(&mut self.query);
	}

	fn query(&self) -> &str {
		&self.query
	}

	fn matches(&self, entry: &Entry) -> bool {
		if self.query.is_empty() {
			return true;
		}
		entry.id().contains(&self.query) || entry.name().contains(&self.query)
	}

	fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
		literal_ranges(&self.query, text)
	}
}

/// Regular-expression filter, searched anywhere in the id or the name.
///
/// A query that does not compile degrades to literal substring matching and
/// the compile error is reported through [`EntryFilter::problem`].
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
	query: String,
	pattern: Option<Regex>,
	error: Option<String>,
}

impl PatternFilter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

/// One-line summary of a regex compile error; the full message spans lines.
fn describe_pattern_error(err: &regex::Error) -> String {
	let message = err.to_string();
	let reason = message
		.lines()
		.map(str::trim)
		.rfind(|line| !line.is_empty())
		.map_or(message.as_str(), |line| line.trim_start_matches("error: "));
	format!("invalid pattern: {reason}")
}

impl EntryFilter for PatternFilter {
	fn set_query(&mut self, text: &str) {
		text.clone_into(&mut self.query);
		self.pattern = None;
		self.error = None;
		if text.is_empty() {
			return;
		}
		match Regex::new(text) {
			Ok(pattern) => self.pattern = Some(pattern),
			Err(err) => {
				tracing::debug!(query = text, error = %err, "pattern rejected; matching literally");
				self.error = Some(describe_pattern_error(&err));
			}
		}
	}

	fn query(&self) -> &str {
		&self.query
	}

	fn matches(&self, entry: &Entry) -> bool {
		if self.query.is_empty() {
			return true;
		}
		match &self.pattern {
			Some(pattern) => pattern.is_match(entry.id()) || pattern.is_match(entry.name()),
			None => entry.id().contains(&self.query) || entry.name().contains(&self.query),
		}
	}

	fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
		match &self.pattern {
			Some(pattern) => pattern
				.find_iter(text)
				.map(|found| found.range())
				.filter(|range| !range.is_empty())
				.collect(),
			None => literal_ranges(&self.query, text),
		}
	}

	fn problem(&self) -> Option<&str> {
		self.error.as_deref()
	}
}

/// Typo-tolerant fuzzy filter backed by `frizbee`.
///
/// The typo budget grows with the query length, so short queries stay strict
/// while longer ones survive a slip or a transposed pair of characters.
#[derive(Clone)]
pub struct FuzzyFilter {
	query: String,
	config: Config,
}

impl fmt::Debug for FuzzyFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FuzzyFilter")
			.field("query", &self.query)
			.field("max_typos", &self.config.max_typos)
			.finish_non_exhaustive()
	}
}

impl Default for FuzzyFilter {
	fn default() -> Self {
		Self {
			query: String::new(),
			config: config_for_query(""),
		}
	}
}

impl FuzzyFilter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	fn hit(&self, text: &str) -> Option<Vec<usize>> {
		if self.query.is_empty() || text.is_empty() {
			return None;
		}
		match_indices(&self.query, text, &self.config).map(|found| found.indices)
	}
}

/// Matching options for `query`; the typo budget never reaches the query length.
pub(crate) fn config_for_query(query: &str) -> Config {
	let length = query.chars().count();
	let budget: u16 = match length {
		0 | 1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		8..=12 => 3,
		_ => 4,
	};
	let ceiling = u16::try_from(length.saturating_sub(1)).unwrap_or(u16::MAX);
	Config {
		prefilter: false,
		max_typos: Some(budget.min(ceiling)),
		sort: false,
		..Config::default()
	}
}

impl EntryFilter for FuzzyFilter {
	fn set_query(&mut self, text: &str) {
		text.clone_into(&mut self.query);
		self.config = config_for_query(text);
	}

	fn query(&self) -> &str {
		&self.query
	}

	fn matches(&self, entry: &Entry) -> bool {
		if self.query.is_empty() {
			return true;
		}
		self.hit(entry.id()).is_some() || self.hit(entry.name()).is_some()
	}

	fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
		let Some(mut indices) = self.hit(text) else {
			return Vec::new();
		};
		indices.sort_unstable();
		indices.dedup();
		indices
			.into_iter()
			.filter(|&start| text.is_char_boundary(start))
			.filter_map(|start| {
				let width = text[start..].chars().next()?.len_utf8();
				Some(start..start + width)
			})
			.collect()
	}
}

/// How the query typed into the picker is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
	/// Literal, case-sensitive substring.
	#[default]
	Substring,
	/// Regular expression.
	Pattern,
	/// Typo-tolerant fuzzy matching.
	Fuzzy,
}

impl MatchMode {
	pub const ALL: [MatchMode; 3] = [MatchMode::Substring, MatchMode::Pattern, MatchMode::Fuzzy];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			MatchMode::Substring => "substring",
			MatchMode::Pattern => "pattern",
			MatchMode::Fuzzy => "fuzzy",
		}
	}
}

impl fmt::Display for MatchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a match mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match mode '{0}' (expected substring, pattern or fuzzy)")]
pub struct UnknownMatchMode(pub String);

impl FromStr for MatchMode {
	type Err = UnknownMatchMode;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"substring" | "literal" => Ok(MatchMode::Substring),
			"pattern" | "regex" => Ok(MatchMode::Pattern),
			"fuzzy" => Ok(MatchMode::Fuzzy),
			other => Err(UnknownMatchMode(other.to_string())),
		}
	}
}

/// Build a fresh filter for the given mode.
#[must_use]
pub fn filter_for_mode(mode: MatchMode) -> Box<dyn EntryFilter> {
	match mode {
		MatchMode::Substring => Box::new(SubstringFilter::new()),
		MatchMode::Pattern => Box::new(PatternFilter::new()),
		MatchMode::Fuzzy => Box::new(FuzzyFilter::new()),
	}
}

fn literal_ranges(query: &str, text: &str) -> Vec<Range<usize>> {
	if query.is_empty() {
		return Vec::new();
	}
	text.match_indices(query)
		.map(|(start, found)| start..start + found.len())
		.collect()
}
