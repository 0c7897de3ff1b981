use clap::ValueEnum;

/// Entry sources selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SourceArg {
	/// The built-in sample components.
	Demo,
	/// A JSON array of `{id, name}` objects read from `--input`.
	Json,
	/// Devices reported by `ffx target list`.
	Ffx,
}

impl SourceArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			SourceArg::Demo => "demo",
			SourceArg::Json => "json",
			SourceArg::Ffx => "ffx",
		}
	}
}

/// How the query is compared against entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum MatchModeArg {
	Substring,
	Pattern,
	Fuzzy,
}

impl MatchModeArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			MatchModeArg::Substring => "substring",
			MatchModeArg::Pattern => "pattern",
			MatchModeArg::Fuzzy => "fuzzy",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
