use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{MatchModeArg, OutputFormat, SourceArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tracepick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "tracepick",
	version,
	long_version = long_version(),
	about = "Pick a trace target from a filtered table of components",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TRACEPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 's',
		long,
		value_enum,
		help = "Where the entries come from (default: demo)"
	)]
	pub(crate) source: Option<SourceArg>,
	#[arg(
		short = 'i',
		long,
		value_name = "FILE",
		help = "JSON entry file read by the json source"
	)]
	pub(crate) input: Option<PathBuf>,
	#[arg(
		long,
		value_name = "PATH",
		help = "ffx executable used by the ffx source (default: ffx)"
	)]
	pub(crate) ffx: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial query (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'm',
		long = "match-mode",
		value_enum,
		help = "How the query is matched against entries (default: substring)"
	)]
	pub(crate) match_mode: Option<MatchModeArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the table title (default: Select a component)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "id-header",
		value_name = "TEXT",
		help = "Header of the identifier column (default: Global ID)"
	)]
	pub(crate) id_header: Option<String>,
	#[arg(
		long = "name-header",
		value_name = "TEXT",
		help = "Header of the name column (default: Component Name)"
	)]
	pub(crate) name_header: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: tracepick.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long,
		help = "Print the entries matching the query instead of opening the picker"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
