use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(out, "  Source: {}", config.source);
	let _ = writeln!(out, "  Match mode: {}", config.match_mode);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(
		out,
		"  Theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	let _ = writeln!(out, "  Title: {}", config.labels.title);
	let _ = writeln!(
		out,
		"  Columns: {} | {}",
		config.labels.id_header, config.labels.name_header
	);
	let _ = writeln!(
		out,
		"  Log file: {}",
		config
			.log
			.file
			.as_ref()
			.map_or_else(|| "(data directory default)".to_string(), |path| path.display().to_string())
	);
	let _ = writeln!(out, "  Log level: {}", config.log.level);
	out
}
