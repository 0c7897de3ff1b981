use std::path::PathBuf;

use clap::Parser;
use tracepick_core::MatchMode;

use super::RawConfig;
use crate::settings::sources::ConfigLayers;
use crate::cli::CliArgs;
use crate::settings::SourceSpec;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"tracepick",
		"--source",
		"ffx",
		"--ffx",
		"/opt/ffx",
		"--query",
		"vk",
		"--match-mode",
		"pattern",
		"--theme",
		"light",
		"--title",
		"Targets",
		"--id-header",
		"Node",
		"--name-header",
		"Address",
		"--log-file",
		"/tmp/tracepick.log",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.source.kind = Some("demo".into());
	config.picker.query = Some("cube".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.source.kind.as_deref(), Some("ffx"));
	assert_eq!(config.source.ffx, cli.ffx);
	assert_eq!(config.picker.query, cli.query);
	assert_eq!(config.picker.match_mode.as_deref(), Some("pattern"));
	assert_eq!(config.picker.theme, cli.theme);
	assert_eq!(config.picker.title, cli.title);
	assert_eq!(config.picker.id_header, cli.id_header);
	assert_eq!(config.picker.name_header, cli.name_header);
	assert_eq!(config.logging.file, cli.log_file);
	assert_eq!(config.logging.level, cli.log_level);
}

#[test]
fn absent_values_resolve_to_defaults() {
	let cli = CliArgs::parse_from(["tracepick"]);
	let config = RawConfig::default().resolve(&cli, &ConfigLayers::default()).expect("resolves");

	assert_eq!(config.source, SourceSpec::Demo);
	assert_eq!(config.match_mode, MatchMode::Substring);
	assert!(config.initial_query.is_empty());
	assert!(config.theme.is_none());
	assert_eq!(config.labels.id_header, "Global ID");
	assert_eq!(config.labels.name_header, "Component Name");
	assert_eq!(config.log.level, "info");
}

#[test]
fn ffx_source_defaults_to_program_on_path() {
	let cli = CliArgs::parse_from(["tracepick", "--source", "ffx"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli, &ConfigLayers::default()).expect("resolves");
	assert_eq!(resolved.source, SourceSpec::Ffx(PathBuf::from("ffx")));
}

#[test]
fn json_source_requires_an_input_file() {
	let cli = CliArgs::parse_from(["tracepick", "--source", "json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli, &ConfigLayers::default()).unwrap_err().to_string();
	assert!(message.contains("source.input"), "{message}");
	assert!(message.contains("CLI flag `--source`"), "{message}");
}

#[test]
fn unknown_source_kind_names_its_origin() {
	let cli = CliArgs::parse_from(["tracepick"]);
	let mut config = RawConfig::default();
	config.source.kind = Some("usb".into());

	let message = config.resolve(&cli, &ConfigLayers::default()).unwrap_err().to_string();
	assert!(message.contains("source.kind"), "{message}");
	assert!(message.contains("value: usb"), "{message}");
}

#[test]
fn blank_labels_keep_their_defaults() {
	let cli = CliArgs::parse_from(["tracepick"]);
	let mut config = RawConfig::default();
	config.picker.id_header = Some("   ".into());
	config.picker.title = Some(" Targets ".into());

	let resolved = config.resolve(&cli, &ConfigLayers::default()).expect("resolves");
	assert_eq!(resolved.labels.id_header, "Global ID");
	assert_eq!(resolved.labels.title, "Targets");
}
