use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::ConfigLayers;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_layers(cli, &ConfigLayers::from_cli(cli))
}

fn load_layers(cli: &CliArgs, layers: &ConfigLayers) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = layers
		.build()?
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli, layers)
}
