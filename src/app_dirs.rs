//! Resolve configuration and data directories for `tracepick`.
//!
//! Environment overrides win; otherwise the platform locations provided by the
//! `directories` crate are used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tracepick";
const APPLICATION: &str = "tracepick";

const CONFIG_DIR_ENV: &str = "TRACEPICK_CONFIG_DIR";
const DATA_DIR_ENV: &str = "TRACEPICK_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for tracepick"))
}

/// An override directory from an environment value. Empty counts as unset.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

fn dir_from_env(name: &str) -> Option<PathBuf> {
	override_dir(env::var_os(name))
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	config_dir_from(env::var_os(CONFIG_DIR_ENV))
}

fn config_dir_from(override_value: Option<OsString>) -> Result<PathBuf> {
	if let Some(dir) = override_dir(override_value) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for logs and other generated files.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}
