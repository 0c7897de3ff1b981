//! Configuration loading and resolution.
//!
//! Values are layered from the default config files, `--config` files and
//! `TRACEPICK__` environment variables, then overridden by CLI flags. `load`
//! is the entry point and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{ResolvedConfig, SourceSpec};
#[cfg(test)]
pub(crate) use resolved::test_config;
