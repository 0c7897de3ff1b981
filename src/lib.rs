//! Pick a trace target from a filtered table of components.
//!
//! The picker itself lives in `tracepick-core` and the terminal surface in
//! `tracepick-tui`; this crate adds directory discovery and logging setup for
//! the `tracepick` binary and re-exports the pieces embedders need.

pub mod app_dirs;
pub mod logging;

pub use tracepick_core::ffx::FfxTargetSource;
pub use tracepick_core::{
	DisplaySurface, Entry, EntryFilter, EntrySource, JsonSource, MatchMode, Picker, PickerOutcome,
	PickerState, StaticSource, SurfaceEvent, filter_for_mode,
};
pub use tracepick_tui::{StyleConfig, TerminalSurface, Theme, UiLabels, run};
