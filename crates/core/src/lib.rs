//! Framework-independent core of the `tracepick` target picker.
//!
//! The crate holds the selectable [`Entry`] type, the visibility filters, the
//! [`Picker`] state machine, and the collaborators the picker talks to: a
//! [`DisplaySurface`] that renders rows and reports user input, and an
//! [`EntrySource`] that produces the rows in the first place.

pub mod entry;
pub mod error;
pub mod ffx;
pub mod filter;
pub mod picker;
pub mod source;
pub mod surface;

pub use entry::Entry;
pub use error::{SourceError, SurfaceError};
pub use filter::{
	EntryFilter, FuzzyFilter, MatchMode, PatternFilter, SubstringFilter, filter_for_mode,
};
pub use picker::{Picker, PickerOutcome, PickerState};
pub use source::{EntrySource, JsonSource, StaticSource, collect_entries};
pub use surface::{DisplaySurface, PickerView, SurfaceEvent};
