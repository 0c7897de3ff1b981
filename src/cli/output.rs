use anyhow::Result;
use tracepick_core::{Entry, PickerOutcome};

use super::OutputFormat;

/// Print the picker outcome in the chosen format.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &PickerOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

/// Print a list of entries in the chosen format.
pub(crate) fn print_entries(format: OutputFormat, entries: &[Entry]) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			for entry in entries {
				println!("{}", format_entry(entry));
			}
		}
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entries)?),
	}
	Ok(())
}

fn format_entry(entry: &Entry) -> String {
	format!("{}\t{}", entry.id(), entry.name())
}

pub(crate) fn format_outcome_plain(outcome: &PickerOutcome) -> String {
	match outcome.selected() {
		Some(entry) => format_entry(entry),
		None => "Selection cancelled".to_string(),
	}
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn confirmed() -> PickerOutcome {
		PickerOutcome {
			accepted: true,
			query: "cube".into(),
			selection: Some(Entry::new("254441", "vkcube")),
		}
	}

	#[test]
	fn json_format_includes_selected_entry() {
		let json = format_outcome_json(&confirmed()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "cube");
		assert_eq!(value["selection"]["id"], "254441");
		assert_eq!(value["selection"]["name"], "vkcube");
	}

	#[test]
	fn json_format_has_null_selection_when_cancelled() {
		let outcome = PickerOutcome {
			accepted: false,
			query: "vk".into(),
			selection: None,
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}

	#[test]
	fn plain_format_is_tab_separated() {
		assert_eq!(format_outcome_plain(&confirmed()), "254441\tvkcube");
		let cancelled = PickerOutcome {
			accepted: false,
			query: String::new(),
			selection: None,
		};
		assert_eq!(format_outcome_plain(&cancelled), "Selection cancelled");
	}
}
