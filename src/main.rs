mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{parse_cli, print_entries, print_outcome};
use tracepick::logging;
use workflow::PickerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tracepick_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	let _log_guard = match logging::initialize(resolved.log.file.as_deref(), &resolved.log.level) {
		Ok(guard) => Some(guard),
		Err(err) => {
			eprintln!("warning: logging disabled: {err:#}");
			None
		}
	};

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = PickerWorkflow::from_config(resolved)?;

	if cli.list {
		let entries = workflow.list()?;
		return print_entries(cli.output, &entries);
	}

	let outcome = workflow.run()?;
	print_outcome(cli.output, &outcome)
}
