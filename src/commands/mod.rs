pub mod meta;
pub mod names;
pub mod registry;

use std::io::Write;

use anyhow::{Context, Result};

use nomen::domain::entities::Report;
use nomen::Config;

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::json::write_typed_event;

/// Load `nomen.toml` from the working directory plus env overrides.
pub(crate) fn load_config() -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let (config, _warnings) = Config::load_project(&cwd)?;
    Ok(config)
}

/// Print a validator report as text or NDJSON.
pub(crate) fn print_report(command: &str, report: &Report, ui: &UiContext) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if ui.json {
        write_typed_event(&mut out, &StartEvent::new(command))?;
        for verdict in report.visible(ui.show_skipped()) {
            write_typed_event(&mut out, &DataEvent::verdict(command, verdict))?;
        }
        for error in &report.errors {
            write_typed_event(&mut out, &DataEvent::run_error(command, error))?;
        }
        write_typed_event(
            &mut out,
            &CompleteEvent::new(command, report.summary(), report.is_success()),
        )?;
    } else {
        let text = crate::ui::views::report::render_report(
            command,
            report,
            ui.show_skipped(),
            ui.color,
            ui.unicode,
        );
        out.write_all(text.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Exit 1 after output has been flushed when the run found problems.
pub(crate) fn exit_on_failure(success: bool) {
    if !success {
        std::process::exit(1);
    }
}
