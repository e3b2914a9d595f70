use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use nomen::domain::ports::SaveOutcome;
use nomen::{JsonManifestRepository, LocalFs, RegistryUseCase};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::json::events::{DataEvent, RegistryCompleteEvent, StartEvent};
use crate::ui::json::write_typed_event;

pub fn cmd_registry(
    root: &Path,
    out: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config()?;
    let ui = UiContext::new(json, verbose, color, &config);
    let out = out.unwrap_or(config.registry.out.as_path()).to_path_buf();

    // Only directory pruning applies; every *.meta.json below root is a candidate.
    let policy = config.exclude.policy()?;
    let use_case = RegistryUseCase::new(LocalFs::new(), JsonManifestRepository::new(), policy);
    let result = use_case
        .build_and_save(root, &out)
        .with_context(|| format!("failed to build registry for {}", root.display()))?;

    let mut stdout = std::io::stdout().lock();
    if ui.json {
        write_typed_event(&mut stdout, &StartEvent::new("registry"))?;
        for entry in result.registry.resources() {
            write_typed_event(&mut stdout, &DataEvent::entry("registry", entry))?;
        }
        for error in &result.errors {
            write_typed_event(&mut stdout, &DataEvent::run_error("registry", error))?;
        }
        write_typed_event(
            &mut stdout,
            &RegistryCompleteEvent::new(
                "registry",
                result.registry.len(),
                result.errors.len(),
                out.display().to_string(),
                result.saved == Some(SaveOutcome::Written),
            ),
        )?;
    } else {
        let text = crate::ui::views::registry::render_build(
            &result,
            &out,
            ui.verbose > 0,
            ui.color,
            ui.unicode,
        );
        stdout.write_all(text.as_bytes())?;
    }
    stdout.flush()?;
    drop(stdout);

    super::exit_on_failure(result.is_success());
    Ok(())
}
