use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use nomen::{LocalFs, NamingUseCase};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;

pub fn cmd_names(
    files: &[PathBuf],
    root: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config()?;
    let ui = UiContext::new(json, verbose, color, &config);
    let policy = config.exclude.policy()?;
    let use_case = NamingUseCase::new(LocalFs::new(), policy);

    // Explicit files win over --root; neither means the working directory.
    let report = if !files.is_empty() {
        debug!(count = files.len(), "validating file list");
        use_case.validate_files(files)
    } else {
        let root = root.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
        use_case
            .validate_root(&root)
            .with_context(|| format!("failed to validate {}", root.display()))?
    };

    super::print_report("names", &report, &ui)?;
    super::exit_on_failure(report.is_success());
    Ok(())
}
