use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use nomen::config::SchemaLocation;
use nomen::domain::ports::SchemaSource;
use nomen::{JsonSchemaSource, LocalFs, MetadataUseCase};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;

pub fn cmd_meta(
    files: &[PathBuf],
    schema: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config()?;
    let ui = UiContext::new(json, verbose, color, &config);

    let location = match schema {
        Some(path) => SchemaLocation::Explicit(path.to_path_buf()),
        None => config.schema_location(),
    };
    let source = JsonSchemaSource::new();
    let schema = source.load(location.path()).with_context(|| match &location {
        SchemaLocation::Explicit(path) => format!("failed to load schema {}", path.display()),
        SchemaLocation::Default(path) => format!(
            "failed to load schema {} (default location; pass --schema or set [meta] schema in nomen.toml)",
            path.display()
        ),
    })?;
    debug!(version = schema.version(), "schema loaded");

    let report = MetadataUseCase::new(LocalFs::new(), schema).validate(files);

    super::print_report("meta", &report, &ui)?;
    super::exit_on_failure(report.is_success());
    Ok(())
}
