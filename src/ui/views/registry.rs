use std::path::Path;

use nomen::application::BuildResult;
use nomen::domain::entities::RegistryEntry;
use nomen::domain::ports::SaveOutcome;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::report::{plural, render_run_error};

pub fn render_entry(entry: &RegistryEntry, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {} {}",
        Icon::Success.colored(supports_color, supports_unicode),
        entry.source_path,
        ColoredText::dim(format!("{} ({})", &entry.hash.as_str()[..12], entry.name))
            .render(supports_color)
    )
}

pub fn render_build(
    result: &BuildResult,
    out: &Path,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut text = String::new();
    if verbose {
        for entry in result.registry.resources() {
            text.push_str(&render_entry(entry, supports_color, supports_unicode));
            text.push('\n');
        }
    }
    for error in &result.errors {
        text.push_str(&render_run_error(error, supports_color, supports_unicode));
        text.push('\n');
    }

    let action = match result.saved {
        Some(SaveOutcome::Written) => "written to",
        Some(SaveOutcome::Unchanged) => "unchanged at",
        None => "built for",
    };
    let mut line = format!(
        "{} {}",
        plural(result.registry.len(), "entry", "entries"),
        action
    );
    line.push_str(&format!(" {}", out.display()));
    if !result.errors.is_empty() {
        line.push_str(&format!(", {}", plural(result.errors.len(), "error", "errors")));
    }

    let (icon, label) = if result.is_success() {
        (Icon::Success, ColoredText::success("registry").bold())
    } else {
        (Icon::Error, ColoredText::error("registry").bold())
    };
    text.push_str(&format!(
        "{} {}: {}\n",
        icon.colored(supports_color, supports_unicode),
        label.render(supports_color),
        line
    ));
    text
}
