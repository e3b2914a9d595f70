use nomen::domain::entities::{Outcome, Report, RunError, Summary, Verdict};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One line per verdict; `verbose` adds detail to valid lines.
pub fn render_verdict(
    verdict: &Verdict,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let reasons = verdict.reasons.join("; ");
    match verdict.outcome {
        Outcome::Valid => {
            let mut line = format!(
                "{} {}",
                Icon::Success.colored(supports_color, supports_unicode),
                verdict.path
            );
            if verbose && !reasons.is_empty() {
                line.push_str(&format!(
                    " {}",
                    ColoredText::dim(format!("({})", reasons)).render(supports_color)
                ));
            }
            line
        }
        Outcome::Invalid => format!(
            "{} {}: {}",
            Icon::Error.colored(supports_color, supports_unicode),
            verdict.path,
            ColoredText::error(reasons).render(supports_color)
        ),
        Outcome::Skipped => format!(
            "{} {}",
            Icon::Skipped.colored(supports_color, supports_unicode),
            ColoredText::dim(format!("{} ({})", verdict.path, reasons)).render(supports_color)
        ),
    }
}

pub fn render_run_error(error: &RunError, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}: {}: {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        error.path,
        ColoredText::warning(error.kind.as_str()).render(supports_color),
        error.message
    )
}

pub fn render_summary(
    label: &str,
    summary: &Summary,
    success: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let counts = format!(
        "{} valid, {} invalid, {} skipped, {}",
        summary.valid,
        summary.invalid,
        summary.skipped,
        plural(summary.errors, "error", "errors")
    );
    let (icon, text) = if success {
        (Icon::Success, ColoredText::success(label).bold())
    } else {
        (Icon::Error, ColoredText::error(label).bold())
    };
    format!(
        "{} {}: {}",
        icon.colored(supports_color, supports_unicode),
        text.render(supports_color),
        counts
    )
}

/// Full human report: visible verdicts, structural errors, summary line.
pub fn render_report(
    label: &str,
    report: &Report,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for verdict in report.visible(verbose) {
        out.push_str(&render_verdict(verdict, verbose, supports_color, supports_unicode));
        out.push('\n');
    }
    for error in &report.errors {
        out.push_str(&render_run_error(error, supports_color, supports_unicode));
        out.push('\n');
    }
    out.push_str(&render_summary(
        label,
        &report.summary(),
        report.is_success(),
        supports_color,
        supports_unicode,
    ));
    out.push('\n');
    out
}

pub(crate) fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
