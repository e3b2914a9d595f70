//! Verdicts and run reports
//!
//! A [`Verdict`] is produced once per file per run and never mutated.
//! Structural problems (I/O, orphaned sidecars) are kept apart as
//! [`RunError`]s so reports can tell a broken project state from a badly
//! named file.

use serde::Serialize;

use crate::domain::value_objects::RelPath;

/// Outcome of checking one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Valid,
    Invalid,
    Skipped,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Valid => "valid",
            Outcome::Invalid => "invalid",
            Outcome::Skipped => "skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub path: RelPath,
    pub outcome: Outcome,
    /// Rejection codes for `invalid`, exclusion reason for `skipped`,
    /// optional detail for `valid`
    pub reasons: Vec<String>,
}

impl Verdict {
    pub fn valid(path: RelPath, detail: Option<String>) -> Self {
        Self {
            path,
            outcome: Outcome::Valid,
            reasons: detail.into_iter().collect(),
        }
    }

    pub fn invalid(path: RelPath, reasons: Vec<String>) -> Self {
        Self {
            path,
            outcome: Outcome::Invalid,
            reasons,
        }
    }

    pub fn skipped(path: RelPath, reason: impl Into<String>) -> Self {
        Self {
            path,
            outcome: Outcome::Skipped,
            reasons: vec![reason.into()],
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.outcome == Outcome::Invalid
    }
}

/// Category of a structural failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunErrorKind {
    /// File or directory could not be read
    Unreadable,
    /// Sidecar whose paired source file is missing
    OrphanedSidecar,
}

impl RunErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunErrorKind::Unreadable => "unreadable",
            RunErrorKind::OrphanedSidecar => "orphaned_sidecar",
        }
    }
}

/// A per-file structural error; aborts that file only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunError {
    pub path: RelPath,
    pub kind: RunErrorKind,
    pub message: String,
}

impl RunError {
    pub fn unreadable(path: RelPath, message: impl Into<String>) -> Self {
        Self {
            path,
            kind: RunErrorKind::Unreadable,
            message: message.into(),
        }
    }

    pub fn orphaned(path: RelPath, expected_source: &RelPath) -> Self {
        Self {
            path,
            kind: RunErrorKind::OrphanedSidecar,
            message: format!("paired source file '{}' does not exist", expected_source),
        }
    }
}

/// Counts over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Ordered verdicts plus structural errors for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub verdicts: Vec<Verdict>,
    pub errors: Vec<RunError>,
}

impl Report {
    /// Assemble a report, sorting by path so output never depends on
    /// worker completion order.
    pub fn from_parts(mut verdicts: Vec<Verdict>, mut errors: Vec<RunError>) -> Self {
        verdicts.sort_by(|a, b| a.path.cmp(&b.path));
        errors.sort_by(|a, b| a.path.cmp(&b.path));
        Self { verdicts, errors }
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            errors: self.errors.len(),
            ..Summary::default()
        };
        for verdict in &self.verdicts {
            match verdict.outcome {
                Outcome::Valid => summary.valid += 1,
                Outcome::Invalid => summary.invalid += 1,
                Outcome::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    /// True when nothing invalid and nothing structurally broken was found.
    /// An empty run is a success.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && !self.verdicts.iter().any(Verdict::is_invalid)
    }

    /// Verdicts to show: skipped ones only when verbose
    pub fn visible(&self, verbose: bool) -> impl Iterator<Item = &Verdict> {
        self.verdicts
            .iter()
            .filter(move |v| verbose || v.outcome != Outcome::Skipped)
    }
}
