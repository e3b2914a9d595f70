//! Metadata Use Case
//!
//! Validates sidecar documents against a loaded schema. A file that cannot
//! be read is a structural error, not an invalid verdict.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::entities::{Report, RunError, Verdict};
use crate::domain::policies::MetadataSchema;
use crate::domain::ports::FileSystem;
use crate::domain::services::SidecarValidator;
use crate::domain::value_objects::RelPath;

pub struct MetadataUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    schema: MetadataSchema,
}

enum Checked {
    Verdict(Verdict),
    Error(RunError),
}

impl<FS> MetadataUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, schema: MetadataSchema) -> Self {
        Self {
            file_system,
            schema,
        }
    }

    pub fn validate(&self, files: &[PathBuf]) -> Report {
        let checked: Vec<Checked> = files.par_iter().map(|p| self.check_one(p)).collect();

        let mut verdicts = Vec::new();
        let mut errors = Vec::new();
        for item in checked {
            match item {
                Checked::Verdict(v) => verdicts.push(v),
                Checked::Error(e) => errors.push(e),
            }
        }

        let report = Report::from_parts(verdicts, errors);
        let summary = report.summary();
        info!(
            schema = self.schema.version(),
            valid = summary.valid,
            invalid = summary.invalid,
            errors = summary.errors,
            "metadata run complete"
        );
        report
    }

    fn check_one(&self, path: &Path) -> Checked {
        let rel = RelPath::from_components(path);
        let text = match self.file_system.read(path) {
            Ok(text) => text,
            Err(e) => return Checked::Error(RunError::unreadable(rel, e.to_string())),
        };

        match SidecarValidator::new(&self.schema).validate(&text) {
            Ok(document) => Checked::Verdict(Verdict::valid(
                rel,
                Some(format!(
                    "profile={} version={}",
                    document.profile(),
                    document.version()
                )),
            )),
            Err(violations) => {
                debug!(path = %rel, count = violations.len(), "sidecar rejected");
                Checked::Verdict(Verdict::invalid(
                    rel,
                    violations.iter().map(ToString::to_string).collect(),
                ))
            }
        }
    }
}
