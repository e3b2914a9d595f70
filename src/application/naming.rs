//! Naming Use Case
//!
//! Two entry points over one core: a recursive walk from a root, or an
//! explicit list of files (the pre-commit case). Both end in
//! `check_candidates`, which applies the exclusion policy and then the
//! grammar to each path in parallel.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::entities::{Report, RunError, Verdict};
use crate::domain::policies::{Decision, ExclusionPolicy, Mode, SkipReason};
use crate::domain::ports::FileSystem;
use crate::domain::services::parse_name;
use crate::domain::value_objects::RelPath;
use crate::error::{NomenError, NomenResult};

pub struct NamingUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    policy: ExclusionPolicy,
}

impl<FS> NamingUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, policy: ExclusionPolicy) -> Self {
        Self {
            file_system,
            policy,
        }
    }

    /// Recursively validate every file under `root`.
    ///
    /// Denylisted directories are pruned and reported once as skipped.
    pub fn validate_root(&self, root: &Path) -> NomenResult<Report> {
        let listing = self
            .file_system
            .walk(root, &self.policy)
            .map_err(NomenError::from_walk)?;

        let mut verdicts: Vec<Verdict> = listing
            .pruned
            .iter()
            .map(|dir| {
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Verdict::skipped(
                    RelPath::new(dir, root),
                    SkipReason::Directory(name).to_string(),
                )
            })
            .collect();
        let errors = listing
            .errors
            .iter()
            .map(|(path, message)| RunError::unreadable(RelPath::new(path, root), message.clone()))
            .collect();

        let candidates: Vec<RelPath> = listing
            .files
            .iter()
            .map(|path| RelPath::new(path, root))
            .collect();
        verdicts.extend(self.check_candidates(candidates, Mode::Tree));

        let report = Report::from_parts(verdicts, errors);
        log_summary(&report, &root.display().to_string());
        Ok(report)
    }

    /// Validate exactly the given paths. Only the filename filter applies.
    pub fn validate_files(&self, files: &[PathBuf]) -> Report {
        let candidates = files
            .iter()
            .map(|path| RelPath::from_components(path))
            .collect();
        let report = Report::from_parts(self.check_candidates(candidates, Mode::FileList), vec![]);
        log_summary(&report, "file list");
        report
    }

    fn check_candidates(&self, candidates: Vec<RelPath>, mode: Mode) -> Vec<Verdict> {
        candidates
            .into_par_iter()
            .map(|path| self.check_one(path, mode))
            .collect()
    }

    fn check_one(&self, path: RelPath, mode: Mode) -> Verdict {
        match self.policy.decide(&path, mode) {
            Decision::Skip(reason) => {
                debug!(path = %path, reason = %reason, "skipped");
                Verdict::skipped(path, reason.to_string())
            }
            Decision::Validate => match parse_name(path.file_name()) {
                Ok(parsed) => Verdict::valid(path, Some(parsed.describe())),
                Err(rejection) => {
                    debug!(path = %path, reason = %rejection, "rejected");
                    Verdict::invalid(path, vec![rejection.to_string()])
                }
            },
        }
    }
}

fn log_summary(report: &Report, scope: &str) {
    let summary = report.summary();
    info!(
        scope,
        valid = summary.valid,
        invalid = summary.invalid,
        skipped = summary.skipped,
        errors = summary.errors,
        "naming run complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Outcome;
    use crate::domain::ports::{FsError, FsResult, TreeListing};
    use crate::domain::value_objects::ContentHash;
    use crate::infrastructure::LocalFs;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    fn use_case() -> NamingUseCase<LocalFs> {
        NamingUseCase::new(LocalFs::new(), ExclusionPolicy::defaults())
    }

    #[test]
    fn root_mode_reports_in_path_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/logic.agent.analysis.py");
        touch(dir.path(), "src/Bad.Name.py");
        touch(dir.path(), "README.md");
        touch(dir.path(), "tools/whatever.sh");

        let report = use_case().validate_root(dir.path()).unwrap();
        let rows: Vec<(&str, Outcome)> = report
            .verdicts
            .iter()
            .map(|v| (v.path.as_str(), v.outcome))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("README.md", Outcome::Skipped),
                ("src/Bad.Name.py", Outcome::Invalid),
                ("src/logic.agent.analysis.py", Outcome::Valid),
                ("tools", Outcome::Skipped),
            ]
        );
        assert!(!report.is_success());
        assert_eq!(report.verdicts[3].reasons, vec!["excluded_directory"]);
    }

    #[test]
    fn valid_file_in_excluded_directory_is_skipped() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "archive/core.router.network.c");

        let report = use_case().validate_root(dir.path()).unwrap();
        assert_eq!(report.summary().valid, 0);
        assert_eq!(report.summary().skipped, 1);
        assert!(report.is_success());
    }

    #[test]
    fn empty_tree_is_success() {
        let dir = tempdir().unwrap();
        let report = use_case().validate_root(dir.path()).unwrap();
        assert!(report.verdicts.is_empty());
        assert!(report.is_success());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempdir().unwrap();
        let err = use_case()
            .validate_root(&dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, NomenError::DirectoryNotFound { .. }));
    }

    struct DeniedFs;

    impl FileSystem for DeniedFs {
        fn walk(&self, root: &Path, _: &ExclusionPolicy) -> FsResult<TreeListing> {
            Err(FsError::at(
                root,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        }
        fn read(&self, path: &Path) -> FsResult<String> {
            Err(FsError::NotFound(path.to_path_buf()))
        }
        fn digest(&self, path: &Path) -> FsResult<ContentHash> {
            Err(FsError::NotFound(path.to_path_buf()))
        }
        fn is_file(&self, _: &Path) -> bool {
            false
        }
    }

    #[test]
    fn unreadable_root_keeps_the_file_system_error() {
        let use_case = NamingUseCase::new(DeniedFs, ExclusionPolicy::defaults());
        let err = use_case.validate_root(Path::new("locked")).unwrap_err();
        match err {
            NomenError::Fs(FsError::PermissionDenied(path)) => {
                assert_eq!(path, PathBuf::from("locked"))
            }
            other => panic!("expected permission error, got {other:?}"),
        }
    }

    #[test]
    fn file_list_mode_skips_directory_filter_only() {
        let report = use_case().validate_files(&[
            PathBuf::from("tools/core.router.network.c"),
            PathBuf::from("tools/README.md"),
            PathBuf::from("src/main.py"),
        ]);
        let outcomes: Vec<_> = report.verdicts.iter().map(|v| v.outcome).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Invalid, Outcome::Skipped, Outcome::Valid]
        );
        assert_eq!(report.verdicts[0].path.as_str(), "src/main.py");
        assert_eq!(report.verdicts[0].reasons, vec!["too_few_segments:2"]);
    }

    #[test]
    fn valid_verdict_describes_parse() {
        let report = use_case().validate_files(&[PathBuf::from("bones.router.network.c")]);
        assert_eq!(report.verdicts[0].outcome, Outcome::Valid);
        assert!(report.verdicts[0].reasons[0].contains("layer=core"));
    }
}
