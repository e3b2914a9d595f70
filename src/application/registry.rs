//! Registry Use Case
//!
//! Walks a root, pairs every `*.meta.json` with the source file it names,
//! digests each source and writes the manifest wholesale. A sidecar whose
//! source is missing is an orphan: it is reported, never silently dropped.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::entities::{Registry, RegistryEntry, RunError};
use crate::domain::policies::ExclusionPolicy;
use crate::domain::ports::{FileSystem, ManifestRepository, SaveOutcome};
use crate::domain::services::{declared_name, SIDECAR_SUFFIX};
use crate::domain::value_objects::RelPath;
use crate::error::{NomenError, NomenResult};

/// Result of a registry build
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub registry: Registry,
    /// Orphaned sidecars and unreadable files, sorted by path
    pub errors: Vec<RunError>,
    /// Set once the manifest has been persisted
    pub saved: Option<SaveOutcome>,
}

impl BuildResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct RegistryUseCase<FS, MR>
where
    FS: FileSystem,
    MR: ManifestRepository,
{
    file_system: FS,
    manifest_repo: MR,
    policy: ExclusionPolicy,
}

impl<FS, MR> RegistryUseCase<FS, MR>
where
    FS: FileSystem,
    MR: ManifestRepository,
{
    pub fn new(file_system: FS, manifest_repo: MR, policy: ExclusionPolicy) -> Self {
        Self {
            file_system,
            manifest_repo,
            policy,
        }
    }

    /// Build the registry for `root` without writing anything
    pub fn build(&self, root: &Path) -> NomenResult<BuildResult> {
        let listing = self
            .file_system
            .walk(root, &self.policy)
            .map_err(NomenError::from_walk)?;

        let sidecars: Vec<_> = listing
            .files
            .iter()
            .filter(|p| {
                p.file_name()
                    .is_some_and(|n| n.to_string_lossy().ends_with(SIDECAR_SUFFIX))
            })
            .collect();
        debug!(count = sidecars.len(), "sidecars discovered");

        let built: Vec<Result<RegistryEntry, RunError>> = sidecars
            .par_iter()
            .map(|meta| self.build_entry(root, meta))
            .collect();

        let mut entries = Vec::new();
        let mut errors: Vec<RunError> = listing
            .errors
            .iter()
            .map(|(path, message)| RunError::unreadable(RelPath::new(path, root), message.clone()))
            .collect();
        for item in built {
            match item {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    warn!(path = %error.path, "{}", error.message);
                    errors.push(error);
                }
            }
        }
        errors.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(BuildResult {
            registry: Registry::from_entries(entries),
            errors,
            saved: None,
        })
    }

    /// Build and write the manifest to `out`.
    ///
    /// The successfully built entries are written even when orphans exist;
    /// callers decide the exit status from [`BuildResult::is_success`].
    pub fn build_and_save(&self, root: &Path, out: &Path) -> NomenResult<BuildResult> {
        let mut result = self.build(root)?;
        let saved = self.manifest_repo.save(&result.registry, out)?;
        info!(
            out = %out.display(),
            entries = result.registry.len(),
            orphans = result.errors.len(),
            "registry build complete"
        );
        result.saved = Some(saved);
        Ok(result)
    }

    fn build_entry(&self, root: &Path, meta: &Path) -> Result<RegistryEntry, RunError> {
        let meta_rel = RelPath::new(meta, root);
        let file_name = meta
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base_name = file_name
            .strip_suffix(SIDECAR_SUFFIX)
            .unwrap_or(&file_name)
            .to_string();
        let source = meta.with_file_name(&base_name);
        let source_rel = RelPath::new(&source, root);

        if base_name.is_empty() || !self.file_system.is_file(&source) {
            return Err(RunError::orphaned(meta_rel, &source_rel));
        }

        let hash = self
            .file_system
            .digest(&source)
            .map_err(|e| RunError::unreadable(source_rel.clone(), e.to_string()))?;

        // The registry records what is on disk; an invalid sidecar still
        // yields an entry, named after its source when it declares no name.
        let name = self
            .file_system
            .read(meta)
            .ok()
            .and_then(|text| declared_name(&text))
            .unwrap_or(base_name);

        debug!(path = %source_rel, hash = %hash, "digested");
        Ok(RegistryEntry {
            name,
            source_path: source_rel,
            meta_path: meta_rel,
            hash,
        })
    }
}
