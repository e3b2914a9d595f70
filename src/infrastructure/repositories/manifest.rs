//! JSON Manifest Repository
//!
//! Writes `{"resources": [{"name", "path", "meta", "hash"}, ...]}` as pretty
//! JSON with a trailing newline. Writes are atomic (temp file in the target
//! directory, then rename) and serialized by an exclusive lock on
//! `<out>.lock`, which is removed again once the save finishes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::entities::Registry;
use crate::domain::ports::{ManifestError, ManifestRepository, SaveOutcome};

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    path: &'a str,
    meta: &'a str,
    hash: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonManifest<'a> {
    resources: Vec<JsonEntry<'a>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestRepository;

impl JsonManifestRepository {
    pub fn new() -> Self {
        Self
    }

    /// The exact bytes a save would write
    pub fn render(registry: &Registry) -> Result<String, ManifestError> {
        let manifest = JsonManifest {
            resources: registry
                .resources()
                .iter()
                .map(|e| JsonEntry {
                    name: &e.name,
                    path: e.source_path.as_str(),
                    meta: e.meta_path.as_str(),
                    hash: e.hash.as_str(),
                })
                .collect(),
        };
        let mut content = serde_json::to_string_pretty(&manifest).map_err(|e| {
            ManifestError::SerializationError {
                message: e.to_string(),
            }
        })?;
        content.push('\n');
        Ok(content)
    }

    fn write_atomic(out: &Path, content: &str) -> Result<(), ManifestError> {
        let access = |e: io::Error| ManifestError::AccessError {
            path: out.to_path_buf(),
            message: e.to_string(),
        };
        let parent = out
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(access)?;
        temp.write_all(content.as_bytes()).map_err(access)?;
        temp.flush().map_err(access)?;
        temp.persist(out).map_err(|e| access(e.error))?;
        Ok(())
    }
}

fn lock_path(out: &Path) -> PathBuf {
    let mut name = out.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

impl ManifestRepository for JsonManifestRepository {
    fn save(&self, registry: &Registry, out: &Path) -> Result<SaveOutcome, ManifestError> {
        let content = Self::render(registry)?;

        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ManifestError::AccessError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let lock_path = lock_path(out);
        let lock_file = fs::File::create(&lock_path).map_err(|e| ManifestError::LockError {
            path: lock_path.clone(),
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| ManifestError::LockError {
                path: lock_path.clone(),
                message: e.to_string(),
            })?;

        let result = match fs::read(out) {
            Ok(existing) if existing == content.as_bytes() => {
                debug!(path = %out.display(), "manifest unchanged");
                Ok(SaveOutcome::Unchanged)
            }
            _ => Self::write_atomic(out, &content).map(|()| {
                info!(path = %out.display(), entries = registry.len(), "manifest written");
                SaveOutcome::Written
            }),
        };

        if let Err(e) = lock_file.unlock() {
            debug!(path = %lock_path.display(), error = %e, "unlock failed, released on close");
        }
        drop(lock_file);
        let cleanup = match fs::remove_file(&lock_path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(ManifestError::LockError {
                path: lock_path,
                message: e.to_string(),
            }),
            _ => Ok(()),
        };
        result.and_then(|outcome| cleanup.map(|()| outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RegistryEntry;
    use crate::domain::value_objects::ContentHash;
    use tempfile::tempdir;

    fn sample() -> Registry {
        Registry::from_entries(vec![RegistryEntry {
            name: "core.router.network.c".to_string(),
            source_path: "src/core.router.network.c".into(),
            meta_path: "src/core.router.network.c.meta.json".into(),
            hash: ContentHash::from_bytes(b"int main(void) { return 0; }\n"),
        }])
    }

    #[test]
    fn render_uses_manifest_field_names() {
        let content = JsonManifestRepository::render(&sample()).unwrap();
        assert!(content.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let entry = &value["resources"][0];
        assert_eq!(entry["name"], "core.router.network.c");
        assert_eq!(entry["path"], "src/core.router.network.c");
        assert_eq!(entry["meta"], "src/core.router.network.c.meta.json");
        assert_eq!(entry["hash"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn empty_registry_renders_empty_list() {
        let content = JsonManifestRepository::render(&Registry::new()).unwrap();
        assert_eq!(content, "{\n  \"resources\": []\n}\n");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("registry").join("registry.json");
        let outcome = JsonManifestRepository::new().save(&sample(), &out).unwrap();
        assert_eq!(outcome, SaveOutcome::Written);
        assert!(out.exists());
    }

    #[test]
    fn save_leaves_no_lock_file_behind() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out").join("manifest.json");
        let repo = JsonManifestRepository::new();

        repo.save(&sample(), &out).unwrap();
        assert!(!lock_path(&out).exists());
        assert_eq!(repo.save(&sample(), &out).unwrap(), SaveOutcome::Unchanged);
        assert!(!lock_path(&out).exists());

        let names: Vec<_> = fs::read_dir(dir.path().join("out"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("manifest.json")]);
    }

    #[test]
    fn stale_lock_file_is_cleaned_up() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("registry.json");
        fs::write(lock_path(&out), "").unwrap();

        JsonManifestRepository::new().save(&sample(), &out).unwrap();
        assert!(!lock_path(&out).exists());
    }

    #[test]
    fn second_identical_save_is_unchanged() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("registry.json");
        let repo = JsonManifestRepository::new();

        repo.save(&sample(), &out).unwrap();
        let first = fs::read(&out).unwrap();
        assert_eq!(repo.save(&sample(), &out).unwrap(), SaveOutcome::Unchanged);
        assert_eq!(fs::read(&out).unwrap(), first);
    }

    #[test]
    fn save_replaces_stale_manifest_wholesale() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("registry.json");
        fs::write(&out, r#"{"resources":[{"name":"stale"}]}"#).unwrap();

        JsonManifestRepository::new().save(&Registry::new(), &out).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "{\n  \"resources\": []\n}\n"
        );
    }
}
