//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{NomenError, NomenResult};

use super::types::{ColorMode, Config, CONFIG_FILE};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key in a config file that no section recognizes
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// Environment override with an unusable value; the override is ignored
    InvalidEnvValue {
        var: String,
        value: String,
        suggestion: Option<String>,
        valid: &'static [&'static str],
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, ". Did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnvValue {
                var,
                value,
                suggestion,
                valid,
            } => {
                write!(f, "invalid {} value '{}'", var, value)?;
                if let Some(suggestion) = suggestion {
                    write!(f, ". Did you mean '{}'?", suggestion)?;
                }
                write!(f, " (valid values: {})", valid.join(", "))
            }
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NomenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NomenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest(&key, CONFIG_KEYS),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `nomen.toml` under `project_root` (or defaults), then env overrides
pub fn load_project(project_root: &Path) -> NomenResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE);
    let (config, mut warnings) = if path.is_file() {
        debug!(path = %path.display(), "loading project config");
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    let (config, env_warnings) = with_env_overrides(config, |var| std::env::var(var).ok());
    warnings.extend(env_warnings);
    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok((config, warnings))
}

/// Apply environment variable overrides (NOMEN_* prefix).
///
/// `lookup` stands in for `std::env::var` so tests need not mutate the
/// process environment.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(schema) = lookup("NOMEN_SCHEMA").filter(|v| !v.is_empty()) {
        config.meta.schema = Some(PathBuf::from(schema));
    }

    if let Some(out) = lookup("NOMEN_REGISTRY_OUT").filter(|v| !v.is_empty()) {
        config.registry.out = PathBuf::from(out);
    }

    if let Some(color) = lookup("NOMEN_COLOR") {
        match ColorMode::parse(&color) {
            Some(mode) => config.output.color = mode,
            None => warnings.push(ConfigWarning::InvalidEnvValue {
                var: "NOMEN_COLOR".to_string(),
                suggestion: suggest(&color.to_lowercase(), ColorMode::NAMES),
                value: color,
                valid: ColorMode::NAMES,
            }),
        }
    }

    (config, warnings)
}

const CONFIG_KEYS: &[&str] = &[
    "exclude",
    "directories",
    "files",
    "extra_directories",
    "extra_files",
    "meta",
    "schema",
    "registry",
    "out",
    "output",
    "color",
    "unicode",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Closest candidate within two edits
fn suggest(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(unknown, c)))
        .filter(|(_, dist)| *dist > 0 && *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(c, _)| c.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
