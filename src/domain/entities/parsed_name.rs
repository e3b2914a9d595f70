//! ParsedName entity - the decomposition of one file name
//!
//! Constructed transiently by the grammar service for each validated path
//! and dropped once the verdict is recorded.

use crate::domain::value_objects::{Layer, LayerSpelling};

/// A file name that satisfies `{Layer}.{Role}.{Domain}.{Extension}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub layer: Layer,
    pub layer_spelling: LayerSpelling,
    pub role: String,
    /// May contain dots when the name has more than four tokens
    pub domain: String,
    pub extension: String,
    pub target: Option<String>,
    pub version: Option<String>,
}

impl ParsedName {
    pub fn layer_is_alias(&self) -> bool {
        self.layer_spelling == LayerSpelling::Alias
    }

    /// The four mandatory segments joined with `.`, using the canonical layer.
    pub fn mandatory_segments(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.layer, self.role, self.domain, self.extension
        )
    }

    /// Short human description used in verbose reports
    pub fn describe(&self) -> String {
        let mut out = format!(
            "layer={}{}, role={}, domain={}, ext={}",
            self.layer,
            if self.layer_is_alias() {
                format!(" (alias {})", self.layer.alias())
            } else {
                String::new()
            },
            self.role,
            self.domain,
            self.extension
        );
        if let Some(target) = &self.target {
            out.push_str(&format!(", target={}", target));
        }
        if let Some(version) = &self.version {
            out.push_str(&format!(", version={}", version));
        }
        out
    }
}
