//! Layer value object - the architectural tier a file belongs to

use serde::{Deserialize, Serialize};

/// Architectural tier named by the first segment of a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Foundations, alias `bones`
    Core,
    /// Presentation surfaces, alias `skins`
    Interface,
    /// Behaviour and orchestration, alias `breath`
    Logic,
    /// Deliverable applications, alias `body`
    Application,
}

/// Fixed bidirectional canonical/alias table, consulted once at parse time.
const LAYER_TABLE: [(Layer, &str, &str); 4] = [
    (Layer::Core, "core", "bones"),
    (Layer::Interface, "interface", "skins"),
    (Layer::Logic, "logic", "breath"),
    (Layer::Application, "application", "body"),
];

/// How the layer token was spelled in the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerSpelling {
    Canonical,
    Alias,
}

impl Layer {
    /// All layers in table order
    pub const ALL: [Layer; 4] = [
        Layer::Core,
        Layer::Interface,
        Layer::Logic,
        Layer::Application,
    ];

    /// Resolve a file-name token to its canonical layer.
    ///
    /// Matching is exact: tokens are already required to be lowercase.
    pub fn resolve(token: &str) -> Option<(Layer, LayerSpelling)> {
        LAYER_TABLE.iter().find_map(|(layer, canonical, alias)| {
            if token == *canonical {
                Some((*layer, LayerSpelling::Canonical))
            } else if token == *alias {
                Some((*layer, LayerSpelling::Alias))
            } else {
                None
            }
        })
    }

    /// Canonical spelling
    pub fn as_str(&self) -> &'static str {
        self.row().1
    }

    /// Alias spelling
    pub fn alias(&self) -> &'static str {
        self.row().2
    }

    fn row(&self) -> &'static (Layer, &'static str, &'static str) {
        // The table covers every variant.
        &LAYER_TABLE[*self as usize]
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
