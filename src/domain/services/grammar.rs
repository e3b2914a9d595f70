//! Grammar engine for `{Layer}.{Role}.{Domain}.{Extension}` file names
//!
//! Pure: a file name goes in, a [`ParsedName`] or a [`Rejection`] comes out.
//!
//! Token assignment, after splitting on `.` (a trailing `.meta.json` is
//! ignored so sidecars are checked against their source's name):
//!
//! 1. A final `v<digits>` token is the Version when at least five tokens exist.
//! 2. If a Version was taken and five or more tokens remain, the token before
//!    it is the Target.
//! 3. Of what remains: first = Layer, second = Role, last = Extension, and
//!    every token in between joins into Domain. Extra tokens never go to Role.
//! 4. When a Version was taken the Extension may not itself look like one,
//!    so the mandatory segments always re-parse to the same decomposition.

use thiserror::Error;

use crate::domain::entities::ParsedName;
use crate::domain::value_objects::Layer;

/// Suffix that marks a metadata sidecar
pub const SIDECAR_SUFFIX: &str = ".meta.json";

/// Number of mandatory segments
pub const MIN_SEGMENTS: usize = 4;

/// Why a file name was rejected. Each variant has a stable code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("too_few_segments:{found}")]
    TooFewSegments { found: usize },

    /// 1-based position of the empty segment
    #[error("empty_segment:{position}")]
    EmptySegment { position: usize },

    #[error("uppercase_character:{segment}")]
    UppercaseCharacter { segment: String },

    #[error("underscore_character:{segment}")]
    UnderscoreCharacter { segment: String },

    #[error("leading_hyphen:{segment}")]
    LeadingHyphen { segment: String },

    #[error("trailing_hyphen:{segment}")]
    TrailingHyphen { segment: String },

    #[error("invalid_character:{segment}")]
    InvalidCharacter { segment: String },

    #[error("unknown_layer:{token}")]
    UnknownLayer { token: String },

    /// Role and Domain tokens must start with a letter
    #[error("leading_digit:{segment}")]
    LeadingDigit { segment: String },

    /// Extension shaped like `v<digits>` alongside a trailing Version
    #[error("ambiguous_extension:{segment}")]
    AmbiguousExtension { segment: String },
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::TooFewSegments { .. } => "too_few_segments",
            Rejection::EmptySegment { .. } => "empty_segment",
            Rejection::UppercaseCharacter { .. } => "uppercase_character",
            Rejection::UnderscoreCharacter { .. } => "underscore_character",
            Rejection::LeadingHyphen { .. } => "leading_hyphen",
            Rejection::TrailingHyphen { .. } => "trailing_hyphen",
            Rejection::InvalidCharacter { .. } => "invalid_character",
            Rejection::UnknownLayer { .. } => "unknown_layer",
            Rejection::LeadingDigit { .. } => "leading_digit",
            Rejection::AmbiguousExtension { .. } => "ambiguous_extension",
        }
    }
}

/// Parse a file name (not a path) against the naming grammar.
pub fn parse(file_name: &str) -> Result<ParsedName, Rejection> {
    let stem = file_name.strip_suffix(SIDECAR_SUFFIX).unwrap_or(file_name);
    let mut tokens: Vec<&str> = stem.split('.').collect();

    if let Some(index) = tokens.iter().position(|t| t.is_empty()) {
        return Err(Rejection::EmptySegment { position: index + 1 });
    }
    if tokens.len() < MIN_SEGMENTS {
        return Err(Rejection::TooFewSegments {
            found: tokens.len(),
        });
    }
    for token in &tokens {
        check_character_class(token)?;
    }

    let has_version = tokens.len() > MIN_SEGMENTS
        && tokens.last().is_some_and(|t| is_version_marker(t));
    let version = if has_version {
        tokens.pop().map(str::to_string)
    } else {
        None
    };
    let target = if version.is_some() && tokens.len() > MIN_SEGMENTS {
        tokens.pop().map(str::to_string)
    } else {
        None
    };

    let (layer, layer_spelling) =
        Layer::resolve(tokens[0]).ok_or_else(|| Rejection::UnknownLayer {
            token: tokens[0].to_string(),
        })?;

    let role = tokens[1];
    let extension = tokens[tokens.len() - 1];
    let domain_tokens = &tokens[2..tokens.len() - 1];

    for token in std::iter::once(&role).chain(domain_tokens.iter()) {
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(Rejection::LeadingDigit {
                segment: token.to_string(),
            });
        }
    }

    if version.is_some() && is_version_marker(extension) {
        return Err(Rejection::AmbiguousExtension {
            segment: extension.to_string(),
        });
    }

    Ok(ParsedName {
        layer,
        layer_spelling,
        role: role.to_string(),
        domain: domain_tokens.join("."),
        extension: extension.to_string(),
        target,
        version,
    })
}

fn check_character_class(segment: &str) -> Result<(), Rejection> {
    let owned = || segment.to_string();
    if segment.chars().any(char::is_uppercase) {
        return Err(Rejection::UppercaseCharacter { segment: owned() });
    }
    if segment.contains('_') {
        return Err(Rejection::UnderscoreCharacter { segment: owned() });
    }
    if segment.starts_with('-') {
        return Err(Rejection::LeadingHyphen { segment: owned() });
    }
    if segment.ends_with('-') {
        return Err(Rejection::TrailingHyphen { segment: owned() });
    }
    if !segment
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(Rejection::InvalidCharacter { segment: owned() });
    }
    Ok(())
}

fn is_version_marker(token: &str) -> bool {
    token
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}
