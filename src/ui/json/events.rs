//! Shared JSON event types for consistent CLI output.
//!
//! Every command emits `start`, then one event per verdict, registry entry
//! or structural error, then `complete`.

use serde::Serialize;

use nomen::domain::entities::{RegistryEntry, RunError, Summary, Verdict};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Wrapper for per-item events that includes command context.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    fn new(event: &'static str, command: &'a str, data: T) -> Self {
        Self {
            event,
            command,
            data,
        }
    }
}

impl<'a> DataEvent<'a, &'a Verdict> {
    pub fn verdict(command: &'a str, verdict: &'a Verdict) -> Self {
        Self::new("verdict", command, verdict)
    }
}

impl<'a> DataEvent<'a, &'a RunError> {
    pub fn run_error(command: &'a str, error: &'a RunError) -> Self {
        Self::new("error", command, error)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryData<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub meta: &'a str,
    pub hash: &'a str,
}

impl<'a> DataEvent<'a, EntryData<'a>> {
    pub fn entry(command: &'a str, entry: &'a RegistryEntry) -> Self {
        Self::new(
            "entry",
            command,
            EntryData {
                name: &entry.name,
                path: entry.source_path.as_str(),
                meta: entry.meta_path.as_str(),
                hash: entry.hash.as_str(),
            },
        )
    }
}

/// Event emitted when a validator run completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(flatten)]
    pub summary: Summary,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, summary: Summary, success: bool) -> Self {
        Self {
            event: "complete",
            command,
            success,
            summary,
        }
    }
}

/// Event emitted when a registry build completes.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryCompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub entries: usize,
    pub errors: usize,
    pub out: String,
    pub written: bool,
}

impl<'a> RegistryCompleteEvent<'a> {
    pub fn new(command: &'a str, entries: usize, errors: usize, out: String, written: bool) -> Self {
        Self {
            event: "complete",
            command,
            success: errors == 0,
            entries,
            errors,
            out,
            written,
        }
    }
}
