//! Report emission.
//!
//! The report file is rewritten only when its serialized form differs from
//! what is already on disk, so downstream change watchers only ever see real
//! edits. The write outcome also gates the identity validation pass, which
//! runs only for a changed report that had a prior version.

use std::path::{Path, PathBuf};

use anyhow::Context;

use rostr_common::records::Report;

/// Outcome of one write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    /// The serialized report differs from the previous run, or no previous
    /// file existed.
    pub changed: bool,
    /// A previous report existed before this write.
    pub had_previous: bool,
}

pub trait ReportSink {
    fn write(&self, report: &Report) -> anyhow::Result<WriteOutcome>;
}

/// Persists the report as pretty-printed JSON at a fixed path.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for JsonFileSink {
    fn write(&self, report: &Report) -> anyhow::Result<WriteOutcome> {
        let mut rendered = serde_json::to_string_pretty(report).context("serializing report")?;
        rendered.push('\n');

        let previous = match std::fs::read_to_string(&self.path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("reading previous report {}", self.path.display())
                });
            }
        };

        let had_previous = previous.is_some();
        let changed = previous.as_deref() != Some(rendered.as_str());

        if changed {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(&self.path, rendered)
                .with_context(|| format!("writing report {}", self.path.display()))?;
        }

        Ok(WriteOutcome {
            changed,
            had_previous,
        })
    }
}
