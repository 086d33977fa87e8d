use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RostrError {
    /// The directory service always contains projects, so an empty result
    /// is a retrieval failure rather than a legitimately empty answer.
    #[error("no project entries retrieved, output not created")]
    EmptyProjects,

    #[error("failed to read snapshot file {path}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot file {path}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
