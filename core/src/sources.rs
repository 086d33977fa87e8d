//! The central **abstraction** for the external data collaborators.
//!
//! This module defines the seams through which the aggregator reaches the
//! directory service, the committee source of truth and the canonical
//! identity list.
//!
//! **Architectural Note:**
//! High-level modules should strictly depend on these traits rather than on a
//! concrete backend. The [`snapshot`] submodule provides the file-backed
//! implementation the CLI wires in; a live directory client would slot in
//! behind the same traits. Connectivity, timeout and retry policy all live
//! behind the seam.

use async_trait::async_trait;
use rostr_common::records::{GroupRecord, ProjectRecord};

pub mod snapshot;

/// Yields the full `ou=projects` collection.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn preload(&self) -> anyhow::Result<Vec<ProjectRecord>>;
}

/// Yields the legacy `ou=groups` collection.
#[async_trait]
pub trait GroupSource: Send + Sync {
    async fn preload(&self) -> anyhow::Result<Vec<GroupRecord>>;
}

/// Yields the committee (PMC) names that are authoritative for inclusion
/// in the published report.
#[async_trait]
pub trait CommitteeSource: Send + Sync {
    async fn pmcs(&self) -> anyhow::Result<Vec<String>>;
}

/// Yields the canonical identity list used only for post-hoc validation.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<String>>;
}
