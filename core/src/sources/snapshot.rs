//! File-backed snapshot sources.
//!
//! Reads JSON exports of the directory service from a single directory:
//! `projects.json` and `groups.json` hold the record arrays, while
//! `committees.json` and `identities.json` hold plain name arrays. One
//! [`SnapshotStore`] implements all four source seams.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use rostr_common::error::RostrError;
use rostr_common::records::{GroupRecord, ProjectRecord};

use super::{CommitteeSource, GroupSource, IdentitySource, ProjectSource};

pub const PROJECTS_FILE: &str = "projects.json";
pub const GROUPS_FILE: &str = "groups.json";
pub const COMMITTEES_FILE: &str = "committees.json";
pub const IDENTITIES_FILE: &str = "identities.json";

/// A directory of JSON snapshot exports.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T, RostrError> {
        let path = self.dir.join(file);
        let raw = std::fs::read_to_string(&path).map_err(|source| RostrError::SnapshotRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| RostrError::SnapshotParse { path, source })
    }
}

#[async_trait]
impl ProjectSource for SnapshotStore {
    async fn preload(&self) -> anyhow::Result<Vec<ProjectRecord>> {
        Ok(self.read(PROJECTS_FILE)?)
    }
}

#[async_trait]
impl GroupSource for SnapshotStore {
    async fn preload(&self) -> anyhow::Result<Vec<GroupRecord>> {
        Ok(self.read(GROUPS_FILE)?)
    }
}

#[async_trait]
impl CommitteeSource for SnapshotStore {
    async fn pmcs(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.read(COMMITTEES_FILE)?)
    }
}

#[async_trait]
impl IdentitySource for SnapshotStore {
    async fn list(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.read(IDENTITIES_FILE)?)
    }
}
