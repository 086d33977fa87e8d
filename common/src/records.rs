//! # Roster Domain Records
//!
//! Value structs for directory-service entries and the published report.
//!
//! Timestamps are carried as opaque strings. The directory emits them in a
//! fixed-width sortable format, so bytewise comparison is also chronological
//! comparison; nothing in this tool parses them.
//!
//! Serde renames pin the exact key names of the published JSON, which
//! downstream pages depend on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A person reference. Only the uid matters to this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One `ou=projects` entry from the directory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(rename = "createTimestamp", default)]
    pub create_timestamp: Option<String>,
    #[serde(rename = "modifyTimestamp")]
    pub modify_timestamp: String,
    #[serde(default)]
    pub members: Vec<Person>,
    /// Part of the source shape, never published.
    #[serde(default)]
    pub owners: Vec<Person>,
}

/// One legacy `ou=groups` entry. Same shape as a project minus owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub name: String,
    #[serde(rename = "createTimestamp", default)]
    pub create_timestamp: Option<String>,
    #[serde(rename = "modifyTimestamp")]
    pub modify_timestamp: String,
    #[serde(default)]
    pub members: Vec<Person>,
}

impl GroupRecord {
    /// Legacy groups enter the merged collection in the project shape,
    /// with no owners recorded.
    pub fn promote(self) -> ProjectRecord {
        ProjectRecord {
            name: self.name,
            create_timestamp: self.create_timestamp,
            modify_timestamp: self.modify_timestamp,
            members: self.members,
            owners: Vec::new(),
        }
    }
}

/// The published roster for one group. The group name lives in the
/// surrounding map key, so it is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Serialized as `null` when the directory did not report one.
    #[serde(rename = "createTimestamp")]
    pub create_timestamp: Option<String>,
    #[serde(rename = "modifyTimestamp")]
    pub modify_timestamp: String,
    pub roster_count: usize,
    pub roster: Vec<String>,
}

/// The complete published artifact, one per run.
///
/// `BTreeMap` keys give the report a stable serialization order, so two runs
/// over identical input produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Bytewise maximum of the published modify timestamps, empty when
    /// nothing is published.
    #[serde(rename = "lastTimestamp")]
    pub last_timestamp: String,
    pub group_count: usize,
    pub roster_counts: BTreeMap<String, usize>,
    pub groups: BTreeMap<String, RosterEntry>,
}
