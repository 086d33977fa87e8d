//! # Roster Aggregator
//!
//! Implements the batch transform at the heart of the tool:
//! Load, Merge, Filter/Sort, Summarize.
//!
//! Projects are authoritative. A fixed set of legacy group names is promoted
//! into the project collection for compatibility with the historical output,
//! and only names in the wanted set (current PMC names plus those extras)
//! are published.

use std::collections::{BTreeMap, HashSet};

use tracing::error;

use rostr_common::error::RostrError;
use rostr_common::records::{GroupRecord, ProjectRecord, Report, RosterEntry};

use crate::sources::{CommitteeSource, GroupSource, ProjectSource};

/// Legacy names kept in the report for compatibility with earlier output,
/// even though not all of them are committees. Groups with these names are
/// promoted when no project of the same name exists.
pub const EXTRAS: [&str; 6] = [
    "apsite",
    "committers",
    "member",
    "concom",
    "infra",
    "security",
];

/// The allow-list for publication: PMC names plus the legacy extras.
pub fn wanted_set(pmcs: &[String]) -> HashSet<String> {
    pmcs.iter()
        .cloned()
        .chain(EXTRAS.iter().map(|name| name.to_string()))
        .collect()
}

/// Folds eligible legacy groups into the project collection.
///
/// Only groups named in [`EXTRAS`] are eligible, and an existing project
/// always shadows a group of the same name. Should the same extras name occur
/// twice among the groups, the first occurrence wins.
pub fn merge(mut projects: Vec<ProjectRecord>, groups: Vec<GroupRecord>) -> Vec<ProjectRecord> {
    let mut already: HashSet<String> = projects.iter().map(|p| p.name.clone()).collect();

    for group in groups {
        if !EXTRAS.contains(&group.name.as_str()) || already.contains(&group.name) {
            continue;
        }
        already.insert(group.name.clone());
        projects.push(group.promote());
    }

    projects
}

/// Builds the published report from the merged collection.
///
/// Entries outside `wanted` are silently dropped. Rosters are sorted by uid
/// (bytewise ascending, duplicates preserved) and `last_timestamp` is the
/// bytewise maximum of the published modify timestamps, empty when nothing
/// is published. `roster_counts` and `groups` always carry the same keys.
pub fn build_report(mut merged: Vec<ProjectRecord>, wanted: &HashSet<String>) -> Report {
    merged.sort_by(|a, b| a.name.cmp(&b.name));

    let mut last_stamp = String::new();
    let mut roster_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut groups: BTreeMap<String, RosterEntry> = BTreeMap::new();

    for project in merged {
        if !wanted.contains(&project.name) {
            continue;
        }

        let mut roster: Vec<String> = project.members.into_iter().map(|p| p.name).collect();
        roster.sort();

        if project.modify_timestamp > last_stamp {
            last_stamp = project.modify_timestamp.clone();
        }

        roster_counts.insert(project.name.clone(), roster.len());
        groups.insert(
            project.name,
            RosterEntry {
                create_timestamp: project.create_timestamp,
                modify_timestamp: project.modify_timestamp,
                roster_count: roster.len(),
                roster,
            },
        );
    }

    Report {
        last_timestamp: last_stamp,
        group_count: groups.len(),
        roster_counts,
        groups,
    }
}

/// Scans every published roster for uids missing from the canonical identity
/// list. Returns `(group name, uid)` pairs in report order. Diagnostic only;
/// the report itself is never altered.
pub fn unknown_uids(report: &Report, canonical: &HashSet<String>) -> Vec<(String, String)> {
    let mut unknown = Vec::new();
    for (name, entry) in &report.groups {
        for uid in &entry.roster {
            if !canonical.contains(uid) {
                unknown.push((name.clone(), uid.clone()));
            }
        }
    }
    unknown
}

/// Orchestrates one aggregation run against the configured sources.
///
/// The aggregator holds no state between runs; every run rebuilds the report
/// from the collaborators' current snapshot.
pub struct Aggregator {
    projects: Box<dyn ProjectSource>,
    groups: Box<dyn GroupSource>,
    committees: Box<dyn CommitteeSource>,
}

impl Aggregator {
    pub fn new(
        projects: Box<dyn ProjectSource>,
        groups: Box<dyn GroupSource>,
        committees: Box<dyn CommitteeSource>,
    ) -> Self {
        Self {
            projects,
            groups,
            committees,
        }
    }

    /// Runs the full batch transform.
    ///
    /// The two directory fetches are independent reads, so they run as a
    /// fan-out. An empty project collection is treated as a retrieval
    /// failure: the run logs one error and yields no report.
    pub async fn run(&self) -> anyhow::Result<Option<Report>> {
        let (projects, groups) = tokio::join!(self.projects.preload(), self.groups.preload());
        let (projects, groups) = (projects?, groups?);

        if projects.is_empty() {
            error!("{}", RostrError::EmptyProjects);
            return Ok(None);
        }

        let pmcs = self.committees.pmcs().await?;
        let wanted = wanted_set(&pmcs);
        let merged = merge(projects, groups);

        Ok(Some(build_report(merged, &wanted)))
    }
}
