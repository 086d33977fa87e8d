use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use rostr_common::records::Report;
use rostr_core::aggregator;
use rostr_core::sources::IdentitySource;
use rostr_core::sources::snapshot::SnapshotStore;

pub async fn check(report_path: &Path, snapshot: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(report_path)
        .with_context(|| format!("reading report {}", report_path.display()))?;
    let report: Report = serde_json::from_str(&raw)
        .with_context(|| format!("parsing report {}", report_path.display()))?;

    let store = SnapshotStore::new(snapshot);
    let canonical: HashSet<String> = store.list().await?.into_iter().collect();

    let unknown = aggregator::unknown_uids(&report, &canonical);
    for (name, uid) in &unknown {
        warn!("{name}: unknown uid '{uid}'");
    }

    let total: usize = report.groups.values().map(|e| e.roster.len()).sum();
    if unknown.is_empty() {
        info!(
            "all {total} roster uids across {} groups are known",
            report.group_count
        );
    } else {
        info!(
            "{} of {total} roster uids are unknown to the identity list",
            unknown.len()
        );
    }

    Ok(())
}
