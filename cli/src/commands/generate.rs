use std::collections::HashSet;
use std::path::Path;
use std::time::{Duration, Instant};

use colored::*;
use tracing::warn;

use rostr_common::config::Config;
use rostr_common::records::Report;
use rostr_core::aggregator::{self, Aggregator};
use rostr_core::sink::{JsonFileSink, ReportSink, WriteOutcome};
use rostr_core::sources::IdentitySource;
use rostr_core::sources::snapshot::SnapshotStore;

use crate::terminal::{print, spinner};

pub async fn generate(snapshot: &Path, output: &Path, cfg: &Config) -> anyhow::Result<()> {
    let aggregator = Aggregator::new(
        Box::new(SnapshotStore::new(snapshot)),
        Box::new(SnapshotStore::new(snapshot)),
        Box::new(SnapshotStore::new(snapshot)),
    );

    let pb = (!cfg.quiet).then(|| spinner::start("Reading directory snapshot..."));
    let start_time = Instant::now();
    let report = aggregator.run().await;
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    // Empty project data is a clean no-op: the error is already logged and
    // any previously written report stays untouched.
    let Some(report) = report? else {
        return Ok(());
    };

    let sink = JsonFileSink::new(output);
    let outcome = sink.write(&report)?;

    if should_validate(outcome, cfg) {
        let identities = SnapshotStore::new(snapshot);
        validate(&identities, &report).await?;
    }

    if !cfg.quiet {
        summary(&report, output, outcome, start_time.elapsed());
    }

    Ok(())
}

/// Identity validation runs only when a freshly written report replaced a
/// previously existing one. First writes and unchanged rewrites skip it.
fn should_validate(outcome: WriteOutcome, cfg: &Config) -> bool {
    outcome.changed && outcome.had_previous && !cfg.no_validate
}

async fn validate(identities: &dyn IdentitySource, report: &Report) -> anyhow::Result<()> {
    let canonical: HashSet<String> = identities.list().await?.into_iter().collect();
    for (name, uid) in aggregator::unknown_uids(report, &canonical) {
        warn!("{name}: unknown uid '{uid}'");
    }
    Ok(())
}

fn summary(report: &Report, output: &Path, outcome: WriteOutcome, total_time: Duration) {
    let status = if outcome.changed {
        "updated".green().bold()
    } else {
        "unchanged".yellow().bold()
    };

    print::header("Roster Report");
    print::aligned_line("Groups", report.group_count.to_string().green().bold());
    print::aligned_line(
        "Last modified",
        if report.last_timestamp.is_empty() {
            "n/a".dimmed()
        } else {
            report.last_timestamp.as_str().normal()
        },
    );
    print::aligned_line("Output", format!("{} ({})", output.display(), status));
    print::aligned_line(
        "Took",
        format!("{:.2}s", total_time.as_secs_f64()).yellow(),
    );
    print::end_of_program();
}
