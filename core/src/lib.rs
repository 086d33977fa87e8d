//! rostr-core: roster aggregation engine
//!
//! Turns a directory-service snapshot (projects plus legacy groups) and the
//! committee source of truth into one published JSON report:
//! - Sources: trait seams for the four external collaborators, with a
//!   file-backed snapshot implementation
//! - Aggregator: merge, filter, sort and summarize into the report
//! - Sink: change-aware persistence of the report

pub mod aggregator;
pub mod sink;
pub mod sources;

// Re-exports for convenience
pub use aggregator::{Aggregator, EXTRAS, build_report, merge, unknown_uids, wanted_set};
pub use sink::{JsonFileSink, ReportSink, WriteOutcome};
pub use sources::{
    CommitteeSource, GroupSource, IdentitySource, ProjectSource, snapshot::SnapshotStore,
};
