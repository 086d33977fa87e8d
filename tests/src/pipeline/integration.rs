//! End-to-end pipeline tests against in-memory stub sources.
//!
//! These exercise the worked scenarios from the report's compatibility
//! contract: exact wire format, promotion of legacy extras, project-wins
//! precedence and the empty-result abort.

use async_trait::async_trait;
use rostr_common::records::{GroupRecord, Person, ProjectRecord, Report};
use rostr_core::aggregator::Aggregator;
use rostr_core::sources::{CommitteeSource, GroupSource, ProjectSource};

struct StubProjects(Vec<ProjectRecord>);
struct StubGroups(Vec<GroupRecord>);
struct StubCommittees(Vec<String>);

#[async_trait]
impl ProjectSource for StubProjects {
    async fn preload(&self) -> anyhow::Result<Vec<ProjectRecord>> {
        Ok(self.0.clone())
    }
}

#[async_trait]
impl GroupSource for StubGroups {
    async fn preload(&self) -> anyhow::Result<Vec<GroupRecord>> {
        Ok(self.0.clone())
    }
}

#[async_trait]
impl CommitteeSource for StubCommittees {
    async fn pmcs(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

fn project(name: &str, stamp: &str, members: &[&str]) -> ProjectRecord {
    ProjectRecord {
        name: name.into(),
        create_timestamp: None,
        modify_timestamp: stamp.into(),
        members: members.iter().map(|m| Person::new(*m)).collect(),
        owners: Vec::new(),
    }
}

fn group(name: &str, stamp: &str, members: &[&str]) -> GroupRecord {
    GroupRecord {
        name: name.into(),
        create_timestamp: None,
        modify_timestamp: stamp.into(),
        members: members.iter().map(|m| Person::new(*m)).collect(),
    }
}

async fn run(
    projects: Vec<ProjectRecord>,
    groups: Vec<GroupRecord>,
    pmcs: &[&str],
) -> Option<Report> {
    let aggregator = Aggregator::new(
        Box::new(StubProjects(projects)),
        Box::new(StubGroups(groups)),
        Box::new(StubCommittees(
            pmcs.iter().map(|s| s.to_string()).collect(),
        )),
    );
    aggregator.run().await.unwrap()
}

#[tokio::test]
async fn single_project_matches_the_wire_format_exactly() {
    let report = run(
        vec![project("abdera", "20111204095436Z", &["bob", "alice"])],
        Vec::new(),
        &["abdera"],
    )
    .await
    .unwrap();

    let expected = concat!(
        r#"{"lastTimestamp":"20111204095436Z","group_count":1,"#,
        r#""roster_counts":{"abdera":2},"#,
        r#""groups":{"abdera":{"createTimestamp":null,"modifyTimestamp":"20111204095436Z","#,
        r#""roster_count":2,"roster":["alice","bob"]}}}"#
    );
    assert_eq!(serde_json::to_string(&report).unwrap(), expected);
}

#[tokio::test]
async fn extras_group_is_promoted_even_without_a_committee() {
    let report = run(
        vec![project("abdera", "20111204095436Z", &["alice"])],
        vec![group("infra", "20120101000000Z", &["carol"])],
        &["abdera"],
    )
    .await
    .unwrap();

    assert_eq!(report.groups["infra"].roster, vec!["carol"]);
    assert_eq!(report.roster_counts["infra"], 1);
}

#[tokio::test]
async fn project_version_shadows_the_group_version() {
    let report = run(
        vec![project("member", "20150101000000Z", &["dave"])],
        vec![group("member", "20140101000000Z", &["eve"])],
        &[],
    )
    .await
    .unwrap();

    assert_eq!(report.groups["member"].roster, vec!["dave"]);
    assert_eq!(report.group_count, 1);
}

#[tokio::test]
async fn empty_projects_abort_without_a_report() {
    let report = run(
        Vec::new(),
        vec![group("infra", "20120101000000Z", &["carol"])],
        &["abdera"],
    )
    .await;

    assert!(report.is_none());
}

#[tokio::test]
async fn last_timestamp_is_the_maximum_across_all_published_groups() {
    let report = run(
        vec![
            project("abdera", "20111204095436Z", &["alice"]),
            project("httpd", "20160119171152Z", &["bob"]),
            project("zookeeper", "20130101000000Z", &["carol"]),
        ],
        Vec::new(),
        &["abdera", "httpd", "zookeeper"],
    )
    .await
    .unwrap();

    assert_eq!(report.last_timestamp, "20160119171152Z");
    for entry in report.groups.values() {
        assert!(entry.modify_timestamp <= report.last_timestamp);
    }
}

#[tokio::test]
async fn key_sets_and_counts_stay_consistent_over_a_mixed_input() {
    let report = run(
        vec![
            project("abdera", "3", &["b", "a", "c"]),
            project("not-wanted", "9", &["x"]),
        ],
        vec![
            group("committers", "2", &["alice", "bob"]),
            group("random-group", "8", &["y"]),
        ],
        &["abdera"],
    )
    .await
    .unwrap();

    let group_keys: Vec<_> = report.groups.keys().cloned().collect();
    let count_keys: Vec<_> = report.roster_counts.keys().cloned().collect();
    assert_eq!(group_keys, count_keys);
    assert_eq!(group_keys, vec!["abdera", "committers"]);
    for (name, entry) in &report.groups {
        assert_eq!(entry.roster_count, entry.roster.len());
        assert_eq!(report.roster_counts[name], entry.roster.len());
        let mut sorted = entry.roster.clone();
        sorted.sort();
        assert_eq!(sorted, entry.roster);
    }
    // Neither excluded name's stamp may win the max.
    assert_eq!(report.last_timestamp, "3");
}

#[tokio::test]
async fn two_runs_over_identical_input_are_byte_identical() {
    let input = || {
        (
            vec![
                project("httpd", "20160119171152Z", &["bob", "alice"]),
                project("abdera", "20111204095436Z", &["carol"]),
            ],
            vec![group("infra", "20120101000000Z", &["dave"])],
        )
    };

    let (projects, groups) = input();
    let first = run(projects, groups, &["abdera", "httpd"]).await.unwrap();
    let (projects, groups) = input();
    let second = run(projects, groups, &["abdera", "httpd"]).await.unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
