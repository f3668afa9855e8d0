//! Response mapping tests
//!
//! Tests that verify each family extracts the right fields from a serverinfo
//! document and nothing else.

mod common;

use nextcloud_munin::error::PluginError;
use nextcloud_munin::families::{
    collect_available_updates, collect_dbsize, collect_filecount, collect_shares,
    collect_storages, collect_users, Family,
};
use nextcloud_munin::protocol::{declared_fields, MetricLine};
use serde_json::json;

fn rendered(lines: &[MetricLine]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[test]
fn test_users_end_to_end() {
    // Given: Three activity windows and a total of 100 users
    let doc = common::serverinfo("25.0.3");

    // When: Collecting the users family
    let lines = collect_users(&doc).expect("users should collect");

    // Then: Four lines in declared order
    assert_eq!(
        rendered(&lines),
        vec![
            "last5minutes.value 3",
            "last1hour.value 10",
            "last24hours.value 40",
            "num_users.value 100",
        ]
    );
}

#[test]
fn test_users_with_extended_windows() {
    // Given: A newer server reporting more activity windows
    let mut doc = common::serverinfo("28.0.1");
    doc["ocs"]["data"]["activeUsers"] = json!({
        "last5minutes": 1,
        "last1hour": 2,
        "last24hours": 3,
        "last7days": 4,
        "last1month": 5,
        "last3months": 6,
        "last6months": 7,
        "lastyear": 8
    });

    // When: Collecting the users family
    let lines = collect_users(&doc).unwrap();

    // Then: Every window is forwarded followed by the total
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[3], MetricLine::new("last7days", "4"));
    assert_eq!(lines[7], MetricLine::new("lastyear", "8"));
    assert_eq!(lines[8], MetricLine::new("num_users", "100"));
}

#[test]
fn test_users_drops_undeclared_keys() {
    // Given: An activity window the plugin does not declare
    let mut doc = common::serverinfo("25.0.3");
    doc["ocs"]["data"]["activeUsers"] = json!({"last5minutes": 1, "last2fortnights": 9});

    // When: Collecting the users family
    let lines = collect_users(&doc).unwrap();

    // Then: Only declared fields are reported
    assert_eq!(
        rendered(&lines),
        vec!["last5minutes.value 1", "num_users.value 100"]
    );
}

#[test]
fn test_shares_prefix_filter() {
    // Given: A shares object with a non-counter key
    let doc = json!({"ocs": {"data": {"nextcloud": {"shares": {
        "num_shares": 5,
        "other_field": "x",
        "num_shares_link": 2
    }}}}});

    // When: Collecting the shares family
    let lines = collect_shares(&doc).unwrap();

    // Then: Only the num* keys are reported
    assert_eq!(
        rendered(&lines),
        vec!["num_shares.value 5", "num_shares_link.value 2"]
    );
}

#[test]
fn test_shares_skip_permission_breakdown() {
    let lines = collect_shares(&common::serverinfo("25.0.3")).unwrap();

    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|l| l.field.starts_with("num")));
    assert!(lines.contains(&MetricLine::new("num_fed_shares_received", "2")));
}

#[test]
fn test_storages_only_storage_counters() {
    let lines = collect_storages(&common::serverinfo("25.0.3")).unwrap();

    assert_eq!(
        rendered(&lines),
        vec![
            "num_storages.value 104",
            "num_storages_local.value 2",
            "num_storages_home.value 100",
            "num_storages_other.value 2",
        ]
    );
}

#[test]
fn test_dbsize_and_filecount() {
    let doc = common::serverinfo("25.0.3");

    assert_eq!(
        rendered(&collect_dbsize(&doc).unwrap()),
        vec!["db_size.value 73580544"]
    );
    assert_eq!(
        rendered(&collect_filecount(&doc).unwrap()),
        vec!["num_files.value 48213"]
    );
}

#[test]
fn test_dbsize_reported_as_string() {
    // Given: An older server reporting the database size as a string
    let mut doc = common::serverinfo("12.0.4");
    doc["ocs"]["data"]["server"]["database"]["size"] = json!("1048576");

    // When: Collecting the dbsize family
    let lines = collect_dbsize(&doc).unwrap();

    // Then: The string is forwarded without quotes
    assert_eq!(rendered(&lines), vec!["db_size.value 1048576"]);
}

#[test]
fn test_float_values_keep_their_text() {
    let mut doc = common::serverinfo("25.0.3");
    doc["ocs"]["data"]["server"]["database"]["size"] = json!(1.5);

    assert_eq!(
        rendered(&collect_dbsize(&doc).unwrap()),
        vec!["db_size.value 1.5"]
    );
}

#[test]
fn test_available_updates_version_gate() {
    // Given: The same document at versions either side of 14
    let new = common::serverinfo("14.0.0");
    let old = common::serverinfo("13.0.9");

    // When: Collecting available updates
    let new_lines = collect_available_updates(&new).unwrap();
    let old_lines = collect_available_updates(&old).unwrap();

    // Then: Only the newer server reports updates
    assert_eq!(rendered(&new_lines), vec!["num_updates_available.value 2"]);
    assert!(old_lines.is_empty());
}

#[test]
fn test_available_updates_old_server_without_apps_section() {
    // Given: A pre-14 document without the apps object at all
    let doc = json!({"ocs": {"data": {"nextcloud": {"system": {"version": "11.0.3"}}}}});

    // When: Collecting available updates
    let result = collect_available_updates(&doc);

    // Then: No error and no lines
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_missing_path_names_the_pointer() {
    // Given: A document without the server section
    let mut doc = common::serverinfo("25.0.3");
    doc["ocs"]["data"]
        .as_object_mut()
        .unwrap()
        .remove("server");

    // When: Collecting dbsize
    let err = collect_dbsize(&doc).unwrap_err();

    // Then: The error points at the missing field
    match err {
        PluginError::MissingField { path } => assert_eq!(path, "/ocs/data/server/database/size"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_collected_fields_are_always_declared() {
    // Given: A full document
    let doc = common::serverinfo("25.0.3");

    for family in Family::ALL {
        // When: Collecting each family
        let lines = family.collect(&doc).unwrap();
        let declared = declared_fields(family.declaration());

        // Then: Every field has a label in the declaration
        for line in lines {
            assert!(
                declared.contains(&line.field.as_str()),
                "{} emitted undeclared field {}",
                family,
                line.field
            );
        }
    }
}
