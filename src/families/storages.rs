//! Storages Family
//!
//! # Metrics Produced
//! - `num_storages`, `num_storages_local`, `num_storages_home`,
//!   `num_storages_other` from `ocs.data.nextcloud.storage`

use super::collect_matching;
use crate::error::Result;
use crate::protocol::MetricLine;
use serde_json::Value;

pub const STORAGE: &str = "/ocs/data/nextcloud/storage";

pub const DECLARATION: &[&str] = &[
    "graph_title Nextcloud Storages",
    "graph_args --base 1000 -l 0",
    "graph_vlabel number",
    "graph_info graph showing the number of storages",
    "graph_category nextcloud",
    "num_storages.label total number of storages",
    "num_storages.info current over all total of storages",
    "num_storages.min 0",
    "num_storages_local.label number of local storages",
    "num_storages_local.info current over all total of storage",
    "num_storages_local.min 0",
    "num_storages_home.label number of home storages",
    "num_storages_home.info current over all total of storage",
    "num_storages_home.min 0",
    "num_storages_other.label number of other storages",
    "num_storages_other.info current over all total of storage",
    "num_storages_other.min 0",
];

/// Only `num_storages*` keys; `num_users` and `num_files` share the object
pub fn collect_storages(doc: &Value) -> Result<Vec<MetricLine>> {
    collect_matching(doc, STORAGE, "num_storages", DECLARATION)
}
