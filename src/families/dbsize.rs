//! Database Size Family
//!
//! # Metrics Produced
//! - `db_size` - database size in bytes

use super::collect_fixed;
use crate::error::Result;
use crate::protocol::MetricLine;
use serde_json::Value;

pub const DB_SIZE: &str = "/ocs/data/server/database/size";

pub const DECLARATION: &[&str] = &[
    "graph_title Nextcloud Database Size",
    "graph_args --base 1024 -l 0",
    "graph_vlabel size in byte",
    "graph_info graph showing the database size in byte",
    "graph_category nextcloud",
    "db_size.label database size in byte",
    "db_size.info size of the Nextcloud database in byte",
    "db_size.draw AREA",
    "db_size.min 0",
];

pub fn collect_dbsize(doc: &Value) -> Result<Vec<MetricLine>> {
    Ok(vec![collect_fixed(doc, DB_SIZE, "db_size")?])
}
