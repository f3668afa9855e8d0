//! File Count Family
//!
//! # Metrics Produced
//! - `num_files` - number of files known to the file cache

use super::collect_fixed;
use crate::error::Result;
use crate::protocol::MetricLine;
use serde_json::Value;

pub const NUM_FILES: &str = "/ocs/data/nextcloud/storage/num_files";

pub const DECLARATION: &[&str] = &[
    "graph_title Nextcloud Files",
    "graph_args --base 1000 -l 0",
    "graph_vlabel number of files",
    "graph_info graph showing the number of files",
    "graph_category nextcloud",
    "num_files.label number of files",
    "num_files.info current number of files in the repository",
    "num_files.min 0",
];

pub fn collect_filecount(doc: &Value) -> Result<Vec<MetricLine>> {
    Ok(vec![collect_fixed(doc, NUM_FILES, "num_files")?])
}
