//! Available App Updates Family
//!
//! # Metrics Produced
//! - `num_updates_available` - apps with a pending update
//!
//! Servers before Nextcloud 14 do not report app updates at all. For those the
//! family yields no lines instead of failing.

use super::collect_fixed;
use crate::error::{PluginError, Result};
use crate::nextcloud::types::{lookup, major_version};
use crate::protocol::MetricLine;
use serde_json::Value;
use tracing::debug;

pub const VERSION: &str = "/ocs/data/nextcloud/system/version";
pub const NUM_UPDATES_AVAILABLE: &str = "/ocs/data/nextcloud/system/apps/num_updates_available";

/// First major release reporting `num_updates_available`
pub const MIN_MAJOR_VERSION: u32 = 14;

pub const DECLARATION: &[&str] = &[
    "graph_title Nextcloud available App updates",
    "graph_args --base 1000 -l 0",
    "graph_vlabel updates available",
    "graph_info graph showing the number of available app updates",
    "graph_category nextcloud",
    "num_updates_available.label available app updates",
    "num_updates_available.info number of available app updates",
    "num_updates_available.min 0",
    "num_updates_available.warning 1",
];

pub fn collect_available_updates(doc: &Value) -> Result<Vec<MetricLine>> {
    let version = lookup(doc, VERSION)?;
    let version = version
        .as_str()
        .ok_or_else(|| PluginError::InvalidVersion(version.to_string()))?;

    let major = major_version(version)?;
    if major < MIN_MAJOR_VERSION {
        debug!("Nextcloud {} does not report app updates", version);
        return Ok(Vec::new());
    }

    Ok(vec![collect_fixed(
        doc,
        NUM_UPDATES_AVAILABLE,
        "num_updates_available",
    )?])
}
