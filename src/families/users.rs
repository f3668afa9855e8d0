//! User Activity Family
//!
//! # Metrics Produced
//! - one line per window under `ocs.data.activeUsers` (`last5minutes`,
//!   `last1hour`, ...), whatever subset the server reports
//! - `num_users` - total number of users

use super::{collect_fixed, collect_matching};
use crate::error::Result;
use crate::protocol::MetricLine;
use serde_json::Value;

pub const ACTIVE_USERS: &str = "/ocs/data/activeUsers";
pub const NUM_USERS: &str = "/ocs/data/nextcloud/storage/num_users";

pub const DECLARATION: &[&str] = &[
    "graph_title Nextcloud User Activity",
    "graph_args --base 1000 -l 0",
    "graph_printf %.0lf",
    "graph_vlabel connected users",
    "graph_info graph showing the number of connected user",
    "graph_category nextcloud",
    "last5minutes.label last 5 minutes",
    "last5minutes.info users connected in the last 5 minutes",
    "last5minutes.min 0",
    "last1hour.label last hour",
    "last1hour.info users connected in the last hour",
    "last1hour.min 0",
    "last24hours.label last 24 hours",
    "last24hours.info users connected in the last 24 hours",
    "last24hours.min 0",
    "last7days.label last 7 days",
    "last7days.info users connected in the last 7 days",
    "last7days.min 0",
    "last1month.label last month",
    "last1month.info users connected in the last month",
    "last1month.min 0",
    "last3months.label last 3 months",
    "last3months.info users connected in the last 3 months",
    "last3months.min 0",
    "last6months.label last 6 months",
    "last6months.info users connected in the last 6 months",
    "last6months.min 0",
    "lastyear.label last year",
    "lastyear.info users connected in the last year",
    "lastyear.min 0",
    "num_users.label number of users",
    "num_users.info total number of users",
    "num_users.min 0",
];

/// Active user windows in server order, then the total user count
pub fn collect_users(doc: &Value) -> Result<Vec<MetricLine>> {
    let mut lines = collect_matching(doc, ACTIVE_USERS, "", DECLARATION)?;
    // num_users comes from storage, never from the activity map
    lines.retain(|line| line.field != "num_users");
    lines.push(collect_fixed(doc, NUM_USERS, "num_users")?);
    Ok(lines)
}
