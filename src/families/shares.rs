//! Shares Family
//!
//! # Metrics Produced
//! - every `num*` counter under `ocs.data.nextcloud.shares`; the `permissions_*`
//!   breakdown the server also sends is left out

use super::collect_matching;
use crate::error::Result;
use crate::protocol::MetricLine;
use serde_json::Value;

pub const SHARES: &str = "/ocs/data/nextcloud/shares";

pub const DECLARATION: &[&str] = &[
    "graph_title Nextcloud Shares",
    "graph_args --base 1000 -l 0",
    "graph_vlabel number of shares",
    "graph_info graph showing the number of shares",
    "graph_category nextcloud",
    "num_fed_shares_received.label federated shares received",
    "num_fed_shares_received.info current total of federated shares received",
    "num_fed_shares_received.min 0",
    "num_fed_shares_sent.label federated shares sent",
    "num_fed_shares_sent.info current total of federated shares sent",
    "num_fed_shares_sent.min 0",
    "num_shares.label total number of shares",
    "num_shares.info current over all total of shares",
    "num_shares.min 0",
    "num_shares_groups.label group shares",
    "num_shares_groups.info current total of group shares",
    "num_shares_groups.min 0",
    "num_shares_link.label link shares",
    "num_shares_link.info current total of shares through a link",
    "num_shares_link.min 0",
    "num_shares_link_no_password.label link shares without a password",
    "num_shares_link_no_password.info current total of shares through a link without a password protection",
    "num_shares_link_no_password.min 0",
    "num_shares_mail.label mail shares",
    "num_shares_mail.info current total of shares by mail",
    "num_shares_mail.min 0",
    "num_shares_room.label talk room shares",
    "num_shares_room.info current total of shares into Talk rooms",
    "num_shares_room.min 0",
    "num_shares_user.label user shares",
    "num_shares_user.info current total of user shares",
    "num_shares_user.min 0",
];

pub fn collect_shares(doc: &Value) -> Result<Vec<MetricLine>> {
    collect_matching(doc, SHARES, "num", DECLARATION)
}
