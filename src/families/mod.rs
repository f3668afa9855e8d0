//! Metric families
//!
//! Each family owns one Munin graph: a static declaration printed for `config`
//! and a collector that maps the serverinfo document to value lines.
//!
//! # Architecture
//!
//! Collectors follow a consistent pattern:
//! - Resolve a fixed JSON pointer into the serverinfo document
//! - Keep only fields the family's declaration knows about
//! - Return the value lines in the document's key order
//!
//! # Error Handling
//!
//! A missing path fails only the family that needs it. The caller logs it and
//! carries on with the next family, so a multigraph run still reports the
//! sections the server did provide.

use crate::error::{PluginError, Result};
use crate::nextcloud::types::{lookup, lookup_object, render_value};
use crate::protocol::{declared_fields, MetricLine};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub mod available_updates;
pub mod dbsize;
pub mod filecount;
pub mod shares;
pub mod storages;
pub mod users;

pub use available_updates::collect_available_updates;
pub use dbsize::collect_dbsize;
pub use filecount::collect_filecount;
pub use shares::collect_shares;
pub use storages::collect_storages;
pub use users::collect_users;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Users,
    Shares,
    DbSize,
    AvailableUpdates,
    Storages,
    FileCount,
}

impl Family {
    /// Multigraph section order
    pub const ALL: [Family; 6] = [
        Family::Users,
        Family::Shares,
        Family::DbSize,
        Family::AvailableUpdates,
        Family::Storages,
        Family::FileCount,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Family::Users => "users",
            Family::Shares => "shares",
            Family::DbSize => "dbsize",
            Family::AvailableUpdates => "available_updates",
            Family::Storages => "storages",
            Family::FileCount => "filecount",
        }
    }

    /// Name used after `multigraph`
    pub fn section(&self) -> &'static str {
        match self {
            Family::Users => "nextcloud_users",
            Family::Shares => "nextcloud_shares",
            Family::DbSize => "nextcloud_dbsize",
            Family::AvailableUpdates => "nextcloud_available_updates",
            Family::Storages => "nextcloud_storages",
            Family::FileCount => "nextcloud_filecount",
        }
    }

    pub fn declaration(&self) -> &'static [&'static str] {
        match self {
            Family::Users => users::DECLARATION,
            Family::Shares => shares::DECLARATION,
            Family::DbSize => dbsize::DECLARATION,
            Family::AvailableUpdates => available_updates::DECLARATION,
            Family::Storages => storages::DECLARATION,
            Family::FileCount => filecount::DECLARATION,
        }
    }

    pub fn collect(&self, doc: &Value) -> Result<Vec<MetricLine>> {
        match self {
            Family::Users => collect_users(doc),
            Family::Shares => collect_shares(doc),
            Family::DbSize => collect_dbsize(doc),
            Family::AvailableUpdates => collect_available_updates(doc),
            Family::Storages => collect_storages(doc),
            Family::FileCount => collect_filecount(doc),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "users" => Ok(Family::Users),
            "shares" => Ok(Family::Shares),
            "dbsize" => Ok(Family::DbSize),
            // the standalone script was shipped as nextcloud_apps
            "available_updates" | "apps" => Ok(Family::AvailableUpdates),
            "storages" => Ok(Family::Storages),
            "filecount" => Ok(Family::FileCount),
            other => Err(format!("unknown metric family: {}", other)),
        }
    }
}

/// Forwards every key of the object at `pointer` that starts with `prefix` and
/// is declared in `declaration`, in document order.
///
/// Keys are server-chosen, so nothing here assumes a fixed set: absent keys are
/// simply not reported, undeclared or non-numeric ones are dropped.
pub fn collect_matching(
    doc: &Value,
    pointer: &str,
    prefix: &str,
    declaration: &[&str],
) -> Result<Vec<MetricLine>> {
    let declared = declared_fields(declaration);
    let object = lookup_object(doc, pointer)?;

    let mut lines = Vec::new();
    for (key, value) in object {
        if !key.starts_with(prefix) {
            continue;
        }
        if !declared.contains(&key.as_str()) {
            debug!("Skipping undeclared field {} under {}", key, pointer);
            continue;
        }
        match render_value(value) {
            Some(rendered) => lines.push(MetricLine::new(key.as_str(), rendered)),
            None => debug!("Skipping non-numeric field {} under {}", key, pointer),
        }
    }

    Ok(lines)
}

/// Reads one field at a fixed pointer
pub fn collect_fixed(doc: &Value, pointer: &str, field: &str) -> Result<MetricLine> {
    let value = lookup(doc, pointer)?;
    render_value(value)
        .map(|rendered| MetricLine::new(field, rendered))
        .ok_or_else(|| PluginError::InvalidValue {
            path: pointer.to_string(),
        })
}
