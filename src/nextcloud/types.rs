//! Nextcloud serverinfo reply types
//!
//! The serverinfo document is consumed as a raw [`serde_json::Value`]: its shape
//! shifts between Nextcloud releases and several maps (`activeUsers`, `shares`)
//! carry server-chosen keys, so only the paths below are treated as contract.
//!
//! ```text
//! ocs.data.activeUsers.*                          users
//! ocs.data.nextcloud.storage.num_users            users
//! ocs.data.nextcloud.shares.num*                  shares
//! ocs.data.server.database.size                   dbsize
//! ocs.data.nextcloud.system.version               available_updates (gate)
//! ocs.data.nextcloud.system.apps.num_updates_available
//! ocs.data.nextcloud.storage.num_storages*        storages
//! ocs.data.nextcloud.storage.num_files            filecount
//! ```

use crate::error::{PluginError, Result};
use serde_json::{Map, Value};

/// Status plus body of a single serverinfo request
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    /// Parsed only when `status` is 200
    pub body: Option<Value>,
}

impl ApiReply {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    pub fn remote_status(&self) -> RemoteStatus {
        RemoteStatus::from_code(self.status)
    }
}

/// Outcome of the request as signalled by the server's status code.
///
/// 996-998 are Nextcloud OCS codes, not standard HTTP ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    Ok,
    ServerError,
    NotAuthorized,
    NotFound,
    Unknown(u16),
}

impl RemoteStatus {
    pub fn from_code(code: u16) -> Self {
        match code {
            200 => RemoteStatus::Ok,
            996 => RemoteStatus::ServerError,
            997 => RemoteStatus::NotAuthorized,
            998 => RemoteStatus::NotFound,
            other => RemoteStatus::Unknown(other),
        }
    }

    /// Line printed instead of metrics, `None` for a successful reply
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RemoteStatus::Ok => None,
            RemoteStatus::ServerError => Some("server error"),
            RemoteStatus::NotAuthorized => Some("not authorized"),
            RemoteStatus::NotFound => Some("not found"),
            RemoteStatus::Unknown(_) => Some("unknown error"),
        }
    }
}

/// Looks up a JSON pointer, failing with the pointer as context
pub fn lookup<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Value> {
    doc.pointer(pointer).ok_or_else(|| PluginError::MissingField {
        path: pointer.to_string(),
    })
}

/// Looks up a JSON pointer that must resolve to an object
pub fn lookup_object<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Map<String, Value>> {
    lookup(doc, pointer)?
        .as_object()
        .ok_or_else(|| PluginError::InvalidValue {
            path: pointer.to_string(),
        })
}

/// Textual form of a metric value.
///
/// Numbers keep serde_json's rendering, strings are passed through without
/// quotes (older servers report the database size as a string). Anything else
/// is not a metric.
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Leading numeric component of a dotted version string, `"25.0.3"` -> 25
pub fn major_version(version: &str) -> Result<u32> {
    version
        .split('.')
        .next()
        .map(str::trim)
        .and_then(|major| major.parse().ok())
        .ok_or_else(|| PluginError::InvalidVersion(version.to_string()))
}
