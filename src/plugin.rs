//! Invocation dispatch
//!
//! munin-node runs a plugin in one of three ways:
//!
//! - no argument: fetch current values
//! - `config`: print graph metadata, followed by values when munin-node
//!   announced the `dirtyconfig` capability
//! - `autoconf`: answer whether the plugin can run here (`munin-node-configure`)
//!
//! Remote failures are reported as one line on stdout and the run still exits
//! successfully; munin simply records no values for that poll.

use crate::config::{Config, NextcloudConfig};
use crate::error::{PluginError, Result};
use crate::families::Family;
use crate::nextcloud::{ApiReply, NextcloudClient, RemoteStatus};
use crate::protocol::{write_declaration, write_multigraph, write_values};
use anyhow::Context;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Which graphs a plugin run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plugin {
    Single(Family),
    /// All families, one multigraph section each
    Multi,
}

impl Plugin {
    pub fn families(&self) -> &'static [Family] {
        match self {
            Plugin::Single(Family::Users) => &[Family::Users],
            Plugin::Single(Family::Shares) => &[Family::Shares],
            Plugin::Single(Family::DbSize) => &[Family::DbSize],
            Plugin::Single(Family::AvailableUpdates) => &[Family::AvailableUpdates],
            Plugin::Single(Family::Storages) => &[Family::Storages],
            Plugin::Single(Family::FileCount) => &[Family::FileCount],
            Plugin::Multi => &Family::ALL,
        }
    }

    pub fn is_multigraph(&self) -> bool {
        matches!(self, Plugin::Multi)
    }

    /// Resolves the plugin from the name munin invoked us under, e.g.
    /// `/etc/munin/plugins/nextcloud_shares`
    pub fn from_program_name(program: &str) -> Option<Plugin> {
        let name = Path::new(program).file_name()?.to_str()?;
        let name = name.strip_prefix("nextcloud_").unwrap_or(name);
        name.parse().ok()
    }
}

impl FromStr for Plugin {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "multi" => Ok(Plugin::Multi),
            other => other
                .parse::<Family>()
                .map(Plugin::Single)
                .map_err(|_| format!("unknown plugin: {}", other)),
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plugin::Single(family) => write!(f, "{}", family),
            Plugin::Multi => f.write_str("multi"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Fetch,
    Config,
    Autoconf,
    /// Anything else munin (or a typo) passed; ignored
    Unknown(String),
}

impl Mode {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Mode::Fetch,
            Some("config") => Mode::Config,
            Some("autoconf") => Mode::Autoconf,
            Some(other) => Mode::Unknown(other.to_string()),
        }
    }
}

/// Graph metadata for every family of the plugin
pub fn write_config<W: Write>(plugin: Plugin, out: &mut W) -> Result<()> {
    for family in plugin.families() {
        if plugin.is_multigraph() {
            write_multigraph(out, family.section())?;
        }
        write_declaration(out, family.declaration())?;
    }
    Ok(())
}

/// Presence check only; never contacts the server
pub fn write_autoconf<W: Write>(config: &NextcloudConfig, out: &mut W) -> Result<()> {
    if config.has_credentials() {
        writeln!(out, "yes")?;
    } else {
        writeln!(out, "env variables are missing")?;
    }
    Ok(())
}

/// Renders a serverinfo reply: either value lines or the single status line
pub fn report<W: Write>(plugin: Plugin, reply: &ApiReply, out: &mut W) -> Result<()> {
    let status = reply.remote_status();
    if let Some(message) = status.message() {
        if let RemoteStatus::Unknown(code) = status {
            warn!("serverinfo returned unexpected status {}", code);
        }
        writeln!(out, "{}", message)?;
        return Ok(());
    }

    let doc = reply.body.as_ref().ok_or_else(|| PluginError::MissingField {
        path: "/".to_string(),
    })?;

    for family in plugin.families() {
        let values = match family.collect(doc) {
            Ok(values) => values,
            Err(e) => {
                warn!("Failed to collect {} metrics: {}", family, e);
                continue;
            }
        };

        // Sections without values are left out, marker included
        if values.is_empty() {
            debug!("No {} metrics to report", family);
            continue;
        }

        if plugin.is_multigraph() {
            write_multigraph(out, family.section())?;
        }
        write_values(out, &values)?;
    }

    Ok(())
}

pub async fn fetch_and_report<W: Write>(
    plugin: Plugin,
    client: &NextcloudClient,
    out: &mut W,
) -> Result<()> {
    let reply = client.fetch().await?;
    report(plugin, &reply, out)
}

/// Entry point taking the outcome of [`Config::load`].
///
/// `config` needs nothing from the environment, so an unusable configuration
/// still prints the declaration there; every other mode fails with it.
pub async fn start<W: Write>(
    plugin: Plugin,
    mode: Mode,
    config: anyhow::Result<Config>,
    out: &mut W,
) -> anyhow::Result<()> {
    let config = match (config, &mode) {
        (Ok(config), _) => config,
        (Err(e), Mode::Config) => {
            warn!("Configuration unusable, printing declaration only: {:#}", e);
            write_config(plugin, out)?;
            return Ok(());
        }
        (Err(e), _) => return Err(e),
    };

    run(plugin, mode, &config, out)
        .await
        .with_context(|| format!("nextcloud {} plugin failed", plugin))
}

/// Runs one plugin invocation
pub async fn run<W: Write>(plugin: Plugin, mode: Mode, config: &Config, out: &mut W) -> Result<()> {
    // Building the client does not touch the network
    let client = NextcloudClient::new(config.nextcloud.clone())?;
    execute(plugin, mode, config, &client, out).await
}

/// [`run`] with an already built client
pub async fn execute<W: Write>(
    plugin: Plugin,
    mode: Mode,
    config: &Config,
    client: &NextcloudClient,
    out: &mut W,
) -> Result<()> {
    info!("Running nextcloud {} plugin in {:?} mode", plugin, mode);

    match mode {
        Mode::Fetch => fetch_and_report(plugin, client, out).await,
        Mode::Config => {
            write_config(plugin, out)?;
            if config.munin.dirty_config() {
                fetch_and_report(plugin, client, out).await?;
            }
            Ok(())
        }
        Mode::Autoconf => write_autoconf(&config.nextcloud, out),
        Mode::Unknown(arg) => {
            debug!("Ignoring unsupported argument {:?}", arg);
            Ok(())
        }
    }
}
