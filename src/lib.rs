//! Nextcloud Munin Plugins
//!
//! Munin plugins reporting statistics from the Nextcloud `serverinfo` app.
//!
//! # Overview
//!
//! Every run issues at most one GET against the serverinfo OCS endpoint and
//! prints the result in Munin's plugin protocol. One binary covers every graph;
//! the graph is picked from the name munin invokes it under (`nextcloud_users`,
//! `nextcloud_shares`, ..., `nextcloud_multi`).
//!
//! ```text
//! ┌────────────┐   fork + argv    ┌───────────────────┐   GET + basic auth   ┌───────────┐
//! │ munin-node │ ───────────────► │  nextcloud_munin  │ ───────────────────► │ Nextcloud │
//! │            │ ◄─────────────── │                   │ ◄─────────────────── │ serverinfo│
//! └────────────┘  stdout (lines)  └───────────────────┘        JSON          └───────────┘
//! ```
//!
//! # Modules
//!
//! - [`plugin`] - invocation modes and output assembly
//! - [`families`] - graph declarations and response mapping per metric family
//! - [`nextcloud`] - HTTP client and serverinfo reply helpers
//! - [`protocol`] - Munin line formatting
//! - [`config`] - environment-sourced configuration
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use nextcloud_munin::config::Config;
//! use nextcloud_munin::plugin::{self, Mode, Plugin};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let mut out = std::io::stdout().lock();
//!     plugin::run(Plugin::Multi, Mode::Fetch, &config, &mut out).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod families;
pub mod nextcloud;
pub mod plugin;
pub mod protocol;
