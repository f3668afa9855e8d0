//! Plugin configuration
//!
//! Munin hands plugin settings over as environment variables (`env.username`,
//! `env.password` and `env.url` in the plugin-conf.d section), plus the
//! `MUNIN_CAP_DIRTYCONFIG` capability flag set by munin-node. Everything is read
//! once at start-up into [`Config`] and passed down explicitly from there.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Config {
    pub nextcloud: NextcloudConfig,
    pub munin: MuninConfig,
}

#[derive(Debug, Clone)]
pub struct NextcloudConfig {
    /// Full serverinfo endpoint, e.g.
    /// `https://cloud.example.org/ocs/v2.php/apps/serverinfo/api/v1/info`
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub verify_ssl: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MuninConfig {
    pub cap_dirtyconfig: Option<String>,
}

/// Flat view of the environment; munin variables carry no common prefix.
/// Keys arrive lowercased from the `config` environment source.
#[derive(Debug, Deserialize)]
struct EnvVars {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<SecretString>,
    #[serde(default = "default_verify_ssl")]
    verify_ssl: bool,
    #[serde(default)]
    munin_cap_dirtyconfig: Option<String>,
}

fn default_verify_ssl() -> bool {
    true
}

impl From<EnvVars> for Config {
    fn from(vars: EnvVars) -> Self {
        Self {
            nextcloud: NextcloudConfig {
                url: vars.url,
                username: vars.username,
                password: vars.password,
                verify_ssl: vars.verify_ssl,
            },
            munin: MuninConfig {
                cap_dirtyconfig: vars.munin_cap_dirtyconfig,
            },
        }
    }
}

impl NextcloudConfig {
    /// Both credentials are present. Says nothing about whether the server
    /// accepts them.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl MuninConfig {
    /// munin-node wants values printed right after `config`
    pub fn dirty_config(&self) -> bool {
        self.cap_dirtyconfig.as_deref() == Some("1")
    }
}

/// Environment variables the plugins read, matched case-sensitively.
/// The `config` environment source lowercases keys, so anything else
/// (`USERNAME`, `URL`, ...) is dropped before it gets there.
pub const ENV_KEYS: [&str; 5] = [
    "url",
    "username",
    "password",
    "verify_ssl",
    "MUNIN_CAP_DIRTYCONFIG",
];

impl Config {
    /// Loads configuration from the process environment
    pub fn load() -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Self::from_env_map(vars)
    }

    /// Loads configuration from an explicit variable map instead of the
    /// process environment
    pub fn from_env_map<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = vars
            .into_iter()
            .map(|(k, v)| -> (String, String) { (k.into(), v.into()) })
            .filter(|(k, _)| ENV_KEYS.contains(&k.as_str()))
            .collect::<config::Map<String, String>>();

        Self::build(config::Environment::default().source(Some(map)))
    }

    fn build(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(env)
            .build()
            .context("Failed to build configuration")?;

        let vars: EnvVars = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Ok(vars.into())
    }
}
