//! Nextcloud serverinfo HTTP client
//!
//! One session, one GET per plugin run. Munin polls every few minutes and is
//! the retry loop, so there is no retry or explicit timeout here.
//!
//! # Example
//!
//! ```no_run
//! use nextcloud_munin::config::NextcloudConfig;
//! use nextcloud_munin::nextcloud::NextcloudClient;
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = NextcloudConfig {
//!     url: Some("https://cloud.example.org/ocs/v2.php/apps/serverinfo/api/v1/info".to_string()),
//!     username: Some("admin".to_string()),
//!     password: Some(SecretString::from("app-password")),
//!     verify_ssl: true,
//! };
//!
//! let client = NextcloudClient::new(config)?;
//! let reply = client.fetch().await?;
//! println!("status {}", reply.status);
//! # Ok(())
//! # }
//! ```

use crate::config::NextcloudConfig;
use crate::error::{PluginError, Result};
use crate::nextcloud::types::ApiReply;
use reqwest::header::ACCEPT;
use secrecy::ExposeSecret;
use tracing::debug;

pub struct NextcloudClient {
    config: NextcloudConfig,
    http: reqwest::Client,
}

impl NextcloudClient {
    pub fn new(config: NextcloudConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()?;

        Ok(Self::with_http_client(config, http))
    }

    /// Uses a caller-built transport, e.g. one with proxies disabled
    pub fn with_http_client(config: NextcloudConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Issues the serverinfo request.
    ///
    /// The raw status code is returned untouched so the OCS codes 996-998 can be
    /// told apart. The body is only parsed for a 200 reply.
    pub async fn fetch(&self) -> Result<ApiReply> {
        let url = self
            .config
            .url
            .as_deref()
            .ok_or_else(|| PluginError::Config("url is not set".to_string()))?;

        let mut request = self.http.get(url).header(ACCEPT, "application/json");

        // Credentials are passed through as given; only autoconf checks them
        match (&self.config.username, &self.config.password) {
            (None, None) => {}
            (username, password) => {
                request = request.basic_auth(
                    username.as_deref().unwrap_or_default(),
                    password.as_ref().map(|p| p.expose_secret().to_string()),
                );
            }
        }

        debug!("GET {}", url);
        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!("serverinfo replied with status {}", status);

        let body = if status == 200 {
            let text = response.text().await?;
            Some(serde_json::from_str(&text)?)
        } else {
            None
        };

        Ok(ApiReply::new(status, body))
    }
}
