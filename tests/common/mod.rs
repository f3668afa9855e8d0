//! Minimal one-shot HTTP/1.1 server standing in for Nextcloud

#![allow(dead_code)]

use nextcloud_munin::config::NextcloudConfig;
use nextcloud_munin::nextcloud::NextcloudClient;
use secrecy::SecretString;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const SERVERINFO_PATH: &str = "/ocs/v2.php/apps/serverinfo/api/v1/info";

/// Serves exactly one response, then hands back the raw request it received
pub async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("No client connected");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.expect("Failed to read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Failed to write response");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}{}", addr, SERVERINFO_PATH), handle)
}

pub fn nextcloud_config(url: &str) -> NextcloudConfig {
    NextcloudConfig {
        url: Some(url.to_string()),
        username: Some("admin".to_string()),
        password: Some(SecretString::from("secret")),
        verify_ssl: true,
    }
}

/// Client that ignores any proxy configured in the test environment
pub fn direct_client(config: NextcloudConfig) -> NextcloudClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    NextcloudClient::with_http_client(config, http)
}

/// Trimmed serverinfo reply as returned by a Nextcloud 25 instance
pub fn serverinfo(version: &str) -> Value {
    json!({
        "ocs": {
            "meta": {"status": "ok", "statuscode": 200, "message": "OK"},
            "data": {
                "nextcloud": {
                    "system": {
                        "version": version,
                        "theme": "",
                        "apps": {
                            "num_installed": 52,
                            "num_updates_available": 2,
                            "app_updates": {"calendar": "4.2.1", "mail": "2.2.3"}
                        }
                    },
                    "storage": {
                        "num_users": 100,
                        "num_files": 48213,
                        "num_storages": 104,
                        "num_storages_local": 2,
                        "num_storages_home": 100,
                        "num_storages_other": 2
                    },
                    "shares": {
                        "num_shares": 31,
                        "num_shares_user": 12,
                        "num_shares_groups": 4,
                        "num_shares_link": 9,
                        "num_shares_mail": 1,
                        "num_shares_room": 0,
                        "num_shares_link_no_password": 5,
                        "num_fed_shares_sent": 3,
                        "num_fed_shares_received": 2,
                        "permissions_3_1": "7",
                        "permissions_0_31": "12"
                    }
                },
                "server": {
                    "webserver": "nginx",
                    "php": {"version": "8.1.2"},
                    "database": {"type": "pgsql", "version": "14.5", "size": 73580544}
                },
                "activeUsers": {
                    "last5minutes": 3,
                    "last1hour": 10,
                    "last24hours": 40
                }
            }
        }
    })
}
