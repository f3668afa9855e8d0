pub mod client;
pub mod types;

pub use client::NextcloudClient;
pub use types::{ApiReply, RemoteStatus};
