use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

const DEFAULT_SYNC_LOOP_INTERVAL_MS: u64 = 50;
const DEFAULT_RECONNECT_STREAM_DELAY_MS: u64 = 1000;

/// ClientOptions configures how a [`Client`](crate::Client) behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Key identifying this client to the server. A fresh UUID when omitted.
    pub key: String,

    /// How often the sync loop pushes local changes and pulls remote ones.
    pub sync_loop_interval: Duration,

    /// Back-off before re-establishing a broken watch stream.
    pub reconnect_stream_delay: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            key: Uuid::new_v4().hyphenated().to_string(),
            sync_loop_interval: Duration::from_millis(DEFAULT_SYNC_LOOP_INTERVAL_MS),
            reconnect_stream_delay: Duration::from_millis(DEFAULT_RECONNECT_STREAM_DELAY_MS),
        }
    }
}

impl ClientOptions {
    /// Creates options with an explicit client key and default timings.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }
}
