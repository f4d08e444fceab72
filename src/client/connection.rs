use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint, Uri};
use tracing::debug;

/// Port a locally-run sync server listens on by default.
pub const DEFAULT_RPC_PORT: u16 = 11101;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const KEEP_ALIVE_INTERVAL_SECS: u64 = 30;

/// Address of a sync server, parsed from its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcAddr {
    /// HTTP/2 over TCP (`http://`, `https://` or `tcp://`).
    Http(String),
    /// HTTP/2 over a local unix domain socket (`unix://`).
    Unix(String),
}

impl RpcAddr {
    pub fn parse(addr: &str) -> Result<Self> {
        if let Some(path) = addr.strip_prefix("unix://") {
            if path.is_empty() {
                anyhow::bail!("unix:// address requires a socket path");
            }
            Ok(RpcAddr::Unix(path.to_string()))
        } else if addr.starts_with("http://") || addr.starts_with("https://") {
            Ok(RpcAddr::Http(addr.to_string()))
        } else if let Some(rest) = addr.strip_prefix("tcp://") {
            Ok(RpcAddr::Http(format!("http://{}", rest)))
        } else {
            anyhow::bail!(
                "Invalid server address format. Expected http://, https://, tcp:// or unix://"
            )
        }
    }

    pub fn default_local() -> Self {
        RpcAddr::Http(format!("http://[::1]:{}", DEFAULT_RPC_PORT))
    }

    /// Dials the server and returns the live channel.
    pub async fn connect(&self) -> Result<Channel> {
        match self {
            RpcAddr::Http(uri) => {
                debug!("Connecting to sync server at {}", uri);
                Endpoint::try_from(uri.clone())
                    .context("Invalid server URI")?
                    .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
                    .http2_keep_alive_interval(Duration::from_secs(KEEP_ALIVE_INTERVAL_SECS))
                    .connect()
                    .await
                    .context("Failed to connect to sync server")
            }
            RpcAddr::Unix(path) => {
                debug!("Connecting to sync server socket {}", path);

                #[cfg(unix)]
                {
                    use hyper_util::rt::TokioIo;
                    use tower::service_fn;

                    let path = path.clone();
                    Endpoint::try_from(format!("http://[::]:{}", DEFAULT_RPC_PORT))
                        .context("Failed to create endpoint")?
                        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
                        .http2_keep_alive_interval(Duration::from_secs(KEEP_ALIVE_INTERVAL_SECS))
                        .connect_with_connector(service_fn(move |_: Uri| {
                            let path = path.clone();
                            async move {
                                tokio::net::UnixStream::connect(path)
                                    .await
                                    .map(TokioIo::new)
                            }
                        }))
                        .await
                        .context("Failed to connect to unix socket")
                }

                #[cfg(not(unix))]
                {
                    anyhow::bail!("Unix sockets are not supported on this platform");
                }
            }
        }
    }
}

impl fmt::Display for RpcAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcAddr::Http(uri) => write!(f, "{}", uri),
            RpcAddr::Unix(path) => write!(f, "unix://{}", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_addr_parsing() {
        let http = RpcAddr::parse("http://[::1]:11101").unwrap();
        assert!(matches!(http, RpcAddr::Http(_)));

        let https = RpcAddr::parse("https://sync.example.com").unwrap();
        assert!(matches!(https, RpcAddr::Http(_)));

        let tcp = RpcAddr::parse("tcp://127.0.0.1:11101").unwrap();
        assert_eq!(tcp, RpcAddr::Http("http://127.0.0.1:11101".to_string()));

        let unix = RpcAddr::parse("unix:///run/docsync/server.sock").unwrap();
        assert!(matches!(unix, RpcAddr::Unix(ref path) if path == "/run/docsync/server.sock"));

        assert!(RpcAddr::parse("ftp://example.com").is_err());
        assert!(RpcAddr::parse("unix://").is_err());
    }

    #[test]
    fn test_default_local_address() {
        let addr = RpcAddr::default_local();
        assert_eq!(addr, RpcAddr::Http("http://[::1]:11101".to_string()));
    }

    #[test]
    fn test_display_round_trips_textual_form() {
        let unix = RpcAddr::parse("unix:///tmp/docsync.sock").unwrap();
        assert_eq!(unix.to_string(), "unix:///tmp/docsync.sock");

        let tcp = RpcAddr::parse("tcp://localhost:11101").unwrap();
        assert_eq!(tcp.to_string(), "http://localhost:11101");
    }
}
