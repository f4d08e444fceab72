use tracing::error;

use super::commands::{ActivateArgs, StatusArgs};
use crate::client::{Client, ClientOptions};
use crate::config::DocsyncConfig;

/// Registers a client, reports the assigned id and (unless `--keep`)
/// deactivates again. Returns the process exit code.
pub async fn handle_activate(args: &ActivateArgs) -> i32 {
    let config = match DocsyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    let addr = args.addr.clone().unwrap_or(config.rpc_addr);
    let options = match &args.key {
        Some(key) => ClientOptions::with_key(key.clone()),
        None => ClientOptions::default(),
    };

    let mut client = match Client::with_options(&addr, options) {
        Ok(client) => client,
        Err(e) => {
            error!("{:#}", e);
            return 1;
        }
    };

    if let Err(e) = client.activate().await {
        error!("{:#}", e);
        return 1;
    }

    if let Some(id) = client.client_id() {
        println!("activated {} as {}", client.key(), hex::encode(id));
    }

    if !args.keep {
        if let Err(e) = client.deactivate().await {
            error!("{:#}", e);
            return 1;
        }
    }

    0
}

/// Prints the resolved configuration. Returns the process exit code.
pub async fn handle_status(args: &StatusArgs) -> i32 {
    let config = match DocsyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&config) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                error!("Failed to render configuration: {}", e);
                return 1;
            }
        }
    } else {
        println!("server address:      {}", config.rpc_addr);
        println!("connect timeout:     {}s", config.connect_timeout_secs);
        println!("request timeout:     {}s", config.request_timeout_secs);
        println!("log level:           {}", config.log_level);
    }

    0
}
