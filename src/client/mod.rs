//! SDK surface: client lifecycle against a sync server.
//!
//! A [`Client`] registers with the server (activation), which assigns it the
//! identity used to stamp every edit it later produces. Deactivation releases
//! that identity. Both operations are idempotent.

pub mod connection;
pub mod options;

use anyhow::{Context, Result};
use tonic::transport::Channel;
use tracing::debug;

use crate::proto::{ActivateClientRequest, DeactivateClientRequest, DocsyncServiceClient};

pub use connection::RpcAddr;
pub use options::ClientOptions;

/// Lifecycle state of a [`Client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientStatus {
    Deactivated,
    Activated,
}

/// A participant in realtime document synchronization.
pub struct Client {
    rpc_addr: RpcAddr,
    options: ClientOptions,
    status: ClientStatus,
    client_id: Option<Vec<u8>>,
    channel: Option<Channel>,
}

impl Client {
    /// Creates a deactivated client with default options.
    pub fn new(rpc_addr: &str) -> Result<Self> {
        Self::with_options(rpc_addr, ClientOptions::default())
    }

    /// Creates a deactivated client with the given options.
    pub fn with_options(rpc_addr: &str, options: ClientOptions) -> Result<Self> {
        Ok(Self {
            rpc_addr: RpcAddr::parse(rpc_addr)?,
            options,
            status: ClientStatus::Deactivated,
            client_id: None,
            channel: None,
        })
    }

    pub fn key(&self) -> &str {
        &self.options.key
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn rpc_addr(&self) -> &RpcAddr {
        &self.rpc_addr
    }

    pub fn status(&self) -> ClientStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Activated
    }

    /// The server-assigned identity, available while activated.
    pub fn client_id(&self) -> Option<&[u8]> {
        self.client_id.as_deref()
    }

    /// Registers this client with the server. A no-op when already active.
    pub async fn activate(&mut self) -> Result<()> {
        if self.is_active() {
            return Ok(());
        }

        let channel = self.rpc_addr.connect().await?;
        let mut service = DocsyncServiceClient::new(channel.clone());

        let request = tonic::Request::new(ActivateClientRequest {
            client_key: self.options.key.clone(),
        });
        let response = service
            .activate_client(request)
            .await
            .context("ActivateClient request failed")?;
        let message = response.into_inner();

        debug!(
            key = %self.options.key,
            id = %hex::encode(&message.client_id),
            "client activated"
        );
        self.client_id = Some(message.client_id);
        self.channel = Some(channel);
        self.status = ClientStatus::Activated;

        Ok(())
    }

    /// Releases this client's registration. A no-op when not active.
    pub async fn deactivate(&mut self) -> Result<()> {
        if !self.is_active() {
            return Ok(());
        }

        let channel = self
            .channel
            .clone()
            .context("active client is missing its channel")?;
        let client_id = self
            .client_id
            .clone()
            .context("active client is missing its id")?;

        let mut service = DocsyncServiceClient::new(channel);
        let request = tonic::Request::new(DeactivateClientRequest { client_id });
        service
            .deactivate_client(request)
            .await
            .context("DeactivateClient request failed")?;

        debug!(key = %self.options.key, "client deactivated");
        self.client_id = None;
        self.channel = None;
        self.status = ClientStatus::Deactivated;

        Ok(())
    }
}
