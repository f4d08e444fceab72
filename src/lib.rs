//! docsync - client SDK for realtime document synchronization
//!
//! This library lets applications register with a docsync server and hold
//! JSON-like documents whose concurrent edits converge without coordination.
//! Convergence rests on CRDT semantics: every edit carries a logical-clock
//! [`Ticket`], containers keep tombstones instead of deleting in place, and
//! the newest ticket wins deterministically on every replica.
//!
//! # Core Concepts
//!
//! - **Client**: a registered participant. Activation assigns it a
//!   server-side identity that stamps everything it later edits.
//! - **Ticket**: a timestamp of the logical clock - lamport count, delimiter
//!   and the editing actor - totally ordered across replicas.
//! - **CRDT containers**: replicated hashtables ([`document::crdt::Rht`],
//!   [`document::crdt::RhtPqMap`]) and ordered indexes
//!   ([`collections::LlrbTree`], [`collections::SplayTree`]) that documents
//!   are built out of.
//!
//! # Example Usage
//!
//! ```ignore
//! use docsync::{Client, ClientOptions};
//!
//! async fn register() -> anyhow::Result<()> {
//!     let options = ClientOptions::with_key("example-app");
//!     let mut client = Client::with_options("http://[::1]:11101", options)?;
//!
//!     client.activate().await?;
//!     println!("activated as {:?}", client.client_id());
//!
//!     client.deactivate().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`client`]: SDK surface - activation lifecycle over gRPC
//! - [`document`]: document keys, logical clock, CRDT containers
//! - [`collections`]: ordered indexes backing document internals

pub mod cli;
pub mod client;
pub mod collections;
pub mod config;
pub mod document;
pub mod proto;
pub mod util;

// Re-export key types for convenient access
pub use client::connection::RpcAddr;
pub use client::options::ClientOptions;
pub use client::{Client, ClientStatus};
pub use config::{ConfigError, DocsyncConfig};
pub use document::key::{DocumentKey, KeyError};
pub use document::time::actor_id::{ActorId, ActorIdError};
pub use document::time::ticket::Ticket;
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_docsync() {
        assert_eq!(NAME, "docsync");
    }
}
