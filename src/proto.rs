//! Generated gRPC bindings for the docsync wire protocol.
//!
//! The definitions live in `proto/docsync.proto` and are compiled by
//! `build.rs` via tonic-build. This module pins the generated code to a
//! stable path and re-exports the handful of types the rest of the crate
//! actually touches.

pub mod v1 {
    include!("proto_gen.rs");
}

pub use v1::docsync_service_client::DocsyncServiceClient;
pub use v1::{
    ActivateClientRequest, ActivateClientResponse, DeactivateClientRequest,
    DeactivateClientResponse,
};
