//! Documents and the machinery they converge with.

pub mod crdt;
pub mod key;
pub mod time;

pub use key::{DocumentKey, KeyError};
