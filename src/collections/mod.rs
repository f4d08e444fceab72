//! Ordered indexes backing document internals.

pub mod llrb;
pub mod splay;

pub use llrb::LlrbTree;
pub use splay::{SplayNode, SplayTree, Value};
