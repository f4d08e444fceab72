//! Convergent containers: the pieces documents are assembled from.
//!
//! Removal never deletes in place - nodes are tombstoned with the removal
//! ticket so that concurrent edits on other replicas can still be ordered
//! against them.

pub mod element;
pub mod primitive;
pub mod rht;
pub mod rht_pq_map;

pub use element::Element;
pub use primitive::{Primitive, PrimitiveValue};
pub use rht::Rht;
pub use rht_pq_map::{RhtPqMap, RhtPqMapError};
