//! Logical-clock identity: who edited, and in what causal order.

pub mod actor_id;
pub mod ticket;

pub use actor_id::{ActorId, ActorIdError};
pub use ticket::Ticket;
