use std::cmp::Ordering;
use std::fmt;

use super::actor_id::ActorId;

/// Ticket is a timestamp of the logical clock. Tickets are immutable and
/// totally ordered: lamport count first, then actor, then delimiter. The
/// actor breaks ties between concurrent edits; the delimiter distinguishes
/// multiple operations issued within one change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    lamport: u64,
    delimiter: u32,
    actor: ActorId,
}

impl Ticket {
    pub fn new(lamport: u64, delimiter: u32, actor: ActorId) -> Self {
        Self {
            lamport,
            delimiter,
            actor,
        }
    }

    pub fn lamport(&self) -> u64 {
        self.lamport
    }

    pub fn delimiter(&self) -> u32 {
        self.delimiter
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// Whether this ticket was created strictly after `other`.
    pub fn after(&self, other: &Ticket) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lamport
            .cmp(&other.lamport)
            .then_with(|| self.actor.cmp(&other.actor))
            .then_with(|| self.delimiter.cmp(&other.delimiter))
    }
}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ticket {
    /// `{lamport}:{delimiter}:{actor}`, also the ticket's map-key form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.lamport, self.delimiter, self.actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(hex_str: &str) -> ActorId {
        ActorId::from_hex(hex_str).unwrap()
    }

    #[test]
    fn test_display_form() {
        let hex_str = "0123456789abcdef01234567";
        let ticket = Ticket::new(0, 0, actor(hex_str));
        assert_eq!(ticket.to_string(), format!("0:0:{}", hex_str));
    }

    #[test]
    fn test_ordering_by_lamport_then_actor_then_delimiter() {
        let a = actor("0123456789abcdef01234567");

        // lamport dominates
        let before = Ticket::new(0, 9, a);
        let after = Ticket::new(1, 0, a);
        assert_eq!(before.cmp(&after), Ordering::Less);
        assert_eq!(after.cmp(&before), Ordering::Greater);

        // actor breaks lamport ties
        let before = Ticket::new(0, 9, actor("0000000000abcdef01234567"));
        let after = Ticket::new(0, 0, a);
        assert_eq!(before.cmp(&after), Ordering::Less);

        // delimiter breaks the rest
        let before = Ticket::new(0, 0, a);
        let after = Ticket::new(0, 1, a);
        assert_eq!(before.cmp(&after), Ordering::Less);
        assert_eq!(after.cmp(&after), Ordering::Equal);
    }

    #[test]
    fn test_after() {
        let a = actor("0123456789abcdef01234567");
        let before = Ticket::new(0, 0, a);
        let after = Ticket::new(1, 0, a);

        assert!(after.after(&before));
        assert!(!before.after(&after));
        assert!(!before.after(&before));
    }
}
