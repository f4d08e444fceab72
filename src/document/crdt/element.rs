use crate::document::time::ticket::Ticket;

/// Element is the common surface of every CRDT element in a document.
///
/// Elements carry the tickets that situate them in the logical clock: when
/// they were created, when they were last moved within their container, and
/// - once tombstoned - when they were removed.
pub trait Element {
    /// The ticket this element was created at. Never changes.
    fn created_at(&self) -> &Ticket;

    fn moved_at(&self) -> Option<&Ticket>;

    /// Records a move. A newer ticket always wins.
    fn set_moved_at(&mut self, ticket: Ticket);

    fn removed_at(&self) -> Option<&Ticket>;

    /// Tombstones this element. The tombstone is applied only when
    /// `removed_at` is newer than both the creation ticket and any existing
    /// tombstone; returns whether it was applied.
    fn remove(&mut self, removed_at: Ticket) -> bool;

    fn is_removed(&self) -> bool {
        self.removed_at().is_some()
    }
}
