use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::element::Element;
use crate::document::time::ticket::Ticket;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RhtPqMapError {
    #[error("element not found: {0}")]
    ElementNotFound(Ticket),
}

type RcNode<E> = Rc<RefCell<PqNode<E>>>;

/// A keyed element inside an [`RhtPqMap`] queue.
struct PqNode<E: Element> {
    key: String,
    element: E,
}

impl<E: Element> PqNode<E> {
    fn new(key: String, element: E) -> Self {
        Self { key, element }
    }

    fn is_removed(&self) -> bool {
        self.element.is_removed()
    }
}

impl<E: Element> Ord for PqNode<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.element.created_at().cmp(other.element.created_at())
    }
}

impl<E: Element> PartialOrd for PqNode<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Element> PartialEq for PqNode<E> {
    fn eq(&self, other: &Self) -> bool {
        self.element.created_at() == other.element.created_at()
    }
}

impl<E: Element> Eq for PqNode<E> {}

/// RhtPqMap is a replicated hashtable keyed by priority queue: each key maps
/// to a max-heap of elements ordered by creation ticket, so the newest
/// element wins reads while older ones remain addressable by their creation
/// ticket for remote operations.
pub struct RhtPqMap<E: Element> {
    queue_map_by_key: HashMap<String, BinaryHeap<RcNode<E>>>,
    node_map_by_created_at: HashMap<Ticket, RcNode<E>>,
}

impl<E: Element + Clone> RhtPqMap<E> {
    pub fn new() -> Self {
        Self {
            queue_map_by_key: HashMap::new(),
            node_map_by_created_at: HashMap::new(),
        }
    }

    /// The winning live element of the given key.
    pub fn get(&self, key: &str) -> Option<E> {
        let queue = self.queue_map_by_key.get(key)?;
        let node = queue.peek()?;
        let node = node.borrow();
        if node.is_removed() {
            return None;
        }
        Some(node.element.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        match self.queue_map_by_key.get(key).and_then(|queue| queue.peek()) {
            Some(node) => !node.borrow().is_removed(),
            None => false,
        }
    }

    /// Inserts `value` under `key`. When a newer element displaces a live
    /// one, the displaced element is tombstoned and returned.
    pub fn set(&mut self, key: &str, value: E) -> Option<E> {
        let displaced = match self.queue_map_by_key.get(key).and_then(|queue| queue.peek()) {
            Some(node) => {
                let mut node = node.borrow_mut();
                if !node.is_removed() && node.element.remove(value.created_at().clone()) {
                    Some(node.element.clone())
                } else {
                    None
                }
            }
            None => None,
        };

        self.set_internal(key.to_string(), value);
        displaced
    }

    fn set_internal(&mut self, key: String, value: E) {
        let created_at = value.created_at().clone();
        let node = Rc::new(RefCell::new(PqNode::new(key.clone(), value)));
        self.node_map_by_created_at
            .insert(created_at, Rc::clone(&node));

        let queue = self.queue_map_by_key.entry(key).or_default();
        queue.push(node);
    }

    /// Tombstones the winning element of the given key and returns it.
    pub fn delete(&mut self, key: &str, deleted_at: Ticket) -> Option<E> {
        let queue = self.queue_map_by_key.get(key)?;
        let node = queue.peek()?;
        let mut node = node.borrow_mut();
        if node.element.remove(deleted_at) {
            Some(node.element.clone())
        } else {
            None
        }
    }

    /// Tombstones the element created at `created_at` and returns it.
    pub fn delete_by_created_at(&mut self, created_at: &Ticket, deleted_at: Ticket) -> Option<E> {
        let node = self.node_map_by_created_at.get(created_at)?;
        let mut node = node.borrow_mut();
        if node.element.remove(deleted_at) {
            Some(node.element.clone())
        } else {
            None
        }
    }

    /// Physically unlinks the node holding `element` from both indexes.
    pub fn purge(&mut self, element: &E) -> Result<(), RhtPqMapError> {
        let created_at = element.created_at();
        let node = self
            .node_map_by_created_at
            .remove(created_at)
            .ok_or_else(|| RhtPqMapError::ElementNotFound(created_at.clone()))?;

        let key = node.borrow().key.clone();
        let mut emptied = false;
        if let Some(queue) = self.queue_map_by_key.get_mut(&key) {
            let remaining = queue
                .drain()
                .filter(|candidate| !Rc::ptr_eq(candidate, &node))
                .collect::<BinaryHeap<_>>();
            emptied = remaining.is_empty();
            *queue = remaining;
        }
        if emptied {
            self.queue_map_by_key.remove(&key);
        }

        Ok(())
    }

    /// The live view: the winning non-removed element per key.
    pub fn elements(&self) -> HashMap<String, E> {
        self.queue_map_by_key
            .iter()
            .filter_map(|(key, queue)| {
                let node = queue.peek()?;
                let node = node.borrow();
                if node.is_removed() {
                    return None;
                }
                Some((key.clone(), node.element.clone()))
            })
            .collect()
    }
}

impl<E: Element + Clone> Default for RhtPqMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element + Clone + fmt::Display> fmt::Display for RhtPqMap<E> {
    /// Deterministic `{"k":v,...}` rendering with keys sorted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = self.elements();
        let mut keys = members.keys().cloned().collect::<Vec<_>>();
        keys.sort();

        write!(f, "{{")?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "\"{}\":{}", key, members[key])?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::crdt::primitive::{Primitive, PrimitiveValue};
    use crate::document::time::actor_id::ActorId;

    fn ticket(lamport: u64, delimiter: u32) -> Ticket {
        let actor = ActorId::from_hex("0000000000abcdef01234567").unwrap();
        Ticket::new(lamport, delimiter, actor)
    }

    fn integer(value: i32, created_at: Ticket) -> Primitive {
        Primitive::new(PrimitiveValue::Integer(value), created_at)
    }

    #[test]
    fn test_set_and_get() {
        let mut map: RhtPqMap<Primitive> = RhtPqMap::new();
        assert!(map.get("a").is_none());
        assert!(!map.contains("a"));

        assert!(map.set("a", integer(1, ticket(1, 0))).is_none());
        let element = map.get("a").unwrap();
        assert_eq!(element.value(), &PrimitiveValue::Integer(1));
        assert!(map.contains("a"));
    }

    #[test]
    fn test_newer_set_displaces_older_element() {
        let mut map: RhtPqMap<Primitive> = RhtPqMap::new();
        map.set("a", integer(1, ticket(1, 0)));

        let displaced = map.set("a", integer(2, ticket(2, 0))).unwrap();
        assert_eq!(displaced.value(), &PrimitiveValue::Integer(1));
        assert!(displaced.is_removed());

        let element = map.get("a").unwrap();
        assert_eq!(element.value(), &PrimitiveValue::Integer(2));
    }

    #[test]
    fn test_older_set_does_not_win_reads() {
        let mut map: RhtPqMap<Primitive> = RhtPqMap::new();
        map.set("a", integer(2, ticket(2, 0)));

        // a concurrent, older element arrives late
        assert!(map.set("a", integer(1, ticket(1, 0))).is_none());

        let element = map.get("a").unwrap();
        assert_eq!(element.value(), &PrimitiveValue::Integer(2));
    }

    #[test]
    fn test_delete() {
        let mut map: RhtPqMap<Primitive> = RhtPqMap::new();
        map.set("a", integer(1, ticket(1, 0)));

        let deleted = map.delete("a", ticket(2, 0)).unwrap();
        assert_eq!(deleted.value(), &PrimitiveValue::Integer(1));
        assert!(map.get("a").is_none());
        assert!(!map.contains("a"));

        // a ticket that is not newer does not re-delete
        assert!(map.delete("a", ticket(2, 0)).is_none());
        assert!(map.delete("missing", ticket(3, 0)).is_none());
    }

    #[test]
    fn test_delete_by_created_at() {
        let mut map: RhtPqMap<Primitive> = RhtPqMap::new();
        map.set("a", integer(1, ticket(1, 0)));
        map.set("a", integer(2, ticket(2, 0)));

        // tombstone the older element specifically
        let deleted = map
            .delete_by_created_at(&ticket(1, 0), ticket(3, 0))
            .unwrap();
        assert_eq!(deleted.value(), &PrimitiveValue::Integer(1));

        // the newest element still wins reads
        let element = map.get("a").unwrap();
        assert_eq!(element.value(), &PrimitiveValue::Integer(2));

        assert!(map
            .delete_by_created_at(&ticket(9, 0), ticket(10, 0))
            .is_none());
    }

    #[test]
    fn test_purge_unlinks_node() {
        let mut map: RhtPqMap<Primitive> = RhtPqMap::new();
        let old = integer(1, ticket(1, 0));
        map.set("a", old.clone());
        map.set("a", integer(2, ticket(2, 0)));

        map.purge(&old).unwrap();

        // the old element is no longer addressable
        assert!(map
            .delete_by_created_at(&ticket(1, 0), ticket(3, 0))
            .is_none());
        let element = map.get("a").unwrap();
        assert_eq!(element.value(), &PrimitiveValue::Integer(2));

        let err = map.purge(&old).unwrap_err();
        assert_eq!(err, RhtPqMapError::ElementNotFound(ticket(1, 0)));
    }

    #[test]
    fn test_elements_and_display() {
        let mut map: RhtPqMap<Primitive> = RhtPqMap::new();
        map.set("b", integer(2, ticket(1, 0)));
        map.set("a", integer(1, ticket(2, 0)));
        map.set(
            "c",
            Primitive::new(PrimitiveValue::String("x".to_string()), ticket(3, 0)),
        );
        map.delete("b", ticket(4, 0));

        let elements = map.elements();
        assert_eq!(elements.len(), 2);
        assert_eq!(map.to_string(), "{\"a\":1,\"c\":\"x\"}");
    }
}
