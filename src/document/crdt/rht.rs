use std::collections::HashMap;
use std::fmt;

use crate::document::time::ticket::Ticket;

/// A single entry of an [`Rht`].
#[derive(Debug, Clone)]
struct RhtNode {
    value: String,
    updated_at: Ticket,
    removed_at: Option<Ticket>,
}

impl RhtNode {
    fn new(value: String, updated_at: Ticket) -> Self {
        Self {
            value,
            updated_at,
            removed_at: None,
        }
    }

    fn is_removed(&self) -> bool {
        self.removed_at.is_some()
    }
}

/// Rht is a replicated hashtable: a last-writer-wins string map with
/// tombstoned removal, so concurrent sets and removes converge to the same
/// state on every replica.
///
/// For background on the data structure see
/// <http://csl.skku.edu/papers/jpdc11.pdf>.
#[derive(Debug, Clone, Default)]
pub struct Rht {
    nodes: HashMap<String, RhtNode>,
}

impl Rht {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of the given key. Applies only when `executed_at` is
    /// newer than the stored entry's update ticket.
    pub fn set(&mut self, key: String, value: String, executed_at: Ticket) {
        if let Some(node) = self.nodes.get(&key) {
            if !executed_at.after(&node.updated_at) {
                return;
            }
        }

        self.nodes.insert(key, RhtNode::new(value, executed_at));
    }

    /// The live value of the given key. Tombstoned entries read as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        let node = self.nodes.get(key)?;
        if node.is_removed() {
            return None;
        }
        Some(node.value.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        match self.nodes.get(key) {
            Some(node) => !node.is_removed(),
            None => false,
        }
    }

    /// Tombstones the entry of the given key and returns its value. A
    /// tombstoned entry is re-removed only by a newer ticket.
    pub fn remove(&mut self, key: &str, executed_at: Ticket) -> Option<String> {
        let node = self.nodes.get_mut(key)?;
        if let Some(removed_at) = &node.removed_at {
            if !executed_at.after(removed_at) {
                return None;
            }
        }

        node.removed_at = Some(executed_at);
        Some(node.value.clone())
    }

    /// The live entries as a plain map.
    pub fn elements(&self) -> HashMap<String, String> {
        self.nodes
            .iter()
            .filter(|(_, node)| !node.is_removed())
            .map(|(key, node)| (key.clone(), node.value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.values().filter(|node| !node.is_removed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Rht {
    /// Deterministic `{k:v,...}` rendering with keys sorted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = self.elements();
        let mut keys = members.keys().collect::<Vec<_>>();
        keys.sort();

        write!(f, "{{")?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", key, members[key.as_str()])?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::time::actor_id::ActorId;

    fn ticket(lamport: u64, delimiter: u32) -> Ticket {
        let actor = ActorId::from_hex("0000000000abcdef01234567").unwrap();
        Ticket::new(lamport, delimiter, actor)
    }

    #[test]
    fn test_set() {
        let mut rht = Rht::new();
        let key = "key";

        rht.set(key.to_string(), "value".to_string(), ticket(0, 0));
        assert_eq!(rht.get(key), Some("value".to_string()));
        assert!(rht.contains(key));

        // newer ticket wins
        rht.set(key.to_string(), "value2".to_string(), ticket(0, 1));
        assert_eq!(rht.get(key), Some("value2".to_string()));

        // older ticket loses
        rht.set(key.to_string(), "value3".to_string(), ticket(0, 0));
        assert_eq!(rht.get(key), Some("value2".to_string()));
    }

    #[test]
    fn test_get_when_empty() {
        let rht = Rht::new();
        assert_eq!(rht.get("key"), None);
        assert!(!rht.contains("key"));
        assert!(rht.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut rht = Rht::new();
        let key = "key";

        rht.set(key.to_string(), "value".to_string(), ticket(0, 0));
        assert_eq!(rht.remove(key, ticket(0, 0)), Some("value".to_string()));
        assert!(!rht.contains(key));
        assert_eq!(rht.get(key), None);

        // unknown key
        assert_eq!(rht.remove("missing", ticket(0, 0)), None);

        // re-remove only with a newer ticket
        assert_eq!(rht.remove(key, ticket(0, 0)), None);
        assert_eq!(rht.remove(key, ticket(0, 1)), Some("value".to_string()));
    }

    #[test]
    fn test_elements_skip_tombstones() {
        let mut rht = Rht::new();
        rht.set("a".to_string(), "1".to_string(), ticket(0, 0));
        rht.set("b".to_string(), "2".to_string(), ticket(0, 1));
        rht.remove("a", ticket(0, 2));

        let elements = rht.elements();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements.get("b"), Some(&"2".to_string()));
        assert_eq!(rht.len(), 1);
    }

    #[test]
    fn test_to_string_sorted() {
        let mut rht = Rht::new();
        assert_eq!(rht.to_string(), "{}");

        rht.set("b".to_string(), "2".to_string(), ticket(0, 0));
        rht.set("c".to_string(), "3".to_string(), ticket(0, 1));
        rht.set("a".to_string(), "1".to_string(), ticket(0, 2));

        assert_eq!(rht.to_string(), "{a:1,b:2,c:3}");
    }
}
