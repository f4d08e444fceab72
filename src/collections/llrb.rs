use std::cmp::Ordering;
use std::fmt;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    is_red: bool,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, is_red: bool) -> Self {
        Node {
            key,
            value,
            is_red,
            left: None,
            right: None,
        }
    }
}

/// LlrbTree is an ordered map implemented as a Left-leaning Red-Black tree.
/// Original paper on Left-leaning Red-Black Trees:
///  - <http://www.cs.princeton.edu/~rs/talks/LLRB/LLRB.pdf>
///
/// Invariant 1: No red node has a red child
/// Invariant 2: Every leaf path has the same number of black nodes
/// Invariant 3: Only the left child can be red (left leaning)
pub struct LlrbTree<K: Ord + Clone, V: Clone> {
    root: Link<K, V>,
    size: usize,
}

impl<K: Ord + Clone, V: Clone> LlrbTree<K, V> {
    pub fn new() -> Self {
        LlrbTree {
            root: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts the value of the given key, replacing any existing value.
    pub fn insert(&mut self, key: K, value: V) {
        let root = self.root.take();
        let mut root = self.insert_node(root, key, value);
        root.is_red = false;
        self.root = Some(root);
    }

    fn insert_node(&mut self, node: Link<K, V>, key: K, value: V) -> Box<Node<K, V>> {
        let mut node = match node {
            None => {
                self.size += 1;
                return Box::new(Node::new(key, value, true));
            }
            Some(node) => node,
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                let left = node.left.take();
                node.left = Some(self.insert_node(left, key, value));
            }
            Ordering::Greater => {
                let right = node.right.take();
                node.right = Some(self.insert_node(right, key, value));
            }
            Ordering::Equal => node.value = value,
        }

        fix_up(node)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            match key.cmp(&current.key) {
                Ordering::Less => node = current.left.as_deref(),
                Ordering::Greater => node = current.right.as_deref(),
                Ordering::Equal => return Some(&current.value),
            }
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the value of the given key. Unknown keys are ignored.
    pub fn remove(&mut self, key: &K) {
        if !self.contains(key) {
            return;
        }

        if let Some(mut root) = self.root.take() {
            if !is_red(&root.left) && !is_red(&root.right) {
                root.is_red = true;
            }

            self.root = Self::remove_node(root, key);
            if let Some(root) = self.root.as_mut() {
                root.is_red = false;
            }
            self.size -= 1;
        }
    }

    // Sedgewick's top-down deletion. The key is known to be present, so the
    // descent unwraps the child links along its search path.
    fn remove_node(mut node: Box<Node<K, V>>, key: &K) -> Link<K, V> {
        if key.cmp(&node.key) == Ordering::Less {
            if !is_red(&node.left) && !left_left_is_red(&node.left) {
                node = move_red_left(node);
            }
            let left = node.left.take().unwrap();
            node.left = Self::remove_node(left, key);
        } else {
            if is_red(&node.left) {
                node = rotate_right(node);
            }

            if key.cmp(&node.key) == Ordering::Equal && node.right.is_none() {
                return None;
            }

            if !is_red(&node.right) && !left_left_is_red(&node.right) {
                node = move_red_right(node);
            }

            if key.cmp(&node.key) == Ordering::Equal {
                let right = node.right.take().unwrap();
                {
                    let smallest = min(&right);
                    node.key = smallest.key.clone();
                    node.value = smallest.value.clone();
                }
                node.right = remove_min(right);
            } else {
                let right = node.right.take().unwrap();
                node.right = Self::remove_node(right, key);
            }
        }

        Some(fix_up(node))
    }

    /// The greatest entry whose key is less than or equal to the given key.
    pub fn floor(&self, key: &K) -> Option<(K, V)> {
        let mut best: Option<&Node<K, V>> = None;
        let mut node = self.root.as_deref();

        while let Some(current) = node {
            match key.cmp(&current.key) {
                Ordering::Less => node = current.left.as_deref(),
                Ordering::Greater => {
                    best = Some(current);
                    node = current.right.as_deref();
                }
                Ordering::Equal => return Some((current.key.clone(), current.value.clone())),
            }
        }

        best.map(|node| (node.key.clone(), node.value.clone()))
    }
}

impl<K: Ord + Clone, V: Clone> Default for LlrbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone + fmt::Display> fmt::Display for LlrbTree<K, V> {
    /// Values joined by `,` in ascending key order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut result: fmt::Result = Ok(());
        traverse_in_order(&self.root, &mut |node| {
            if result.is_err() {
                return;
            }
            if !first {
                result = write!(f, ",");
            }
            if result.is_ok() {
                result = write!(f, "{}", node.value);
            }
            first = false;
        });
        result
    }
}

fn is_red<K, V>(node: &Link<K, V>) -> bool {
    match node {
        Some(node) => node.is_red,
        None => false,
    }
}

fn left_left_is_red<K, V>(node: &Link<K, V>) -> bool {
    match node {
        Some(node) => is_red(&node.left),
        None => false,
    }
}

fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut pivot = node.right.take().unwrap();
    node.right = pivot.left.take();
    pivot.is_red = node.is_red;
    node.is_red = true;
    pivot.left = Some(node);
    pivot
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut pivot = node.left.take().unwrap();
    node.left = pivot.right.take();
    pivot.is_red = node.is_red;
    node.is_red = true;
    pivot.right = Some(node);
    pivot
}

fn flip_colors<K, V>(node: &mut Box<Node<K, V>>) {
    node.is_red = !node.is_red;
    if let Some(left) = node.left.as_mut() {
        left.is_red = !left.is_red;
    }
    if let Some(right) = node.right.as_mut() {
        right.is_red = !right.is_red;
    }
}

fn fix_up<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&node.right) && !is_red(&node.left) {
        node = rotate_left(node);
    }

    if is_red(&node.left) && left_left_is_red(&node.left) {
        node = rotate_right(node);
    }

    if is_red(&node.left) && is_red(&node.right) {
        flip_colors(&mut node);
    }

    node
}

fn move_red_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut node);

    if left_left_is_red(&node.right) {
        let right = node.right.take().unwrap();
        node.right = Some(rotate_right(right));
        node = rotate_left(node);
        flip_colors(&mut node);
    }

    node
}

fn move_red_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut node);

    if left_left_is_red(&node.left) {
        node = rotate_right(node);
        flip_colors(&mut node);
    }

    node
}

fn min<K, V>(node: &Node<K, V>) -> &Node<K, V> {
    match node.left.as_deref() {
        Some(left) => min(left),
        None => node,
    }
}

fn remove_min<K, V>(mut node: Box<Node<K, V>>) -> Link<K, V> {
    if node.left.is_none() {
        return None;
    }

    if !is_red(&node.left) && !left_left_is_red(&node.left) {
        node = move_red_left(node);
    }

    let left = node.left.take().unwrap();
    node.left = remove_min(left);
    Some(fix_up(node))
}

fn traverse_in_order<K, V>(node: &Link<K, V>, callback: &mut dyn FnMut(&Node<K, V>)) {
    if let Some(node) = node {
        traverse_in_order(&node.left, callback);
        callback(node);
        traverse_in_order(&node.right, callback);
    }
}
