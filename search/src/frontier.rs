//! Indexed best-first frontier (the A* open set).
//!
//! A binary min-heap over `(f, node_id)` with a key → heap-slot index kept in
//! sync on every sift. The index gives O(1) membership and lets an entry be
//! replaced in place (decrease-key) while preserving heap order.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::{FValue, NodeId};

#[derive(Debug)]
struct FrontierEntry<K> {
    key: K,
    node: NodeId,
    f: FValue,
}

impl<K> FrontierEntry<K> {
    /// Lower rank pops first. `NodeId` breaks f-value ties by creation order.
    fn rank(&self) -> (FValue, NodeId) {
        (self.f, self.node)
    }
}

/// Best-first open set keyed by state identity.
///
/// At most one entry per key. Callers decide whether a new node for an
/// existing key should [`replace`](Self::replace) it.
#[derive(Debug)]
pub struct OpenSet<K> {
    heap: Vec<FrontierEntry<K>>,
    slots: HashMap<K, usize>,
    high_water: usize,
}

impl<K: Hash + Eq + Clone> OpenSet<K> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
            high_water: 0,
        }
    }

    /// Insert a node for a key not already present.
    ///
    /// Returns `false` (and leaves the frontier untouched) if `key` is
    /// already present.
    pub fn push(&mut self, key: K, node: NodeId, f: FValue) -> bool {
        if self.slots.contains_key(&key) {
            return false;
        }
        let slot = self.heap.len();
        self.slots.insert(key.clone(), slot);
        self.heap.push(FrontierEntry { key, node, f });
        self.sift_up(slot);
        self.high_water = self.high_water.max(self.heap.len());
        true
    }

    /// The node and f-value currently stored for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<(NodeId, FValue)> {
        self.slots.get(key).map(|&slot| {
            let entry = &self.heap[slot];
            (entry.node, entry.f)
        })
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Swap the node stored for `key` and restore heap order.
    ///
    /// Returns the displaced node, or `None` if `key` is absent.
    pub fn replace(&mut self, key: &K, node: NodeId, f: FValue) -> Option<NodeId> {
        let slot = *self.slots.get(key)?;
        let old = std::mem::replace(&mut self.heap[slot].node, node);
        self.heap[slot].f = f;
        let slot = self.sift_up(slot);
        self.sift_down(slot);
        Some(old)
    }

    /// The best node without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<(NodeId, FValue)> {
        self.heap.first().map(|e| (e.node, e.f))
    }

    /// Remove and return the best node.
    pub fn pop(&mut self) -> Option<(K, NodeId)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.key, entry.node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].rank() >= self.heap[parent].rank() {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut best = slot;
            if left < len && self.heap[left].rank() < self.heap[best].rank() {
                best = left;
            }
            if right < len && self.heap[right].rank() < self.heap[best].rank() {
                best = right;
            }
            if best == slot {
                return;
            }
            self.swap_slots(slot, best);
            slot = best;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(s) = self.slots.get_mut(&self.heap[a].key) {
            *s = a;
        }
        if let Some(s) = self.slots.get_mut(&self.heap[b].key) {
            *s = b;
        }
    }
}

impl<K: Hash + Eq + Clone> Default for OpenSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
