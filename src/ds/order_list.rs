//! Doubly linked list backed by a `NodeArena`.
//!
//! Nodes live in the arena and link to each other by `NodeRef`, which gives
//! callers stable handles and O(1) unlink of any node they hold a handle to.
//! Both cache policies use the same orientation: the back of the list is the
//! most recently positioned end, the front is the next eviction victim.
//!
//! ```text
//!   arena (NodeArena<Node<T>>)
//!   ┌─────────┬────────────────────────────────────────────┐
//!   │ NodeRef │ Node { value, prev, next }                 │
//!   ├─────────┼────────────────────────────────────────────┤
//!   │ id_0    │ { value: A, prev: None, next: Some(id_1) } │
//!   │ id_1    │ { value: B, prev: Some(id_0), next: id_2 } │
//!   │ id_2    │ { value: C, prev: Some(id_1), next: None } │
//!   └─────────┴────────────────────────────────────────────┘
//!
//!   front ─► [id_0] ◄──► [id_1] ◄──► [id_2] ◄── back
//!   (evict next)                          (most recent)
//! ```
//!
//! `push_back`, `pop_front`, `remove`, and `move_to_back` are all O(1);
//! iteration walks front to back. `debug_validate_invariants()` is available
//! in debug/test builds.

use crate::ds::slot_arena::{NodeArena, NodeRef};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<NodeRef>,
    next: Option<NodeRef>,
}

/// Ordered list whose nodes are arena slots linked by `NodeRef`.
#[derive(Debug)]
pub struct OrderList<T> {
    arena: NodeArena<Node<T>>,
    front: Option<NodeRef>,
    back: Option<NodeRef>,
}

impl<T> OrderList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            front: None,
            back: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            front: None,
            back: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: NodeRef) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front (next eviction victim), or `None` if
    /// the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.arena.get(self.front?).map(|node| &node.value)
    }

    /// Returns the handle at the front of the list.
    pub fn front_ref(&self) -> Option<NodeRef> {
        self.front
    }

    /// Returns the value at the back (most recently positioned).
    pub fn back(&self) -> Option<&T> {
        self.arena.get(self.back?).map(|node| &node.value)
    }

    /// Returns the handle at the back of the list.
    pub fn back_ref(&self) -> Option<NodeRef> {
        self.back
    }

    /// Returns the value for a node handle, if present.
    pub fn get(&self, id: NodeRef) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: NodeRef) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Appends a new node at the back and returns its handle.
    pub fn push_back(&mut self, value: T) -> NodeRef {
        let id = self.arena.alloc(Node {
            value,
            prev: self.back,
            next: None,
        });
        if let Some(back) = self.back {
            if let Some(node) = self.arena.get_mut(back) {
                node.next = Some(id);
            }
        } else {
            self.front = Some(id);
        }
        self.back = Some(id);
        id
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.front?;
        self.detach(id)?;
        self.arena.release(id).map(|node| node.value)
    }

    /// Removes the node `id` from the list and returns its value.
    ///
    /// Unlinks using only the node's own links; no traversal. The handle must
    /// have been returned by this list.
    pub fn remove(&mut self, id: NodeRef) -> Option<T> {
        self.detach(id)?;
        self.arena.release(id).map(|node| node.value)
    }

    /// Moves an existing node to the back; returns `false` if `id` is not
    /// present.
    pub fn move_to_back(&mut self, id: NodeRef) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.back {
            return true;
        }
        self.detach(id);
        self.attach_back(id);
        true
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.back = None;
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> OrderListIter<'_, T> {
        OrderListIter {
            list: self,
            current: self.front,
        }
    }

    /// Returns an iterator of `(NodeRef, &T)` from front to back.
    pub fn iter_entries(&self) -> OrderListEntryIter<'_, T> {
        OrderListEntryIter {
            list: self,
            current: self.front,
        }
    }

    fn detach(&mut self, id: NodeRef) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.front = next;
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.arena.get_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.back = prev;
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_back(&mut self, id: NodeRef) {
        let old_back = self.back;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = old_back;
            node.next = None;
        } else {
            return;
        }
        if let Some(old_back) = old_back {
            if let Some(back_node) = self.arena.get_mut(old_back) {
                back_node.next = Some(id);
            }
        } else {
            self.front = Some(id);
        }
        self.back = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.front.is_none() || self.back.is_none() {
            assert!(self.front.is_none());
            assert!(self.back.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.front;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id));
            let node = self.arena.get(id).expect("node missing");
            assert_eq!(node.prev, prev);
            if let Some(next_id) = node.next {
                let next_node = self.arena.get(next_id).expect("next node missing");
                assert_eq!(next_node.prev, Some(id));
            } else {
                assert_eq!(self.back, Some(id));
            }

            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(count, self.len());
    }
}

impl<T> Default for OrderList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OrderListIter<'a, T> {
    list: &'a OrderList<T>,
    current: Option<NodeRef>,
}

impl<'a, T> Iterator for OrderListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// Iterator over `(NodeRef, &T)` pairs from front to back.
pub struct OrderListEntryIter<'a, T> {
    list: &'a OrderList<T>,
    current: Option<NodeRef>,
}

impl<'a, T> Iterator for OrderListEntryIter<'a, T> {
    type Item = (NodeRef, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some((id, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_in_order() {
        let mut list = OrderList::new();
        let a = list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"c"));
        assert_eq!(list.front_ref(), Some(a));

        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_front(), Some("b"));
        assert_eq!(list.pop_front(), Some("c"));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert!(!list.contains(a));
    }

    #[test]
    fn iter_runs_front_to_back() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn iter_is_restartable() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        let first: Vec<_> = list.iter().copied().collect();
        let second: Vec<_> = list.iter().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn move_to_back_refreshes_position() {
        let mut list = OrderList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.move_to_back(a));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["b", "c", "a"]);

        // Back node stays put.
        assert!(list.move_to_back(a));
        assert_eq!(list.back(), Some(&"a"));

        assert!(list.move_to_back(b));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["c", "a", "b"]);

        list.remove(c);
        assert!(!list.move_to_back(c));
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_middle_and_ends() {
        let mut list = OrderList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a", "c"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"c"));

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.remove(c), None);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut list = OrderList::new();
        let id = list.push_back(10);
        *list.get_mut(id).unwrap() = 20;
        assert_eq!(list.get(id), Some(&20));
    }

    #[test]
    fn entry_iter_pairs_handles_with_values() {
        let mut list = OrderList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let entries: Vec<_> = list.iter_entries().map(|(id, v)| (id, *v)).collect();
        assert_eq!(entries, vec![(a, "a"), (b, "b")]);
    }

    #[test]
    fn clear_resets_state() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn invariants_hold_after_mixed_edits() {
        let mut list = OrderList::with_capacity(4);
        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);
        list.move_to_back(a);
        list.remove(b);
        list.push_back(4);
        list.move_to_back(c);
        list.pop_front();
        list.debug_validate_invariants();
    }
}
