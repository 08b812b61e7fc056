use alloc::vec::Vec;
use core::fmt;
use core::mem;

extern crate alloc;

/// Link value marking the absence of a neighbour (or of a head/tail).
const NIL: usize = usize::MAX;

/// Stable handle to a node inside a [`List`].
///
/// A handle stays valid until the node it names is removed. After removal the
/// slot goes to the free list and the same handle may later name a new node,
/// so callers must drop handles of removed nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// A slot in the arena.
///
/// `val` is `None` while the slot sits on the free list.
struct Node<T> {
    val: Option<T>,
    prev: usize,
    next: usize,
}

/// A doubly linked list stored in a `Vec` arena.
///
/// Nodes are addressed by [`NodeId`] instead of pointers. The front of the list is
/// the most recently attached node, the back is the oldest. Removed slots are kept
/// on a free list and handed out again by [`List::push_front`] before the arena
/// grows, so a list that churns at a steady size stops allocating.
///
/// # Examples
///
/// ```ignore
/// let mut list = List::with_capacity(2);
/// let a = list.push_front(10);
/// let b = list.push_front(20);
/// list.move_to_front(a);
/// assert_eq!(list.back(), Some(b));
/// ```
pub(crate) struct List<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        List {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Returns the number of linked nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots waiting on the free list.
    #[inline]
    #[allow(dead_code)]
    pub(crate) fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Handle of the most recently attached node.
    #[inline]
    #[allow(dead_code)]
    pub(crate) fn front(&self) -> Option<NodeId> {
        (self.head != NIL).then_some(NodeId(self.head))
    }

    /// Handle of the oldest node.
    #[inline]
    pub(crate) fn back(&self) -> Option<NodeId> {
        (self.tail != NIL).then_some(NodeId(self.tail))
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0)?.val.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0)?.val.as_mut()
    }

    /// Links `val` at the front, reusing a free slot when one is available.
    pub(crate) fn push_front(&mut self, val: T) -> NodeId {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx].val = Some(val);
                idx
            }
            None => {
                self.nodes.push(Node {
                    val: Some(val),
                    prev: NIL,
                    next: NIL,
                });
                self.nodes.len() - 1
            }
        };
        self.attach(idx);
        self.len += 1;
        NodeId(idx)
    }

    /// Moves a linked node to the front. Stale handles are ignored.
    pub(crate) fn move_to_front(&mut self, id: NodeId) {
        if !self.is_linked(id.0) || self.head == id.0 {
            return;
        }
        self.detach(id.0);
        self.attach(id.0);
    }

    /// Overwrites the value held by a linked node in place and returns the old one.
    ///
    /// The node keeps its position; the caller decides whether to move it.
    pub(crate) fn replace(&mut self, id: NodeId, val: T) -> Option<T> {
        let slot = self.nodes.get_mut(id.0)?.val.as_mut()?;
        Some(mem::replace(slot, val))
    }

    /// Unlinks a node and returns its value. The slot goes to the free list.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.is_linked(id.0) {
            return None;
        }
        self.detach(id.0);
        self.len -= 1;
        self.free.push(id.0);
        self.nodes[id.0].val.take()
    }

    /// Unlinks and returns the oldest value.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let tail = self.back()?;
        self.remove(tail)
    }

    /// Drops every node and releases the free list.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Iterates from front to back.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.len,
        }
    }

    #[inline]
    fn is_linked(&self, idx: usize) -> bool {
        self.nodes.get(idx).map_or(false, |node| node.val.is_some())
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn attach(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head == NIL {
            self.tail = idx;
        } else {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("len", &self.len)
            .field("slots", &self.nodes.len())
            .field("free", &self.free.len())
            .finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.nodes.get(self.cursor)?;
        self.cursor = node.next;
        self.remaining -= 1;
        node.val.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
