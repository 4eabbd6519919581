use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::list::cursor::Cursor;
use crate::list::node::Node;
use crate::Iter;

pub mod cursor;
pub mod iterator;
pub mod layout;

mod algorithms;
mod node;

/// Node size used by [`List::new`].
pub const DEFAULT_NODE_SIZE: usize = 4;

/// Arena index of the head sentinel.
const HEAD: usize = 0;
/// Arena index of the tail sentinel.
const TAIL: usize = 1;

/// Source of list identities; every list value, clones included, draws a
/// fresh one.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// The `List` is a doubly-linked list whose nodes each hold up to `M`
/// elements (the *node size*). Positional access walks nodes rather than
/// elements, so it takes *O*(*n* / *M*) hops.
///
/// The `List` contains:
/// - an arena `nodes` holding every node, where index `0` is the head
///   sentinel and index `1` is the tail sentinel;
/// - a free list of arena indices released by merges, reused before the
///   arena grows;
/// - the live element count `len`;
/// - a `generation` counter bumped on every mutation, which lets detached
///   [`Cursor`]s detect that they went stale;
/// - a process-wide unique `id`, which lets a [`Cursor`] refuse a list it
///   was not created from.
///
/// Every node except the last holds at least `M / 2` elements, and no node
/// in the chain is ever empty.
///
/// # Naming Conventions
///
/// - `at`: a logical element position in `0..len` (or `0..=len` for
///   insertion);
/// - `idx`: an arena index of a node;
/// - `offset`: a slot position inside one node.
pub struct List<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    node_size: usize,
    /// the number of elements in the list
    len: usize,
    generation: u64,
    id: u64,
}

// private methods
impl<T> List<T> {
    pub(crate) fn first_node(&self) -> usize {
        self.nodes[HEAD].next
    }

    pub(crate) fn last_node(&self) -> usize {
        self.nodes[TAIL].prev
    }

    pub(crate) fn node(&self, idx: usize) -> &Node<T> {
        &self.nodes[idx]
    }

    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        &mut self.nodes[idx]
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Record a mutation, invalidating every cursor synchronised before it.
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Arena indices of the real nodes, from first to last.
    pub(crate) fn node_indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.first_node()), move |&idx| {
            Some(self.nodes[idx].next)
        })
        .take_while(|&idx| idx != TAIL)
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Return an empty node ready to be attached, recycling a released one
    /// if possible.
    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free.pop() {
            debug_assert!(self.nodes[idx].is_empty());
            return idx;
        }
        self.nodes.push(Node::new(self.node_size));
        self.nodes.len() - 1
    }

    /// Attach the node `idx` between the adjacent nodes `prev` and `next`.
    fn attach_node(&mut self, prev: usize, next: usize, idx: usize) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, idx);
        self.connect(idx, next);
    }

    /// Unlink the node `idx` from the chain, drop whatever it still holds and
    /// put it on the free list.
    fn detach_node(&mut self, idx: usize) {
        debug_assert!(idx != HEAD && idx != TAIL, "sentinels are never detached");
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        self.connect(prev, next);
        self.nodes[idx].clear();
        self.free.push(idx);
    }

    /// Borrow two distinct nodes mutably at once.
    fn two_nodes_mut(&mut self, a: usize, b: usize) -> (&mut Node<T>, &mut Node<T>) {
        debug_assert_ne!(a, b);
        if a < b {
            let (left, right) = self.nodes.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.nodes.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }

    /// Locate the node holding position `at` and the offset inside it.
    ///
    /// Returns `None` only if `at >= len`.
    pub(crate) fn find(&self, at: usize) -> Option<(usize, usize)> {
        if at >= self.len {
            return None;
        }
        let mut seen = 0;
        for idx in self.node_indices() {
            let count = self.nodes[idx].len();
            if at < seen + count {
                return Some((idx, at - seen));
            }
            seen += count;
        }
        debug_assert!(false, "`len` disagrees with the node chain");
        None
    }

    fn out_of_bounds(&self, at: usize) -> Error {
        Error::IndexOutOfBounds {
            index: at,
            len: self.len,
        }
    }

    /// Push `value` after the last element without any uniqueness check.
    pub(crate) fn push_back(&mut self, value: T) {
        let last = self.last_node();
        if last == HEAD || self.nodes[last].is_full() {
            let idx = self.alloc_node();
            self.nodes[idx].push(value);
            self.attach_node(last, TAIL, idx);
        } else {
            self.nodes[last].push(value);
        }
        self.len += 1;
        self.touch();
    }

    /// Detach every node and return the elements in order, leaving the list
    /// empty.
    pub(crate) fn drain_all(&mut self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len);
        let indices: Vec<usize> = self.node_indices().collect();
        for idx in indices {
            let node = &mut self.nodes[idx];
            elements.extend((0..node.len()).filter_map(|offset| node.take(offset)));
            self.detach_node(idx);
        }
        debug_assert_eq!(elements.len(), self.len);
        self.len = 0;
        self.touch();
        elements
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.nodes[prev].next, next);
        assert_eq!(self.nodes[next].prev, prev);
    }
}

impl<T> List<T> {
    /// Create an empty `List` with [`DEFAULT_NODE_SIZE`] elements per node.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::List;
    /// let list: List<u32> = List::new();
    /// assert_eq!(list.node_size(), 4);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_sentinels(DEFAULT_NODE_SIZE)
    }

    /// Create an empty `List` whose nodes hold `node_size` elements each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeSize`] unless `node_size` is a positive
    /// even number.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::{Error, List};
    ///
    /// let list = List::<i32>::with_node_size(6).unwrap();
    /// assert_eq!(list.node_size(), 6);
    ///
    /// assert_eq!(List::<i32>::with_node_size(3).err(), Some(Error::InvalidNodeSize(3)));
    /// assert_eq!(List::<i32>::with_node_size(0).err(), Some(Error::InvalidNodeSize(0)));
    /// ```
    pub fn with_node_size(node_size: usize) -> Result<Self> {
        if node_size == 0 || node_size % 2 != 0 {
            return Err(Error::InvalidNodeSize(node_size));
        }
        Ok(Self::with_sentinels(node_size))
    }

    fn with_sentinels(node_size: usize) -> Self {
        let mut head = Node::sentinel();
        let mut tail = Node::sentinel();
        head.next = TAIL;
        tail.prev = HEAD;
        Self {
            nodes: vec![head, tail],
            free: Vec::new(),
            node_size,
            len: 0,
            generation: 0,
            id: next_list_id(),
        }
    }

    /// The maximum number of elements a single node holds.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `List` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes currently linked in the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(0..9);
    /// assert_eq!(list.node_count(), 3);
    /// ```
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 2 - self.free.len()
    }

    /// Returns the number of elements held by each node, in chain order.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    /// assert_eq!(list.node_lens(), vec![4, 2]);
    ///
    /// list.insert(1, 10).unwrap();
    /// assert_eq!(list.node_lens(), vec![3, 2, 2]);
    /// ```
    pub fn node_lens(&self) -> Vec<usize> {
        self.node_indices().map(|idx| self.nodes[idx].len()).collect()
    }

    /// Removes all elements from the `List`. The node size is kept.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let indices: Vec<usize> = self.node_indices().collect();
        for idx in indices {
            self.detach_node(idx);
        }
        self.len = 0;
        self.touch();
    }

    /// Provides a reference to the element at `at`, or `None` if it is out
    /// of bounds.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* / *M*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([5, 3, 8, 1, 7]);
    /// assert_eq!(list.get(4), Some(&7));
    /// assert_eq!(list.get(5), None);
    /// ```
    pub fn get(&self, at: usize) -> Option<&T> {
        let (idx, offset) = self.find(at)?;
        self.nodes[idx].get(offset)
    }

    /// Provides a mutable reference to the element at `at`, or `None` if it
    /// is out of bounds.
    ///
    /// Counts as a mutation: cursors created before the call become stale.
    pub fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        let (idx, offset) = self.find(at)?;
        self.touch();
        self.nodes[idx].get_mut(offset)
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.nodes[self.last_node()].elements().next_back()
    }

    /// Appends an element to the back of the list, unless an equal element is
    /// already present. Returns whether the element was added.
    ///
    /// This is the only path that enforces uniqueness: [`List::insert`] at an
    /// interior position accepts duplicates.
    ///
    /// # Complexity
    ///
    /// The append itself is *O*(1) and never splits a node, but the
    /// uniqueness check scans the whole list.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.append(1));
    /// assert!(list.append(2));
    /// assert!(!list.append(1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn append(&mut self, value: T) -> bool
    where
        T: PartialEq,
    {
        if self.contains(&value) {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = self.len, "append rejected an element already present");
            return false;
        }
        self.push_back(value);
        true
    }

    /// Inserts an element at position `at`.
    ///
    /// Inserting at `len` goes through [`List::append`], so a value already
    /// present is silently ignored there. Any other position accepts
    /// duplicates.
    ///
    /// If the target node is full it is split: its upper half moves to a new
    /// node linked right after it, and the element goes to whichever half
    /// contains its offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 3, 8, 1]);
    /// list.insert(2, 9).unwrap();
    /// assert_eq!(list.to_vec(), vec![5, 3, 9, 8, 1]);
    /// assert_eq!(list.layout().to_string(), "[(5, 3, 9, -), (8, 1, -, -)]");
    ///
    /// assert!(list.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, at: usize, value: T) -> Result<()>
    where
        T: PartialEq,
    {
        if at > self.len {
            return Err(self.out_of_bounds(at));
        }
        if at == self.len {
            self.append(value);
            return Ok(());
        }
        let (idx, offset) = self.find(at).ok_or_else(|| self.out_of_bounds(at))?;
        if !self.nodes[idx].is_full() {
            self.nodes[idx].insert(offset, value);
        } else {
            let half = self.node_size / 2;
            let upper = self.alloc_node();
            let next = self.nodes[idx].next;
            {
                let (node, fresh) = self.two_nodes_mut(idx, upper);
                node.move_tail(half, fresh);
            }
            self.attach_node(idx, next, upper);
            #[cfg(feature = "tracing")]
            tracing::trace!(node = idx, upper, offset, "split full node");
            if offset <= half {
                self.nodes[idx].insert(offset, value);
            } else {
                self.nodes[upper].insert(offset - half, value);
            }
        }
        self.len += 1;
        self.touch();
        Ok(())
    }

    /// Removes the element at position `at` and returns it.
    ///
    /// If the node it came from was at most half full and is not the last
    /// node, it then borrows the first element of its successor (when the
    /// successor is more than half full) or absorbs the successor entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=6);
    /// assert_eq!(list.node_lens(), vec![4, 2]);
    ///
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert_eq!(list.remove(0), Ok(2));
    /// // the first node was only half full, so it absorbed the second one
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.node_lens(), vec![3]);
    /// assert_eq!(list.to_vec(), vec![4, 5, 6]);
    ///
    /// assert!(list.remove(3).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        let (idx, offset) = self.find(at).ok_or_else(|| self.out_of_bounds(at))?;
        let half = self.node_size / 2;
        let underfull = self.nodes[idx].len() <= half;
        let next = self.nodes[idx].next;
        let value = self.nodes[idx].remove(offset);
        if next == TAIL {
            if self.nodes[idx].is_empty() {
                #[cfg(feature = "tracing")]
                tracing::trace!(node = idx, "unlink emptied last node");
                self.detach_node(idx);
            }
        } else if underfull {
            if self.nodes[next].len() > half {
                #[cfg(feature = "tracing")]
                tracing::trace!(node = idx, from = next, "borrow first element of next node");
                let borrowed = self.nodes[next].remove(0);
                self.nodes[idx].push(borrowed);
            } else {
                #[cfg(feature = "tracing")]
                tracing::trace!(node = idx, absorbed = next, "merge next node");
                let (node, successor) = self.two_nodes_mut(idx, next);
                successor.move_tail(0, node);
                self.detach_node(next);
            }
        }
        self.len -= 1;
        self.touch();
        Ok(value)
    }

    /// Replaces the element at position `at`, returning the old one. The node
    /// layout is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c']);
    /// assert_eq!(list.replace(1, 'x'), Ok('b'));
    /// assert_eq!(list.to_vec(), vec!['a', 'x', 'c']);
    /// ```
    pub fn replace(&mut self, at: usize, value: T) -> Result<T> {
        let (idx, offset) = self.find(at).ok_or_else(|| self.out_of_bounds(at))?;
        self.touch();
        Ok(self.nodes[idx].replace(offset, value))
    }

    /// Provides a cursor positioned before the first element.
    ///
    /// The cursor works on a snapshot of the list; see [`Cursor`].
    pub fn cursor(&self) -> Cursor<T>
    where
        T: Clone,
    {
        Cursor::new(self, 0)
    }

    /// Provides a cursor positioned before the element at `at`.
    ///
    /// By convention, the cursor is past the last element if `at == len`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_at(1).unwrap();
    /// assert_eq!(cursor.next(&list), Ok(&2));
    ///
    /// assert!(list.cursor_at(3).is_ok());
    /// assert!(list.cursor_at(4).is_err());
    /// ```
    pub fn cursor_at(&self, at: usize) -> Result<Cursor<T>>
    where
        T: Clone,
    {
        if at > self.len {
            return Err(self.out_of_bounds(at));
        }
        Ok(Cursor::new(self, at))
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.append(0);
    /// list.append(1);
    /// list.append(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Copies the elements into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::{List, HEAD, TAIL};
    use std::cell::RefCell;
    use std::iter::FromIterator;

    /// Walk the chain and check every structural invariant.
    pub(crate) fn assert_well_formed<T>(list: &List<T>) {
        let half = list.node_size() / 2;
        let indices: Vec<usize> = list.node_indices().collect();
        let mut prev = HEAD;
        let mut total = 0;
        for (i, &idx) in indices.iter().enumerate() {
            let node = list.node(idx);
            assert_eq!(node.prev, prev, "broken back link at node {}", idx);
            assert!(!node.is_empty(), "empty node {} left in the chain", idx);
            assert!(node.len() <= list.node_size());
            if i + 1 < indices.len() {
                assert!(node.len() >= half, "non-last node {} under half full", idx);
            }
            assert!(node.slots()[..node.len()].iter().all(Option::is_some));
            assert!(node.slots()[node.len()..].iter().all(Option::is_none));
            total += node.len();
            prev = idx;
        }
        assert_eq!(list.node(TAIL).prev, prev);
        assert_eq!(total, list.len());
        assert_eq!(list.node_count(), indices.len());
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert!(list.append(1));
        assert!(!list.is_empty());
        assert_eq!(list.remove(0), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.node_count(), 0);
        assert_well_formed(&list);
    }

    #[test]
    fn list_invalid_node_size() {
        for size in [0, 1, 3, 7] {
            assert_eq!(
                List::<u8>::with_node_size(size).err(),
                Some(Error::InvalidNodeSize(size))
            );
        }
        assert!(List::<u8>::with_node_size(2).is_ok());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy + PartialEq> PartialEq for DropChecker<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        for value in 1..=5 {
            list.append(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn list_append_fills_last_node() {
        let mut list = List::with_node_size(4).unwrap();
        for value in [5, 3, 8, 1] {
            assert!(list.append(value));
        }
        assert_eq!(list.node_lens(), vec![4]);
        assert_eq!(list.layout().to_string(), "[(5, 3, 8, 1)]");

        assert!(list.append(2));
        assert_eq!(list.node_lens(), vec![4, 1]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_append_rejects_duplicates() {
        // Only the append path is set-like; interior inserts are not.
        let mut list = List::new();
        assert!(list.append(1));
        assert!(list.append(2));
        assert!(!list.append(2));
        assert_eq!(list.to_vec(), vec![1, 2]);

        list.insert(0, 2).unwrap();
        assert_eq!(list.to_vec(), vec![2, 1, 2]);

        // inserting at `len` delegates to append, so this one is dropped
        list.insert(3, 1).unwrap();
        assert_eq!(list.to_vec(), vec![2, 1, 2]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_insert_split() {
        let mut list = List::from_iter([5, 3, 8, 1]);
        list.insert(2, 9).unwrap();
        assert_eq!(list.layout().to_string(), "[(5, 3, 9, -), (8, 1, -, -)]");

        // offset past the split point lands in the upper half
        let mut list = List::from_iter([5, 3, 8, 1]);
        list.insert(3, 9).unwrap();
        assert_eq!(list.layout().to_string(), "[(5, 3, -, -), (8, 9, 1, -)]");

        let mut list = List::from_iter([5, 3, 8, 1]);
        list.insert(0, 9).unwrap();
        assert_eq!(list.layout().to_string(), "[(9, 5, 3, -), (8, 1, -, -)]");
        assert_well_formed(&list);
    }

    #[test]
    fn list_split_links_new_node_in_the_middle() {
        let mut list = List::from_iter(0..12);
        assert_eq!(list.node_lens(), vec![4, 4, 4]);
        list.insert(5, 100).unwrap();
        assert_eq!(list.node_lens(), vec![4, 3, 2, 4]);
        assert_eq!(
            list.to_vec(),
            vec![0, 1, 2, 3, 4, 100, 5, 6, 7, 8, 9, 10, 11]
        );
        assert_well_formed(&list);
    }

    #[test]
    fn list_remove_scenario() {
        let mut list = List::from_iter([5, 3, 8, 1]);
        list.insert(2, 9).unwrap();
        assert_eq!(list.remove(0), Ok(5));
        assert_eq!(list.layout().to_string(), "[(3, 9, -, -), (8, 1, -, -)]");
        assert_well_formed(&list);
    }

    #[test]
    fn list_remove_borrows_from_next() {
        let mut list = List::from_iter(0..8);
        list.remove(7).unwrap();
        list.remove(0).unwrap();
        list.remove(0).unwrap();
        // [(2, 3), (4, 5, 6)]
        assert_eq!(list.node_lens(), vec![2, 3]);
        assert_eq!(list.remove(1), Ok(3));
        assert_eq!(list.layout().to_string(), "[(2, 4, -, -), (5, 6, -, -)]");
        assert_well_formed(&list);
    }

    #[test]
    fn list_remove_merges_with_next() {
        let mut list = List::from_iter(0..6);
        list.remove(0).unwrap();
        list.remove(0).unwrap();
        assert_eq!(list.layout().to_string(), "[(2, 3, -, -), (4, 5, -, -)]");
        assert_eq!(list.remove(0), Ok(2));
        assert_eq!(list.layout().to_string(), "[(3, 4, 5, -)]");
        assert_eq!(list.node_count(), 1);
        assert_well_formed(&list);

        // a short last node is absorbed too
        let mut list = List::from_iter(0..5);
        list.remove(0).unwrap();
        list.remove(0).unwrap();
        assert_eq!(list.remove(1), Ok(3));
        assert_eq!(list.layout().to_string(), "[(2, 4, -, -)]");
        assert_well_formed(&list);
    }

    #[test]
    fn list_remove_unlinks_emptied_last_node() {
        let mut list = List::from_iter(0..5);
        assert_eq!(list.node_lens(), vec![4, 1]);
        assert_eq!(list.remove(4), Ok(4));
        assert_eq!(list.node_lens(), vec![4]);
        assert_well_formed(&list);

        // the released node is reused by the next allocation
        let arena = list.nodes.len();
        list.append(10);
        assert_eq!(list.nodes.len(), arena);
        assert_well_formed(&list);
    }

    #[test]
    fn list_out_of_bounds() {
        let mut list = List::from_iter(0..3);
        assert_eq!(
            list.insert(4, 10),
            Err(Error::IndexOutOfBounds { index: 4, len: 3 })
        );
        assert_eq!(
            list.remove(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            list.replace(3, 0),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(list.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn list_insert_then_remove_round_trip() {
        for size in [2, 4, 6] {
            for at in 0..=13 {
                let mut list = List::with_node_size(size).unwrap();
                list.extend(0..13);
                let before = list.to_vec();
                list.insert(at, 100).unwrap();
                assert_well_formed(&list);
                assert_eq!(list.remove(at), Ok(100));
                assert_eq!(list.to_vec(), before);
                assert_well_formed(&list);
            }
        }
    }

    #[test]
    fn list_find_walks_nodes() {
        let list = List::from_iter(0..10);
        for at in 0..10 {
            let (idx, offset) = list.find(at).unwrap();
            assert_eq!(list.node(idx).get(offset), Some(&at));
        }
        assert_eq!(list.find(10), None);
    }

    #[test]
    fn list_front_back_and_clear() {
        let mut list = List::from_iter(0..7);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&6));
        *list.get_mut(6).unwrap() = 60;
        assert_eq!(list.back(), Some(&60));
        list.clear();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.node_count(), 0);
        assert_well_formed(&list);
        list.append(1);
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn list_node_size_two() {
        let mut list = List::with_node_size(2).unwrap();
        list.extend(0..6);
        assert_eq!(list.node_lens(), vec![2, 2, 2]);
        list.insert(1, 10).unwrap();
        assert_eq!(list.node_lens(), vec![2, 1, 2, 2]);
        assert_eq!(list.remove(2), Ok(1));
        assert_well_formed(&list);
        assert_eq!(list.to_vec(), vec![0, 10, 2, 3, 4, 5]);
    }
}
