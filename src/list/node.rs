/// A link of the chain: a fixed-capacity slot array plus the arena indices
/// of its neighbours.
///
/// Slots `[0, count)` are occupied and `[count, capacity)` are empty. Node
/// operations never touch `prev`/`next`; keeping the links consistent is the
/// job of [`List`](crate::List).
#[derive(Clone)]
pub(crate) struct Node<T> {
    slots: Box<[Option<T>]>,
    count: usize,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            count: 0,
            prev: 0,
            next: 0,
        }
    }

    /// Sentinels hold no data, so they get no slots at all.
    pub(crate) fn sentinel() -> Self {
        Self::new(0)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// All slots, occupied or not, in order.
    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        self.slots[..self.count].get(offset)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.slots[..self.count].get_mut(offset)?.as_mut()
    }

    /// Take the element out of an occupied slot without shifting, leaving the
    /// slot empty. Only used while the whole node is being consumed.
    pub(crate) fn take(&mut self, offset: usize) -> Option<T> {
        self.slots[..self.count].get_mut(offset)?.take()
    }

    /// Write `value` into the first empty slot.
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push into a full node");
        self.slots[self.count] = Some(value);
        self.count += 1;
    }

    /// Write `value` at `offset`, shifting `[offset, count)` one slot right.
    pub(crate) fn insert(&mut self, offset: usize, value: T) {
        debug_assert!(!self.is_full(), "insert into a full node");
        debug_assert!(offset <= self.count);
        // slot `count` is empty, rotating it down frees `offset`
        self.slots[offset..=self.count].rotate_right(1);
        self.slots[offset] = Some(value);
        self.count += 1;
    }

    /// Remove the element at `offset`, shifting `[offset + 1, count)` one slot
    /// left. The vacated trailing slot is left empty.
    pub(crate) fn remove(&mut self, offset: usize) -> T {
        debug_assert!(offset < self.count);
        let value = self.slots[offset]
            .take()
            .expect("slots below `count` are always occupied");
        self.slots[offset..self.count].rotate_left(1);
        self.count -= 1;
        value
    }

    /// Overwrite the element at `offset`, returning the previous one.
    pub(crate) fn replace(&mut self, offset: usize, value: T) -> T {
        debug_assert!(offset < self.count);
        self.slots[offset]
            .replace(value)
            .expect("slots below `count` are always occupied")
    }

    /// Move the elements `[at, count)` onto the end of `dst`, in order.
    ///
    /// Used both to split a full node (`at = M/2`, `dst` fresh) and to merge
    /// a whole neighbour into this node (`at = 0`).
    pub(crate) fn move_tail(&mut self, at: usize, dst: &mut Node<T>) {
        debug_assert!(at <= self.count);
        debug_assert!(dst.count + (self.count - at) <= dst.slots.len());
        for slot in &mut self.slots[at..self.count] {
            dst.slots[dst.count] = slot.take();
            dst.count += 1;
        }
        self.count = at;
    }

    /// Drop every element, leaving the node empty but keeping its slots so
    /// the arena can reuse it.
    pub(crate) fn clear(&mut self) {
        self.slots[..self.count].iter_mut().for_each(|slot| *slot = None);
        self.count = 0;
    }

    pub(crate) fn elements(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.slots[..self.count].iter().flatten()
    }
}
