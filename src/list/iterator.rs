use crate::list::{List, TAIL};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `List`.
///
/// It keeps a pair of positions `front..back`, each a node index plus a slot
/// offset, to represent the half-open range still to be yielded.
///
/// # Examples
///
/// ```compile_fail
/// use unrolled_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.append(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: (usize, usize),
    back: (usize, usize),
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: (list.first_node(), 0),
            back: (TAIL, 0),
            len: list.len(),
        }
    }
}

// A derived `Clone` would require `T: Clone`.
impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        self.clone().for_each(|item| {
            f.field(item);
        });
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the element at `front` and step `front` to the next slot,
    /// moving on to the next node past the last occupied one.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let (idx, offset) = self.front;
        let node = self.list.node(idx);
        self.front = if offset + 1 < node.len() {
            (idx, offset + 1)
        } else {
            (node.next, 0)
        };
        self.len -= 1;
        node.get(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Step `back` to the previous slot, crossing into the previous node when
    /// at its start, and return the element there.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let (mut idx, mut end) = self.back;
        if end == 0 {
            idx = self.list.node(idx).prev;
            end = self.list.node(idx).len();
        }
        self.back = (idx, end - 1);
        self.len -= 1;
        self.list.node(idx).get(end - 1)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). Elements are taken out of their
/// slots in place, so no node is reshuffled while iterating.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
    front: (usize, usize),
    back: (usize, usize),
    len: usize,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.len).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let (idx, offset) = self.front;
        let node = self.list.node_mut(idx);
        let item = node.take(offset);
        self.front = if offset + 1 < node.len() {
            (idx, offset + 1)
        } else {
            (node.next, 0)
        };
        self.len -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let (mut idx, mut end) = self.back;
        if end == 0 {
            idx = self.list.node(idx).prev;
            end = self.list.node(idx).len();
        }
        self.back = (idx, end - 1);
        self.len -= 1;
        self.list.node_mut(idx).take(end - 1)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: (self.first_node(), 0),
            back: (TAIL, 0),
            len: self.len(),
            list: self,
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects through [`List::append`], so repeated values keep only their
/// first occurrence.
impl<T: PartialEq> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| {
            self.append(item);
        });
    }
}

impl<'a, T: 'a + Copy + PartialEq> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
