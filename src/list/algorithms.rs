use crate::list::{next_list_id, List};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod sort;

use sort::{bubble_sort_descending, insertion_sort};

impl<T: PartialEq> PartialEq for List<T> {
    /// Lists compare by their elements only; node size and node layout are
    /// ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// The clone keeps the node size and the exact node layout, but is a
    /// distinct list: cursors of the original do not accept it.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            free: self.free.clone(),
            node_size: self.node_size,
            len: self.len,
            generation: self.generation,
            id: next_list_id(),
        }
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list in ascending order.
    ///
    /// The elements are moved out into a buffer, sorted there and appended
    /// back one by one through [`List::append`]. Afterwards every node except
    /// the last is full.
    ///
    /// Because the rebuild goes through `append`, only the first of several
    /// equal elements survives. Equal elements can only be present if they
    /// were placed with [`List::insert`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*<sup>2</sup>) time and *O*(*n*) memory.
    ///
    /// # Current Implementation
    ///
    /// The buffer is sorted by a stable insertion sort.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(list.node_lens(), vec![4, 1]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sort the list with a comparator function, the same way as
    /// [`List::sort`].
    ///
    /// The comparator must define a total ordering for the elements in the
    /// list; otherwise the resulting order is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([-5i32, 4, 1, -3, 2]);
    /// v.sort_by(|a, b| a.abs().cmp(&b.abs()));
    /// assert_eq!(v.to_vec(), vec![1, 2, -3, 4, -5]);
    ///
    /// let mut floats = List::from_iter([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(floats.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        T: PartialEq,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.drain_all();
        insertion_sort(&mut elements, |a, b| compare(a, b) == Ordering::Less);
        self.rebuild(elements);
    }

    /// Sort the list in descending order.
    ///
    /// Works like [`List::sort`], including the loss of duplicates, but sorts
    /// the buffer with a bubble sort that stops after the first pass without
    /// a swap.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort_descending();
    ///
    /// assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_descending(&mut self)
    where
        T: Ord,
    {
        let mut elements = self.drain_all();
        bubble_sort_descending(&mut elements);
        self.rebuild(elements);
    }

    fn rebuild(&mut self, elements: Vec<T>)
    where
        T: PartialEq,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = elements.len(), "rebuild list from sorted buffer");
        for element in elements {
            self.append(element);
        }
    }
}
