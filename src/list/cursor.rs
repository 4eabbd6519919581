use crate::error::{Error, Result};
use crate::list::List;

/// The step a cursor took most recently, which decides the element that
/// [`Cursor::remove`] and [`Cursor::set`] act upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// No step since construction or since the last mutation.
    None,
    /// [`Cursor::next`]: the yielded element sits at `index - 1`.
    Forward,
    /// [`Cursor::previous`]: the yielded element sits at `index`.
    Backward,
}

/// A bidirectional cursor over a [`List`].
///
/// A `Cursor` does not borrow the list. It owns a snapshot of the elements
/// taken at construction and retaken after every mutation it performs, and
/// takes the list as an argument whenever it needs to read or write it. This
/// lets a cursor live alongside other mutations of the list; the first call
/// after such a mutation fails with [`Error::ConcurrentModification`] instead
/// of returning stale data. A cursor only ever works with the list it was
/// created from; any other list, a clone included, is refused with
/// [`Error::ForeignList`].
///
/// In a list with length *n*, there are *n* + 1 valid cursor positions,
/// indexed by 0, 1, ..., *n*. The cursor sits *between* elements: `next`
/// yields the element after it, `previous` the element before it.
///
/// # Examples
///
/// ```
/// use unrolled_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3, 4, 5]);
/// let mut cursor = list.cursor();
///
/// assert_eq!(cursor.next(&list), Ok(&1));
/// assert_eq!(cursor.next(&list), Ok(&2));
/// assert_eq!(cursor.next(&list), Ok(&3));
///
/// // remove the element just yielded
/// assert_eq!(cursor.remove(&mut list), Ok(3));
/// assert_eq!(list.to_vec(), vec![1, 2, 4, 5]);
/// assert_eq!(cursor.next(&list), Ok(&4));
/// ```
///
/// Mutating the list behind the cursor's back is detected:
///
/// ```
/// use unrolled_list::{Error, List};
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor();
/// list.append(4);
/// assert!(matches!(cursor.next(&list), Err(Error::ConcurrentModification { .. })));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    snapshot: Vec<T>,
    index: usize,
    last: Step,
    generation: u64,
    list_id: u64,
}

impl<T: Clone> Cursor<T> {
    pub(crate) fn new(list: &List<T>, index: usize) -> Self {
        debug_assert!(index <= list.len());
        Self {
            snapshot: list.to_vec(),
            index,
            last: Step::None,
            generation: list.generation(),
            list_id: list.id(),
        }
    }

    /// Fail if `list` is not the list this cursor came from, or if it changed
    /// since this cursor last synchronised with it.
    fn check(&self, list: &List<T>) -> Result<()> {
        if list.id() != self.list_id {
            #[cfg(feature = "tracing")]
            tracing::debug!(owner = self.list_id, given = list.id(), "cursor used with a foreign list");
            return Err(Error::ForeignList);
        }
        let found = list.generation();
        if found != self.generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(expected = self.generation, found, "stale cursor used");
            return Err(Error::ConcurrentModification {
                expected: self.generation,
                found,
            });
        }
        Ok(())
    }

    /// Retake the snapshot after a mutation made through this cursor.
    fn resync(&mut self, list: &List<T>) {
        self.snapshot = list.to_vec();
        self.generation = list.generation();
        self.last = Step::None;
    }

    /// Position of the element the last step yielded.
    fn last_yielded(&self) -> Result<usize> {
        match self.last {
            Step::Forward => Ok(self.index - 1),
            Step::Backward => Ok(self.index),
            Step::None => Err(Error::InvalidState),
        }
    }

    /// Returns `true` if there is an element after the cursor.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index < self.snapshot.len()
    }

    /// Returns `true` if there is an element before the cursor.
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// The position of the element [`Cursor::next`] would yield.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// The position of the element [`Cursor::previous`] would yield, or
    /// `None` at the start of the list.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Move past the next element and return it.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] at the end of the list,
    /// [`Error::ConcurrentModification`] if `list` changed behind the cursor,
    /// [`Error::ForeignList`] if `list` is not the cursor's list.
    pub fn next(&mut self, list: &List<T>) -> Result<&T> {
        self.check(list)?;
        if !self.has_next() {
            return Err(Error::NoSuchElement);
        }
        self.index += 1;
        self.last = Step::Forward;
        Ok(&self.snapshot[self.index - 1])
    }

    /// Move back past the previous element and return it.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] at the start of the list,
    /// [`Error::ConcurrentModification`] if `list` changed behind the cursor,
    /// [`Error::ForeignList`] if `list` is not the cursor's list.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(['a', 'b']);
    /// let mut cursor = list.cursor_at(2).unwrap();
    /// assert_eq!(cursor.previous(&list), Ok(&'b'));
    /// assert_eq!(cursor.previous(&list), Ok(&'a'));
    /// assert_eq!(cursor.previous(&list), Err(Error::NoSuchElement));
    /// ```
    pub fn previous(&mut self, list: &List<T>) -> Result<&T> {
        self.check(list)?;
        if !self.has_previous() {
            return Err(Error::NoSuchElement);
        }
        self.index -= 1;
        self.last = Step::Backward;
        Ok(&self.snapshot[self.index])
    }

    /// Remove the element the last step yielded, and return it.
    ///
    /// After a forward step the cursor stays just before the element that
    /// followed the removed one. After a backward step the cursor moves back
    /// by one more position (stopping at zero), so the element just before the
    /// removed one is yielded again by the next forward step.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if no step was taken since the last mutation,
    /// [`Error::ConcurrentModification`] if `list` changed behind the cursor,
    /// [`Error::ForeignList`] if `list` is not the cursor's list.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// let mut cursor = list.cursor_at(3).unwrap();
    /// assert_eq!(cursor.previous(&list), Ok(&3));
    /// assert_eq!(cursor.remove(&mut list), Ok(3));
    /// assert_eq!(cursor.next_index(), 1);
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// ```
    pub fn remove(&mut self, list: &mut List<T>) -> Result<T> {
        self.check(list)?;
        let at = self.last_yielded()?;
        let value = list.remove(at)?;
        match self.last {
            Step::Forward => self.index = at,
            _ => self.index = self.index.saturating_sub(1),
        }
        self.resync(list);
        Ok(value)
    }

    /// Replace the element the last step yielded. The layout of the list is
    /// unchanged, but the step is consumed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if no step was taken since the last mutation,
    /// [`Error::ConcurrentModification`] if `list` changed behind the cursor,
    /// [`Error::ForeignList`] if `list` is not the cursor's list.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor();
    /// cursor.next(&list).unwrap();
    /// cursor.set(&mut list, 10).unwrap();
    /// assert_eq!(list.to_vec(), vec![10, 2, 3]);
    /// assert_eq!(cursor.set(&mut list, 11), Err(Error::InvalidState));
    /// ```
    pub fn set(&mut self, list: &mut List<T>, value: T) -> Result<()> {
        self.check(list)?;
        let at = self.last_yielded()?;
        list.replace(at, value.clone())?;
        self.snapshot[at] = value;
        self.generation = list.generation();
        self.last = Step::None;
        Ok(())
    }

    /// Insert an element at the cursor position, through [`List::insert`].
    /// The cursor ends up after the inserted element, and the element does
    /// not count as yielded.
    ///
    /// At the end of the list the insert goes through [`List::append`], which
    /// ignores a value already present; the cursor then stays put.
    ///
    /// # Errors
    ///
    /// [`Error::ConcurrentModification`] if `list` changed behind the cursor,
    /// [`Error::ForeignList`] if `list` is not the cursor's list.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let mut cursor = list.cursor_at(1).unwrap();
    /// cursor.insert(&mut list, 2).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(cursor.next(&list), Ok(&3));
    /// ```
    pub fn insert(&mut self, list: &mut List<T>, value: T) -> Result<()>
    where
        T: PartialEq,
    {
        self.check(list)?;
        let len = list.len();
        list.insert(self.index, value)?;
        if list.len() > len {
            self.index += 1;
        }
        self.resync(list);
        Ok(())
    }
}
