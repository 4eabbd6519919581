use crate::list::List;
use std::fmt;

/// A printable dump of the node chain of a [`List`], showing every slot of
/// every node.
///
/// Each node renders as a parenthesised group, with `-` for an empty slot.
/// An optional cursor position is marked with `| ` before the element at that
/// position, or ` |` after the last element when it equals the length.
///
/// The format is meant for debugging and tests only; it may change.
///
/// # Examples
///
/// ```
/// use unrolled_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([5, 3, 8, 1]);
/// list.insert(2, 9).unwrap();
/// assert_eq!(list.layout().to_string(), "[(5, 3, 9, -), (8, 1, -, -)]");
/// assert_eq!(
///     list.layout().with_cursor(3).to_string(),
///     "[(5, 3, 9, -), (| 8, 1, -, -)]"
/// );
/// assert_eq!(
///     list.layout().with_cursor(5).to_string(),
///     "[(5, 3, 9, -), (8, 1 |, -, -)]"
/// );
/// ```
pub struct Layout<'a, T> {
    list: &'a List<T>,
    cursor: Option<usize>,
}

impl<'a, T> Layout<'a, T> {
    /// Mark the cursor position `index` in the dump. Positions past the end
    /// of the list are not shown.
    pub fn with_cursor(self, index: usize) -> Self {
        Self {
            cursor: Some(index),
            ..self
        }
    }
}

impl<'a, T: fmt::Display> fmt::Display for Layout<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.list.len();
        let mut seen = 0;
        f.write_str("[")?;
        for (i, idx) in self.list.node_indices().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            for (offset, slot) in self.list.node(idx).slots().iter().enumerate() {
                if offset > 0 {
                    f.write_str(", ")?;
                }
                match slot {
                    None => f.write_str("-")?,
                    Some(value) => {
                        if self.cursor == Some(seen) {
                            f.write_str("| ")?;
                        }
                        write!(f, "{}", value)?;
                        seen += 1;
                        if seen == len && self.cursor == Some(len) {
                            f.write_str(" |")?;
                        }
                    }
                }
            }
            f.write_str(")")?;
        }
        f.write_str("]")
    }
}

impl<T> List<T> {
    /// Provides a [`Layout`] dump of the node chain.
    pub fn layout(&self) -> Layout<'_, T> {
        Layout {
            list: self,
            cursor: None,
        }
    }
}
