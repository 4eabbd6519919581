use std::fmt;

/// Errors reported by [`List`](crate::List) and [`Cursor`](crate::Cursor).
///
/// Every error is raised before any mutation takes place, so a failed call
/// leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The node size given at construction is zero or odd.
    InvalidNodeSize(usize),
    /// A position lies outside the valid range of the operation.
    IndexOutOfBounds { index: usize, len: usize },
    /// A cursor mutation was attempted without a preceding step, or after the
    /// step was already consumed by `remove` or `set`.
    InvalidState,
    /// A cursor stepped past either end of the list.
    NoSuchElement,
    /// The list was modified through another path since the cursor last
    /// synchronised with it.
    ConcurrentModification { expected: u64, found: u64 },
    /// A cursor was handed a list other than the one it was created from.
    ForeignList,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNodeSize(size) => {
                write!(f, "node size must be a positive even number, got {}", size)
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for list of length {}", index, len)
            }
            Error::InvalidState => f.write_str("cursor has no element to act upon"),
            Error::NoSuchElement => f.write_str("cursor moved past the end of the list"),
            Error::ConcurrentModification { expected, found } => write!(
                f,
                "list was modified outside of the cursor (generation {} != {})",
                found, expected
            ),
            Error::ForeignList => f.write_str("cursor used with a list it does not belong to"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
