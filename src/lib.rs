//! This crate provides an unrolled linked list: a doubly-linked list whose
//! nodes each hold a small fixed-capacity array of elements.
//!
//! Packing several elements per node keeps the list cache friendly. Accessing
//! or mutating an element at a given position walks nodes rather than
//! elements, so it takes *O*(*n* / *M*) hops where *M* is the node size.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use unrolled_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([10, 20, 30, 40]);
//!
//! list.insert(1, 15).unwrap(); // the only node is full, so it is split
//! assert_eq!(list.layout().to_string(), "[(10, 15, 20, -), (30, 40, -, -)]");
//!
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.next(&list), Ok(&10));
//! assert_eq!(cursor.remove(&mut list), Ok(10));
//! assert_eq!(
//!     list.layout().with_cursor(cursor.next_index()).to_string(),
//!     "[(| 15, 20, -, -), (30, 40, -, -)]"
//! );
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    (Head) Node 0                                                 (Tail) Node 1
//!    ┌───────────┐    ╔═══════════╗                ╔═══════════╗    ┌───────────┐
//!    │   next    │ ─→ ║   next    ║ ─→ ┄┄┄┄┄┄ ─→   ║   next    ║ ─→ │   next    │
//!    ├───────────┤    ╟───────────╢                ╟───────────╢    ├───────────┤
//!    │   prev    │ ←─ ║   prev    ║ ←─ ┄┄┄┄┄┄ ←─   ║   prev    ║ ←─ │   prev    │
//!    ├───────────┤    ╟───────────╢                ╟───────────╢    ├───────────┤
//!    ┊ No slots  ┊    ║ count = 3 ║                ║ count = 1 ║    ┊ No slots  ┊
//!    └╌╌╌╌╌╌╌╌╌╌╌┘    ╟───┬───┬───╢                ╟───┬───┬───╢    └╌╌╌╌╌╌╌╌╌╌╌┘
//!                     ║ a │ b │ c ║ ...            ║ x │ - │ - ║
//!                     ╚═══╧═══╧═══╝                ╚═══╧═══╧═══╝
//! ```
//! All nodes live in one arena vector owned by the `List`, and links are arena
//! indices. The two sentinels sit at fixed indices and carry no slots. Nodes
//! released by merges go on a free list and are reused before the arena
//! grows.
//!
//! Every node in the chain holds between 1 and *M* elements in its leading
//! slots, and every node except the last holds at least *M* / 2 of them. The
//! node size *M* must be a positive even number; [`List::new`] uses
//! [`DEFAULT_NODE_SIZE`].
//!
//! # Splitting and Merging
//!
//! - Appending fills the last node and starts a new one when it is full.
//!   It never splits, and it refuses an element equal to one already in
//!   the list.
//! - Inserting into a full node first splits it: the upper half moves to a
//!   new node linked right after it.
//! - Removing from a node that was at most half full borrows the first
//!   element of the next node if that one is more than half full, and
//!   absorbs the next node entirely otherwise.
//!
//! Use [`List::node_lens`] or [`List::layout`] to look at the resulting node
//! structure.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IntoIter`] iterators. These
//! are double-ended, exact-size and fused.
//!
//! ## Examples
//!
//! ```
//! use unrolled_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] walks the list in both directions and can remove, replace or
//! insert elements where it stands. It does not hold a borrow of the list:
//! each call takes the list as an argument. A change made to the list by any
//! other path makes the cursor stale, and its next call fails with
//! [`Error::ConcurrentModification`]. Handing a cursor any list other than
//! the one it was created from fails with [`Error::ForeignList`].
//!
//! # Logging
//!
//! Structural events (splits, borrows, merges, sort rebuilds) are reported
//! through [`tracing`](https://docs.rs/tracing) at `trace` level, and rejected
//! operations at `debug` level. The library installs no subscriber. Disable
//! the default `tracing` feature to compile the instrumentation out:
//! ```text
//! [dependencies]
//! unrolled_list = { default-features = false }
//! ```

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::layout::Layout;
#[doc(inline)]
pub use list::{List, DEFAULT_NODE_SIZE};

pub mod error;
pub mod list;
