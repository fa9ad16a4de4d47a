//! One-pass traversal of a sequence by two cursors.
//!
//! [`tee`] splits a single-pass iterator into two [`Cursor`]s that both
//! yield every element in order while the underlying iterator is advanced
//! only once per element. Values pulled by the cursor that is ahead are held
//! until the cursor that is behind catches up.
//!
//! [`adjacent_pairs`] builds on this to walk a sequence as overlapping
//! `(x[i], x[i + 1])` windows without collecting it first.
//!
//! The cursors share state through `Rc<RefCell<_>>`, so they are confined
//! to one thread.

use std::{cell::RefCell, collections::VecDeque, iter::Fuse, rc::Rc};

/// Identifies one of the two cursors returned by [`tee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

struct Shared<I: Iterator> {
    source: Fuse<I>,
    /// Values already yielded by the leading cursor, oldest first.
    pending: VecDeque<I::Item>,
    /// The cursor that still has to consume `pending`.
    behind: Option<Side>,
}

/// One of two cursors over a shared single-pass iterator.
///
/// Created by [`tee`].
pub struct Cursor<I: Iterator> {
    shared: Rc<RefCell<Shared<I>>>,
    side: Side,
}

/// Splits an iterator into two cursors over the same sequence.
///
/// Each cursor yields every element of `iter` in order. The cursor that
/// falls behind reads from a buffer filled by the one ahead; when the two
/// stay at most one position apart the buffer never holds more than one
/// element. Exhaustion of `iter` ends both cursors.
///
/// # Example
///
/// ```
/// use radial_conduction::support::pairwise::tee;
///
/// let (mut a, mut b) = tee([1, 2, 3].into_iter());
///
/// assert_eq!(b.next(), Some(1));
/// assert_eq!(a.next(), Some(1));
/// assert_eq!(a.next(), Some(2));
/// assert_eq!(b.next(), Some(2));
/// assert_eq!(b.next(), Some(3));
/// assert_eq!(b.next(), None);
/// assert_eq!(a.next(), Some(3));
/// assert_eq!(a.next(), None);
/// ```
pub fn tee<I>(iter: I) -> (Cursor<I>, Cursor<I>)
where
    I: Iterator,
    I::Item: Clone,
{
    let shared = Rc::new(RefCell::new(Shared {
        source: iter.fuse(),
        pending: VecDeque::with_capacity(1),
        behind: None,
    }));

    (
        Cursor {
            shared: Rc::clone(&shared),
            side: Side::First,
        },
        Cursor {
            shared,
            side: Side::Second,
        },
    )
}

impl<I> Iterator for Cursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut shared = self.shared.borrow_mut();

        if shared.behind == Some(self.side) {
            if let Some(value) = shared.pending.pop_front() {
                return Some(value);
            }
        }

        let value = shared.source.next()?;
        if shared.pending.is_empty() {
            shared.behind = Some(self.side.other());
        }
        shared.pending.push_back(value.clone());
        Some(value)
    }
}

/// Yields each element paired with its successor.
///
/// A sequence of `m` elements produces `m - 1` pairs (none when `m < 2`),
/// reading `iter` exactly once.
///
/// # Example
///
/// ```
/// use radial_conduction::support::pairwise::adjacent_pairs;
///
/// let pairs: Vec<_> = adjacent_pairs([1.0, 3.0, 7.0]).collect();
/// assert_eq!(pairs, vec![(1.0, 3.0), (3.0, 7.0)]);
/// ```
pub fn adjacent_pairs<I>(iter: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let (current, mut next) = tee(iter.into_iter());
    next.next();
    current.zip(next)
}
