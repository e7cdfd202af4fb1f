//! Capability predicates for generic construction.
//!
//! A source type is classified by the traits it implements:
//!
//! | Predicate | Requires |
//! |-----------|----------|
//! | [`Iterable`] | elements can be visited by reference, count is known |
//! | [`Clearable`] | the container can be emptied in place |
//! | [`Consumable`] | [`Iterable`] + [`Clearable`], elements can be moved out |
//! | [`Readable<V>`] | [`Iterable`] whose items clone and convert into `V` |
//! | [`Eraseable<V>`] | [`Consumable`] whose items convert into `V` by move |
//! | [`ReadableIterPair<V>`] | a `(begin, end)` pair whose items convert into `V` |
//!
//! `Readable`, `Eraseable` and `ReadableIterPair` are implemented automatically.
//! They exist so that [`HybridVec`](crate::HybridVec) constructors can name a single
//! bound; a type that satisfies none of them is rejected by the compiler.
//!
//! ```
//! # use hybridvec::HybridVec;
//! use std::collections::VecDeque;
//!
//! let mut queue: VecDeque<u8> = VecDeque::from([1, 2, 3]);
//!
//! // Readable: copied, source untouched.
//! let copied: HybridVec<u32, 2> = HybridVec::from_readable(&queue);
//! assert_eq!(queue.len(), 3);
//!
//! // Eraseable: moved, source left empty.
//! let moved: HybridVec<u32, 2> = HybridVec::from_consumable(&mut queue);
//! assert!(queue.is_empty());
//! assert_eq!(copied, moved);
//! ```

use alloc::collections::{BTreeSet, LinkedList, VecDeque};
use alloc::vec::Vec;
use core::{iter::FusedIterator, mem, ptr};

/// A container whose elements can be visited by shared reference.
///
/// Exhaustion of [`items`](Iterable::items) plays the role of the
/// begin/end inequality test.
pub trait Iterable {
    /// Element type stored by the container.
    type Item;

    /// Visits every element in order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// Number of elements [`items`](Iterable::items) will yield.
    fn item_count(&self) -> usize;
}

/// A container that can be emptied in place.
pub trait Clearable {
    /// Removes every element.
    fn clear(&mut self);
}

/// A container whose elements can be moved out.
pub trait Consumable: Iterable + Clearable {
    /// Moves every element out in order.
    ///
    /// The container is empty once the returned iterator is dropped,
    /// whether or not it was run to completion.
    fn take_items(&mut self) -> impl Iterator<Item = Self::Item>;
}

/// An [`Iterable`] whose elements can be copied into `V`.
pub trait Readable<V>: Iterable {
    /// Yields a converted copy of every element.
    fn read_items(&self) -> impl Iterator<Item = V>;
}

impl<C, V> Readable<V> for C
where
    C: Iterable + ?Sized,
    C::Item: Clone + Into<V>,
{
    #[inline]
    fn read_items(&self) -> impl Iterator<Item = V> {
        self.items().map(|item| item.clone().into())
    }
}

/// A [`Consumable`] whose elements can be moved into `V`.
pub trait Eraseable<V>: Consumable {
    /// Moves every element out, converted into `V`.
    fn erase_items(&mut self) -> impl Iterator<Item = V>;
}

impl<C, V> Eraseable<V> for C
where
    C: Consumable + ?Sized,
    C::Item: Into<V>,
{
    #[inline]
    fn erase_items(&mut self) -> impl Iterator<Item = V> {
        self.take_items().map(Into::into)
    }
}

/// A `(begin, end)` pair that reads elements convertible into `V`.
///
/// `begin` is advanced until it compares equal to `end`. The two halves may
/// be different types as long as `begin != end` is a valid test.
///
/// ```
/// # use hybridvec::probe::{Cursor, ReadableIterPair};
/// let data = [10i32, 20, 30, 40];
/// let read: Vec<i64> = (Cursor::begin(&data), Cursor::at(&data, 3)).read_range().collect();
/// assert_eq!(read, [10, 20, 30]);
///
/// let read: Vec<u64> = (2u32..5, 5u32..5).read_range().collect();
/// assert_eq!(read, [2, 3, 4]);
/// ```
pub trait ReadableIterPair<V> {
    /// Yields converted elements from `begin` up to (excluding) `end`.
    fn read_range(self) -> impl Iterator<Item = V>;
}

impl<B, E, V> ReadableIterPair<V> for (B, E)
where
    B: Iterator + PartialEq<E>,
    B::Item: Into<V>,
{
    fn read_range(self) -> impl Iterator<Item = V> {
        let (mut begin, end) = self;
        core::iter::from_fn(move || {
            if begin != end {
                begin.next().map(Into::into)
            } else {
                None
            }
        })
    }
}

/// A position inside a slice, usable as either half of an iterator pair.
///
/// Advancing yields a clone of the element under the cursor. Two cursors are
/// equal when they point into the same buffer at the same position.
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// A cursor at the first element.
    #[inline]
    pub const fn begin(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// A cursor one past the last element.
    #[inline]
    pub const fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// A cursor at `pos`, clamped to the end of the slice.
    #[inline]
    pub const fn at(slice: &'a [T], pos: usize) -> Self {
        let pos = if pos < slice.len() { pos } else { slice.len() };
        Self { slice, pos }
    }

    /// The `(begin, end)` pair covering the whole slice.
    #[inline]
    pub const fn pair(slice: &'a [T]) -> (Self, Self) {
        (Self::begin(slice), Self::end(slice))
    }

    /// Current position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> core::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T: Clone> Iterator for Cursor<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let item = self.slice.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.slice.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<T: Clone> ExactSizeIterator for Cursor<'_, T> {}

impl<T: Clone> FusedIterator for Cursor<'_, T> {}

impl<T> Iterable for [T] {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }

    #[inline]
    fn item_count(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Iterable for [T; N] {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    #[inline]
    fn item_count(&self) -> usize {
        N
    }
}

impl<T> Iterable for Vec<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    #[inline]
    fn item_count(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Clearable for Vec<T> {
    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> Consumable for Vec<T> {
    #[inline]
    fn take_items(&mut self) -> impl Iterator<Item = T> {
        self.drain(..)
    }
}

impl<T> Iterable for VecDeque<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }

    #[inline]
    fn item_count(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Clearable for VecDeque<T> {
    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

impl<T> Consumable for VecDeque<T> {
    #[inline]
    fn take_items(&mut self) -> impl Iterator<Item = T> {
        self.drain(..)
    }
}

impl<T> Iterable for LinkedList<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        LinkedList::iter(self)
    }

    #[inline]
    fn item_count(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Clearable for LinkedList<T> {
    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self);
    }
}

impl<T> Consumable for LinkedList<T> {
    #[inline]
    fn take_items(&mut self) -> impl Iterator<Item = T> {
        mem::take(self).into_iter()
    }
}

impl<T> Iterable for BTreeSet<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }

    #[inline]
    fn item_count(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<T> Clearable for BTreeSet<T> {
    #[inline]
    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}

impl<T> Consumable for BTreeSet<T> {
    #[inline]
    fn take_items(&mut self) -> impl Iterator<Item = T> {
        mem::take(self).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    fn is_readable<S: Readable<V> + ?Sized, V>() -> bool {
        true
    }

    fn is_eraseable<S: Eraseable<V> + ?Sized, V>() -> bool {
        true
    }

    #[test]
    fn std_containers_satisfy_predicates() {
        assert!(is_readable::<[u8], u32>());
        assert!(is_readable::<[u8; 4], u64>());
        assert!(is_readable::<Vec<&str>, String>());
        assert!(is_readable::<BTreeSet<u16>, i32>());

        assert!(is_eraseable::<Vec<String>, String>());
        assert!(is_eraseable::<VecDeque<u8>, u16>());
        assert!(is_eraseable::<LinkedList<u8>, u8>());
        assert!(is_eraseable::<BTreeSet<u8>, u64>());
    }

    #[test]
    fn read_items_converts_and_leaves_source() {
        let src: Vec<u8> = vec![1, 2, 3];
        let read: Vec<u32> = src.read_items().collect();
        assert_eq!(read, [1, 2, 3]);
        assert_eq!(src, [1, 2, 3]);
    }

    #[test]
    fn erase_items_empties_source_even_when_dropped_early() {
        let mut src: Vec<u8> = vec![1, 2, 3, 4];
        let first: Vec<u32> = src.erase_items().take(2).collect();
        assert_eq!(first, [1, 2]);
        assert!(src.is_empty());

        let mut list: LinkedList<u8> = [5, 6].into_iter().collect();
        let moved: Vec<u8> = list.erase_items().collect();
        assert_eq!(moved, [5, 6]);
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_pair_stops_at_end() {
        let data = [1, 2, 3, 4, 5];
        let (begin, end) = Cursor::pair(&data);
        let all: Vec<i32> = (begin, end).read_range().collect();
        assert_eq!(all, data);

        let part: Vec<i32> = (Cursor::at(&data, 1), Cursor::at(&data, 3))
            .read_range()
            .collect();
        assert_eq!(part, [2, 3]);

        let none: Vec<i32> = (Cursor::end(&data), Cursor::end(&data)).read_range().collect();
        assert!(none.is_empty());
    }

    #[test]
    fn cursors_over_different_buffers_never_meet() {
        let a = [1, 2];
        let b = [1, 2];
        assert_ne!(Cursor::end(&a), Cursor::end(&b));
        assert_eq!(Cursor::at(&a, 9), Cursor::end(&a));
    }

    #[test]
    fn range_pair_reads_until_equal() {
        let read: Vec<i64> = (0i32..4, 4i32..4).read_range().collect();
        assert_eq!(read, [0, 1, 2, 3]);
    }
}
