use alloc::vec::Vec;
use core::{
    array, cmp, fmt,
    hash::{Hash, Hasher},
    iter::{Chain, Take},
    mem, slice,
};

use crate::error::{Error, report};
use crate::probe::{Clearable, Consumable, Eraseable, Iterable, Readable, ReadableIterPair};

/// Where a logical index lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Inline(usize),
    Overflow(usize),
}

impl Slot {
    /// Translates a logical index for a container with `inline_capacity` inline slots.
    #[inline(always)]
    pub(crate) const fn locate(index: usize, inline_capacity: usize) -> Self {
        if index < inline_capacity {
            Self::Inline(index)
        } else {
            Self::Overflow(index - inline_capacity)
        }
    }
}

/// A vector whose first `N` elements live inline, with the rest spilled to the heap.
///
/// The container is split into two regions that share one logical length:
///
/// - an inline `[T; N]` holding positions `0..N`,
/// - an overflow [`Vec<T>`] holding positions `N..`.
///
/// As long as `len() <= N` nothing is allocated. Pushing past `N` appends to the
/// overflow region; popping back below `N` moves values out of the inline
/// slots and puts `T::default()` back, so no removed value lingers in the
/// container.
///
/// Unlike [`Vec`], the storage is not contiguous. Use [`as_slices`](HybridVec::as_slices)
/// to borrow both regions, or index it like any other sequence.
///
/// # Example
///
/// ```
/// use hybridvec::HybridVec;
///
/// let mut vec: HybridVec<&'static str, 2> = HybridVec::new();
/// assert_eq!(vec.capacity(), 2);
///
/// vec.push("Hello");
/// vec.push("world");
/// assert!(!vec.spilled());
///
/// // The third element goes to the heap.
/// vec.push("again");
/// assert!(vec.spilled());
/// assert_eq!(vec.as_slices(), (&["Hello", "world"][..], &["again"][..]));
///
/// assert_eq!(vec.pop(), Ok("again"));
/// assert_eq!(vec, ["Hello", "world"]);
/// ```
#[derive(Clone)]
pub struct HybridVec<T, const N: usize> {
    len: usize,
    inline: [T; N],
    overflow: Vec<T>,
}

/// Creates a [`HybridVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
/// Elements beyond the inline capacity are stored on the heap.
///
/// # Examples
///
/// ```
/// # use hybridvec::{hybridvec, HybridVec};
/// let vec: HybridVec<String, 4> = hybridvec![];
/// let vec: HybridVec<i64, 4> = hybridvec![1; 5]; // Need to support Clone.
/// let vec: HybridVec<_, 4> = hybridvec![1, 2, 3];
/// ```
#[macro_export]
macro_rules! hybridvec {
    [] => { $crate::HybridVec::new() };
    [$elem:expr; $n:expr] => { $crate::HybridVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::HybridVec::from_buf([ $($item),+ ]) };
}

impl<T, const N: usize> HybridVec<T, N> {
    /// Number of inline slots.
    pub const INLINE_CAPACITY: usize = N;

    /// Returns the number of elements in the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec};
    /// let vec: HybridVec<i32, 2> = hybridvec![1, 2, 3];
    /// assert_eq!(vec.len(), 3);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the vector can hold without reallocating.
    ///
    /// This is `N` plus the capacity of the overflow region, which may be larger
    /// than its length after a [`reserve`](HybridVec::reserve).
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let mut vec: HybridVec<u8, 4> = HybridVec::new();
    /// assert_eq!(vec.capacity(), 4);
    ///
    /// vec.reserve(10);
    /// assert!(vec.capacity() >= 10);
    /// assert_eq!(vec.len(), 0);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        N + self.overflow.capacity()
    }

    /// Return `true` if any element is stored in the overflow region.
    #[inline(always)]
    pub const fn spilled(&self) -> bool {
        self.len > N
    }

    /// Number of elements stored inline.
    #[inline(always)]
    pub const fn inline_len(&self) -> usize {
        if self.len < N { self.len } else { N }
    }

    /// Number of elements stored in the overflow region.
    #[inline(always)]
    pub const fn overflow_len(&self) -> usize {
        self.len.saturating_sub(N)
    }

    /// Reserves room for at least `request` elements in total.
    ///
    /// Requests up to `N` are always satisfied by the inline region and do nothing.
    /// Larger requests grow the overflow region to hold at least `request - N`
    /// elements. Capacity is never reduced and existing elements are not touched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let mut vec: HybridVec<u32, 8> = HybridVec::new();
    /// vec.reserve(5);
    /// assert_eq!(vec.capacity(), 8);
    ///
    /// vec.reserve(100);
    /// assert!(vec.capacity() >= 100);
    /// ```
    pub fn reserve(&mut self, request: usize) {
        if request <= N {
            return;
        }
        let wanted = request - N;
        if wanted > self.overflow.capacity() {
            log::trace!(
                "HybridVec {:#x}: growing overflow capacity {} -> {}",
                self.addr(),
                self.overflow.capacity(),
                wanted
            );
            self.overflow.reserve(wanted - self.overflow.len());
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec, Error};
    /// let vec: HybridVec<i32, 2> = hybridvec![10, 20, 30];
    /// assert_eq!(vec.get(2), Ok(&30));
    /// assert!(matches!(vec.get(3), Err(Error::OutOfRange { index: 3, len: 3, .. })));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.check_index(index)?;
        Ok(self.slot_ref(Slot::locate(index, N)))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.check_index(index)?;
        Ok(self.slot_mut(Slot::locate(index, N)))
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        match self.len {
            0 => None,
            _ => Some(self.slot_ref(Slot::locate(0, N))),
        }
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        match self.len {
            0 => None,
            len => Some(self.slot_ref(Slot::locate(len - 1, N))),
        }
    }

    /// Appends an element to the back of the vector.
    ///
    /// The element is written into the next inline slot while there is one,
    /// and appended to the overflow region otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let mut vec: HybridVec<i32, 1> = HybridVec::new();
    /// vec.push(1);
    /// vec.push(2);
    /// assert_eq!(vec.inline_len(), 1);
    /// assert_eq!(vec.overflow_len(), 1);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        match Slot::locate(self.len, N) {
            Slot::Inline(index) => self.inline[index] = value,
            Slot::Overflow(_) => {
                if self.overflow.capacity() == 0 {
                    log::trace!(
                        "HybridVec {:#x}: spilling past {} inline slots",
                        self.addr(),
                        N
                    );
                }
                self.overflow.push(value);
            }
        }
        self.len += 1;
    }

    /// Appends a clone of `value`.
    #[inline]
    pub fn push_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push(value.clone());
    }

    /// Builds an element from `args` and appends it, returning a reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// #[derive(Default, Debug, PartialEq)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// impl From<(i32, i32)> for Point {
    ///     fn from((x, y): (i32, i32)) -> Self { Point { x, y } }
    /// }
    ///
    /// let mut vec: HybridVec<Point, 1> = HybridVec::new();
    /// vec.emplace((1, 2));
    /// vec.emplace((3, 4)).x = 5;
    /// assert_eq!(vec[1], Point { x: 5, y: 4 });
    /// ```
    #[inline]
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        A: Into<T>,
    {
        self.push_with(|| args.into())
    }

    /// Appends the value returned by `f`, returning a reference to it.
    #[inline]
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        let slot = Slot::locate(self.len, N);
        self.push(f());
        self.slot_mut(slot)
    }

    /// Borrows the live inline elements and the overflow region.
    ///
    /// The first slice is empty only when the vector is empty; the second is
    /// empty until the vector spills.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        (&self.inline[..self.inline_len()], self.overflow.as_slice())
    }

    /// Mutably borrows the live inline elements and the overflow region.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let live = self.inline_len();
        (&mut self.inline[..live], self.overflow.as_mut_slice())
    }

    /// Visits the elements in logical order.
    #[inline]
    pub fn iter(&self) -> Chain<slice::Iter<'_, T>, slice::Iter<'_, T>> {
        let (inline, overflow) = self.as_slices();
        inline.iter().chain(overflow)
    }

    /// Visits the elements mutably in logical order.
    #[inline]
    pub fn iter_mut(&mut self) -> Chain<slice::IterMut<'_, T>, slice::IterMut<'_, T>> {
        let (inline, overflow) = self.as_mut_slices();
        inline.iter_mut().chain(overflow)
    }

    #[inline(always)]
    fn slot_ref(&self, slot: Slot) -> &T {
        match slot {
            Slot::Inline(index) => &self.inline[index],
            Slot::Overflow(index) => &self.overflow[index],
        }
    }

    #[inline(always)]
    fn slot_mut(&mut self, slot: Slot) -> &mut T {
        match slot {
            Slot::Inline(index) => &mut self.inline[index],
            Slot::Overflow(index) => &mut self.overflow[index],
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.len {
            Ok(())
        } else {
            Err(report(Error::OutOfRange {
                index,
                len: self.len,
                container: self.addr(),
            }))
        }
    }

    #[inline(always)]
    fn addr(&self) -> usize {
        (self as *const Self).addr()
    }
}

impl<T: Default, const N: usize> HybridVec<T, N> {
    /// Constructs a new, empty `HybridVec`.
    ///
    /// All `N` inline slots are filled with `T::default()`; nothing is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let vec: HybridVec<String, 8> = HybridVec::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            len: 0,
            inline: array::from_fn(|_| T::default()),
            overflow: Vec::new(),
        }
    }

    /// Constructs a new, empty `HybridVec` with room for at least `capacity` elements.
    ///
    /// If `capacity <= N` this is equal to [`new`](HybridVec::new).
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vec = Self::new();
        vec.reserve(capacity);
        vec
    }

    /// Creates a `HybridVec` from an array.
    ///
    /// Elements past `N` are moved into the overflow region.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::HybridVec;
    /// let vec: HybridVec<i32, 2> = HybridVec::from_buf([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// assert!(vec.spilled());
    /// ```
    #[inline]
    pub fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        let mut vec = Self::with_capacity(P);
        vec.extend(arr);
        vec
    }

    /// Creates a `HybridVec` holding `num` clones of `elem`.
    pub fn from_elem(elem: T, num: usize) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(num);
        for _ in 0..num {
            vec.push_cloned(&elem);
        }
        vec
    }

    /// Copies the elements from `begin` up to `end`.
    ///
    /// Any pair whose first half is an iterator comparable with the second half
    /// qualifies, see [`ReadableIterPair`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{HybridVec, probe::Cursor};
    /// let data = [1i32, 2, 3, 4, 5];
    /// let vec: HybridVec<i64, 2> = HybridVec::from_iter_pair(Cursor::begin(&data), Cursor::at(&data, 4));
    /// assert_eq!(vec, [1, 2, 3, 4]);
    ///
    /// let vec: HybridVec<u64, 2> = HybridVec::from_iter_pair(0u8..3, 3u8..3);
    /// assert_eq!(vec, [0, 1, 2]);
    /// ```
    pub fn from_iter_pair<B, E>(begin: B, end: E) -> Self
    where
        (B, E): ReadableIterPair<T>,
    {
        let mut vec = Self::new();
        vec.extend(<(B, E) as ReadableIterPair<T>>::read_range((begin, end)));
        vec
    }

    /// Copies every element of `src`, converting each into `T`.
    ///
    /// `src` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let src = vec!["a", "b", "c"];
    /// let vec: HybridVec<String, 2> = HybridVec::from_readable(&src);
    /// assert_eq!(vec, ["a", "b", "c"]);
    /// assert_eq!(src.len(), 3);
    /// ```
    ///
    /// A source that cannot be iterated has no matching constructor:
    ///
    /// ```compile_fail
    /// # use hybridvec::HybridVec;
    /// let vec = HybridVec::<u8, 2>::from_readable(&42u32);
    /// ```
    pub fn from_readable<S>(src: &S) -> Self
    where
        S: Readable<T> + ?Sized,
    {
        let mut vec = Self::new();
        vec.reserve(src.item_count());
        vec.extend(<S as Readable<T>>::read_items(src));
        vec
    }

    /// Moves every element out of `src`, converting each into `T`, then clears `src`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let mut src = vec![String::from("a"), String::from("b"), String::from("c")];
    /// let vec: HybridVec<String, 2> = HybridVec::from_consumable(&mut src);
    /// assert_eq!(vec.len(), 3);
    /// assert!(src.is_empty());
    /// ```
    ///
    /// Arrays can be read but not cleared, so they are only accepted by
    /// [`from_readable`](HybridVec::from_readable):
    ///
    /// ```compile_fail
    /// # use hybridvec::HybridVec;
    /// let vec = HybridVec::<u8, 2>::from_consumable(&mut [1u8, 2]);
    /// ```
    pub fn from_consumable<S>(src: &mut S) -> Self
    where
        S: Eraseable<T> + ?Sized,
    {
        let mut vec = Self::new();
        vec.reserve(src.item_count());
        vec.extend(<S as Eraseable<T>>::erase_items(src));
        src.clear();
        vec
    }

    /// Copies another `HybridVec`, possibly of a different element type and inline capacity.
    ///
    /// Elements are placed according to this vector's boundary, not the source's:
    /// an element stored in the source's overflow region may land inline here
    /// and the other way round.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec};
    /// let small: HybridVec<i32, 2> = hybridvec![1, 2, 3, 4, 5];
    /// assert!(small.spilled());
    ///
    /// let wide: HybridVec<i64, 8> = HybridVec::from_hybrid(&small);
    /// assert!(!wide.spilled());
    /// assert_eq!(wide, [1, 2, 3, 4, 5]);
    /// ```
    ///
    /// The source element type must convert into `T`:
    ///
    /// ```compile_fail
    /// # use hybridvec::HybridVec;
    /// let vec = HybridVec::<u8, 2>::from_hybrid(&HybridVec::<u64, 2>::new());
    /// ```
    pub fn from_hybrid<U, const M: usize>(other: &HybridVec<U, M>) -> Self
    where
        U: Clone + Into<T>,
    {
        let mut vec = Self::new();
        vec.reserve(other.len());
        vec.extend(other.iter().map(|item| -> T { item.clone().into() }));
        vec
    }

    /// Moves the elements of another `HybridVec` into a new one, then clears the source.
    ///
    /// Placement follows this vector's boundary, as in [`from_hybrid`](HybridVec::from_hybrid).
    pub fn from_hybrid_moved<U, const M: usize>(other: &mut HybridVec<U, M>) -> Self
    where
        U: Default + Into<T>,
    {
        let mut vec = Self::new();
        vec.reserve(other.len());
        vec.extend(other.take_items().map(Into::<T>::into));
        other.clear();
        vec
    }

    /// Removes every element.
    ///
    /// Live inline slots are overwritten with `T::default()`, dropping their
    /// values. The overflow region keeps its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<i32, 2> = hybridvec![1, 2, 3];
    /// let capacity = vec.capacity();
    ///
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        let live = self.inline_len();
        self.len = 0;
        for slot in &mut self.inline[..live] {
            *slot = T::default();
        }
        self.overflow.clear();
    }

    /// Removes the last element and returns it.
    ///
    /// An inline slot is reset to `T::default()` once its value is moved out.
    ///
    /// # Errors
    /// [`Error::Empty`] if there is nothing to remove. The vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{HybridVec, Error};
    /// let mut vec: HybridVec<i32, 4> = HybridVec::new();
    /// vec.push(1);
    /// assert_eq!(vec.pop(), Ok(1));
    /// assert!(matches!(vec.pop(), Err(Error::Empty { .. })));
    /// ```
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(report(Error::Empty {
                container: self.addr(),
            }));
        }
        self.len -= 1;
        match Slot::locate(self.len, N) {
            Slot::Inline(index) => Ok(mem::take(&mut self.inline[index])),
            Slot::Overflow(_) => match self.overflow.pop() {
                Some(value) => Ok(value),
                None => unreachable!("overflow region shorter than logical length"),
            },
        }
    }
}

impl<T: Default, const N: usize> Default for HybridVec<T, N> {
    /// It's eq to [`HybridVec::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Iterable for HybridVec<T, N> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        HybridVec::iter(self)
    }

    #[inline]
    fn item_count(&self) -> usize {
        self.len
    }
}

impl<T: Default, const N: usize> Clearable for HybridVec<T, N> {
    #[inline]
    fn clear(&mut self) {
        HybridVec::clear(self);
    }
}

impl<T: Default, const N: usize> Consumable for HybridVec<T, N> {
    /// The inline region is swapped for a fresh default-filled one up front,
    /// so the vector is empty even if the iterator is dropped early.
    fn take_items(&mut self) -> impl Iterator<Item = T> {
        let live = self.inline_len();
        self.len = 0;
        let inline = mem::replace(&mut self.inline, array::from_fn(|_| T::default()));
        inline.into_iter().take(live).chain(self.overflow.drain(..))
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for HybridVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, const N: usize> Hash for HybridVec<T, N> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T, const N: usize> core::ops::Index<usize> for HybridVec<T, N> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= len()`, with the [`Error::OutOfRange`] message.
    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> core::ops::IndexMut<usize> for HybridVec<T, N> {
    /// # Panics
    /// Panics if `index >= len()`, with the [`Error::OutOfRange`] message.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<HybridVec<U, M>> for HybridVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &HybridVec<U, M>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for HybridVec<T, N> {}

crate::utils::impl_seq_eq! {
    [] [U],
    [] &[U],
    [] &mut [U],
    [] Vec<U>,
    [const P: usize] [U; P],
    [const P: usize] &[U; P],
}

impl<T: PartialOrd, const N: usize> PartialOrd for HybridVec<T, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const N: usize> Ord for HybridVec<T, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, const N: usize> Extend<T> for HybridVec<T, N> {
    /// Extends a collection with the contents of an iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let mut vec: HybridVec<i32, 2> = HybridVec::new();
    /// vec.extend([1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.len.saturating_add(iter.size_hint().0));
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: 'a + Clone, const N: usize> Extend<&'a T> for HybridVec<T, N> {
    /// Clone values from iterators.
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Default, const N: usize> FromIterator<T> for HybridVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Default, const N: usize, const P: usize> From<[T; P]> for HybridVec<T, N> {
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T: Default, const N: usize> From<Vec<T>> for HybridVec<T, N> {
    #[inline]
    fn from(mut value: Vec<T>) -> Self {
        Self::from_consumable(&mut value)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a HybridVec<T, N> {
    type Item = &'a T;
    type IntoIter = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut HybridVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = Chain<slice::IterMut<'a, T>, slice::IterMut<'a, T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for HybridVec<T, N> {
    type Item = T;
    type IntoIter = Chain<Take<array::IntoIter<T, N>>, alloc::vec::IntoIter<T>>;

    /// Consumes the vector, yielding its elements by value.
    ///
    /// The unused default-filled inline slots are dropped with the iterator.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let live = self.inline_len();
        self.inline.into_iter().take(live).chain(self.overflow)
    }
}
