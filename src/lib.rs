//! ## Intro
//!
//! A vector that keeps its first `N` elements inline and spills the rest to the heap.
//!
//! Many workloads build sequences that almost always stay small, but must still
//! be able to grow without limit. [`HybridVec`] stores the first `N` elements in a
//! fixed `[T; N]` and only allocates once the `N + 1`-th element arrives; those
//! extra elements live in an ordinary [`Vec`], while the inline prefix stays put.
//!
//! ```
//! # use hybridvec::{HybridVec, hybridvec};
//! let mut vec: HybridVec<i32, 4> = hybridvec![1, 2, 3];
//! assert!(!vec.spilled()); // No heap allocation yet
//!
//! vec.extend([4, 5, 6]);
//! assert!(vec.spilled());   // 5 and 6 went to the heap
//! assert_eq!(vec.as_slices(), (&[1, 2, 3, 4][..], &[5, 6][..]));
//!
//! assert_eq!(vec[5], 6);
//! assert_eq!(vec.pop(), Ok(6));
//! ```
//!
//! ## Compared to a single-buffer small vector
//!
//! Spilling never moves the inline elements, so pushing past `N` costs one
//! ordinary heap push. The price is that the storage is split in two: there is
//! no single contiguous slice, and every element type must implement
//! [`Default`] because unused inline slots always hold a value. Slots are reset
//! to `T::default()` whenever an element is removed, so a popped or cleared
//! value is never kept alive by the container.
//!
//! ## Generic construction
//!
//! The [`probe`] module classifies source containers by capability:
//!
//! - [`HybridVec::from_readable`] copies from anything [`Readable`](probe::Readable),
//! - [`HybridVec::from_consumable`] moves out of anything [`Eraseable`](probe::Eraseable)
//!   and leaves it empty,
//! - [`HybridVec::from_iter_pair`] copies a `(begin, end)` pair,
//! - [`HybridVec::from_hybrid`] / [`HybridVec::from_hybrid_moved`] convert between
//!   element types and inline capacities.
//!
//! A source that fits none of them does not compile.
//!
//! ## Errors
//!
//! Checked access ([`HybridVec::get`]) and removal ([`HybridVec::pop`]) return
//! [`Error`], which records the index, length and container address. Failures
//! are also emitted through the [`log`] facade at `debug` level.
//!
//! ### Alias
//!
//! - [`SmallHybrid<T>`] = `HybridVec<T, 8>`
//! - [`WideHybrid<T>`] = `HybridVec<T, 16>`
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`, and contains no `unsafe` code.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled,
//! [`HybridVec`] implements the `serde::Serialize` and `serde::Deserialize` traits
//! as a plain sequence.
//!
//! [`Vec`]: alloc::vec::Vec
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod utils;

mod error;
pub mod probe;

pub mod hybrid_vec;

#[cfg(feature = "serde")]
mod serde;

pub use error::Error;

#[doc(inline)]
pub use hybrid_vec::HybridVec;

/// A `HybridVec` with 8 inline slots.
///
/// # Examples
///
/// ```
/// # use hybridvec::SmallHybrid;
/// let mut vec: SmallHybrid<u32> = SmallHybrid::new();
/// vec.extend(0..8);
/// assert!(!vec.spilled());
///
/// vec.push(8);
/// assert!(vec.spilled());
/// ```
pub type SmallHybrid<T> = HybridVec<T, 8>;

/// A `HybridVec` with 16 inline slots.
///
/// Suitable for sequences that frequently stay small but occasionally grow
/// larger, such as per-node child lists.
pub type WideHybrid<T> = HybridVec<T, 16>;
