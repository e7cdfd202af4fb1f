//! Error types for [`HybridVec`](crate::HybridVec).
//!
//! Both kinds carry the address of the container that raised them, so a
//! failure can be tied back to one instance when several are alive.

use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`HybridVec`](crate::HybridVec).
///
/// Every checked operation validates before it mutates: when one of these is
/// returned, the container is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index was not below the logical length.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The logical length at the time of the request.
        len: usize,
        /// Address of the container.
        container: usize,
    },
    /// An element was removed from an empty container.
    Empty {
        /// Address of the container.
        container: usize,
    },
}

impl Error {
    /// Address of the container that raised the error.
    #[inline]
    pub const fn container(&self) -> usize {
        match *self {
            Self::OutOfRange { container, .. } | Self::Empty { container } => container,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutOfRange {
                index,
                len,
                container,
            } => write!(
                f,
                "index out of range: (index) {index} >= (len) {len}, (container) {container:#x}"
            ),
            Self::Empty { container } => {
                write!(f, "HybridVec is empty, (container) {container:#x}")
            }
        }
    }
}

impl CoreError for Error {}

/// Records `err` before it leaves the container.
///
/// All failures funnel through here so there is a single place to hook.
#[cold]
#[inline(never)]
pub(crate) fn report(err: Error) -> Error {
    log::debug!("{err}");
    err
}

#[cfg(test)]
mod tests {
    use super::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn out_of_range_message_names_index_len_and_container() {
        let err = Error::OutOfRange {
            index: 7,
            len: 3,
            container: 0x1000,
        };
        let s = takes_error(&err);
        assert!(s.contains("(index) 7"));
        assert!(s.contains("(len) 3"));
        assert!(s.contains("0x1000"));
        assert_eq!(err.container(), 0x1000);
    }

    #[test]
    fn empty_message_names_container() {
        let err = Error::Empty { container: 0xbeef };
        assert_eq!(err.to_string(), "HybridVec is empty, (container) 0xbeef");
        assert_eq!(err.container(), 0xbeef);
    }
}
