use crate::HybridVec;

/// Element-wise equality between a [`HybridVec`] and a contiguous sequence.
#[inline]
pub(crate) fn seq_eq<T, U, const N: usize>(vec: &HybridVec<T, N>, other: &[U]) -> bool
where
    T: PartialEq<U>,
{
    let (inline, overflow) = vec.as_slices();
    vec.len() == other.len()
        && inline == &other[..inline.len()]
        && overflow == &other[inline.len()..]
}

/// Implements `PartialEq<Rhs> for HybridVec<T, N>` for sequence types that
/// index down to `[U]`.
///
/// Each entry is `[extra generics] Rhs`.
macro_rules! impl_seq_eq {
    ($([$($params:tt)*] $rhs:ty),+ $(,)?) => {
        $(
            impl<T, U, const N: usize, $($params)*> core::cmp::PartialEq<$rhs>
                for crate::HybridVec<T, N>
            where
                T: core::cmp::PartialEq<U>,
            {
                #[inline]
                fn eq(&self, other: &$rhs) -> bool {
                    crate::utils::seq_eq(self, &other[..])
                }
            }
        )+
    };
}

pub(crate) use impl_seq_eq;

#[cfg(test)]
mod tests {
    use crate::{HybridVec, hybridvec};

    #[test]
    fn seq_eq_splits_at_the_boundary() {
        let vec: HybridVec<i32, 2> = hybridvec![1, 2, 3];
        assert!(super::seq_eq(&vec, &[1, 2, 3]));
        assert!(!super::seq_eq(&vec, &[1, 2]));
        assert!(!super::seq_eq(&vec, &[1, 2, 4]));
        assert!(!super::seq_eq(&vec, &[1, 2, 3, 4]));
    }
}
