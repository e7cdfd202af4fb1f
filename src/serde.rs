use crate::HybridVec;
use core::marker::PhantomData;
use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

/// Upper bound on the overflow bytes reserved from an untrusted length hint.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

/// Overflow slots to reserve for `wanted` elements past the inline region.
#[inline]
fn overflow_prealloc<T>(wanted: usize) -> usize {
    wanted.min(MAX_PREALLOC_BYTES / core::mem::size_of::<T>().max(1))
}

impl<T: Serialize, const N: usize> Serialize for HybridVec<T, N> {
    /// Serialize a `HybridVec` as a sequence.
    ///
    /// The format does not depend on where the elements are stored.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de> + Default, const N: usize> Deserialize<'de> for HybridVec<T, N> {
    /// Deserialize a `HybridVec` from a sequence.
    ///
    /// Elements past `N` are stored in the overflow region.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HybridVecVisitor<T, const N: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de> + Default, const N: usize> Visitor<'de>
            for HybridVecVisitor<T, N>
        {
            type Value = HybridVec<T, N>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = HybridVec::new();
                if let Some(hint) = seq.size_hint() {
                    vec.reserve(N + overflow_prealloc::<T>(hint.saturating_sub(N)));
                }

                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(HybridVecVisitor {
            _marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_PREALLOC_BYTES, overflow_prealloc};
    use crate::{HybridVec, hybridvec};
    use alloc::string::String;
    use serde_core::Deserialize;
    use serde_core::de::value::{Error, SeqDeserializer};

    /// Yields `0..len` while claiming a far larger exact length.
    struct Overstated {
        next: u32,
        len: u32,
    }

    impl Iterator for Overstated {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            if self.next < self.len {
                self.next += 1;
                Some(self.next - 1)
            } else {
                None
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (1 << 60, Some(1 << 60))
        }
    }

    #[test]
    fn hybridvec_json() {
        let v: HybridVec<_, 2> = hybridvec![1, 2, 3];
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let r: HybridVec<i32, 2> = serde_json::from_str(&s).unwrap();
        assert_eq!(r, [1, 2, 3]);
        assert!(r.spilled());
    }

    #[test]
    fn hybridvec_json_into_wider_inline() {
        let r: HybridVec<String, 8> = serde_json::from_str(r#"["a","b","c"]"#).unwrap();
        assert_eq!(r, ["a", "b", "c"]);
        assert!(!r.spilled());
    }

    #[test]
    fn overstated_length_is_capped() {
        let de = SeqDeserializer::<_, Error>::new(Overstated { next: 0, len: 3 });
        let r = HybridVec::<u32, 2>::deserialize(de).unwrap();
        assert_eq!(r, [0, 1, 2]);
        assert!(r.capacity() <= 2 + MAX_PREALLOC_BYTES / 4);
    }

    #[test]
    fn short_sequences_stay_inline() {
        let de = SeqDeserializer::<_, Error>::new([7u32, 8].into_iter());
        let r = HybridVec::<u32, 4>::deserialize(de).unwrap();
        assert_eq!(r, [7, 8]);
        assert_eq!(r.capacity(), 4);
        assert_eq!(overflow_prealloc::<()>(usize::MAX), MAX_PREALLOC_BYTES);
    }

    #[test]
    fn hybridvec_json_rejects_non_sequence() {
        assert!(serde_json::from_str::<HybridVec<i32, 2>>("{}").is_err());
    }
}
