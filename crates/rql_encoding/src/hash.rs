//! Hashing for containers keyed by `TypeId`.
//!
//! A `TypeId` is already a well distributed 64-bit value, so the hasher
//! keeps the last `u64` it is given instead of mixing it again.

use core::hash::{BuildHasher, Hasher};

// -----------------------------------------------------------------------------
// TypeIdHasher

/// Hasher that returns the `u64` written into it.
///
/// `TypeId` hashes itself with a single `write_u64`. Other writes fold their
/// bytes in, so a lone `write_u32(n)` finishes with the same value as
/// `write_u64(n)` on little-endian targets.
#[derive(Copy, Clone, Default, Debug)]
pub struct TypeIdHasher {
    hash: u64,
}

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        self.hash = bytes
            .iter()
            .rev()
            .fold(self.hash, |acc, byte| acc.rotate_left(8).wrapping_add(u64::from(*byte)));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`TypeIdHasher`].
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use core::hash::BuildHasher;
/// use rql_encoding::hash::TypeIdHashState;
///
/// assert_eq!(TypeIdHashState.hash_one(3_u64), 3);
/// assert_ne!(
///     TypeIdHashState.hash_one(TypeId::of::<u8>()),
///     TypeIdHashState.hash_one(TypeId::of::<i8>()),
/// );
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct TypeIdHashState;

impl BuildHasher for TypeIdHashState {
    type Hasher = TypeIdHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        TypeIdHasher::default()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::hash::BuildHasher;

    use super::TypeIdHashState;

    #[test]
    fn write_u64_is_identity() {
        assert_eq!(TypeIdHashState.hash_one(1234_u64), 1234);
        assert_eq!(TypeIdHashState.hash_one(0_u64), 0);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn narrow_writes_fold_to_same_value() {
        assert_eq!(
            TypeIdHashState.hash_one(1234_u32),
            TypeIdHashState.hash_one(1234_u64)
        );
    }

    #[test]
    fn type_ids_stay_distinct() {
        assert_ne!(
            TypeIdHashState.hash_one(TypeId::of::<u8>()),
            TypeIdHashState.hash_one(TypeId::of::<i8>())
        );
    }
}
