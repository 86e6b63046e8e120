use core::any::TypeId;
use core::fmt::Debug;

use hashbrown::HashSet;

use crate::hash::TypeIdHashState;
use crate::opaque::OpaqueType;

// -----------------------------------------------------------------------------
// TypeSet

/// A set of [`OpaqueType`] keyed by [`TypeId`].
///
/// The current implementation uses hashbrown's [`HashSet`] with
/// [`TypeIdHashState`], membership tests are O(1).
///
/// The container exposes no [`HashSet`] specific APIs.
pub struct TypeSet(HashSet<OpaqueType, TypeIdHashState>);

impl TypeSet {
    /// Creates an empty `TypeSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rql_encoding::opaque::TypeSet;
    /// let set = TypeSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(HashSet::with_hasher(TypeIdHashState))
    }

    /// Adds a type to the set.
    ///
    /// - Returns `true` if the type was not present.
    /// - Returns `false` if the type already exists, leaving the set unchanged.
    #[inline]
    pub fn insert(&mut self, ty: OpaqueType) -> bool {
        self.0.insert(ty)
    }

    /// Returns `true` if the set contains the type with the given [`TypeId`].
    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains(type_id)
    }

    /// Returns `true` if the set contains type `T`.
    #[inline(always)]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.contains(&TypeId::of::<T>())
    }

    /// Returns the stored identifier with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&OpaqueType> {
        self.0.get(type_id)
    }

    /// Returns the number of types in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set contains no types.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An iterator visiting all types in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &OpaqueType> {
        self.0.iter()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl Default for TypeSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TypeSet {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Debug for TypeSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl Extend<OpaqueType> for TypeSet {
    fn extend<I: IntoIterator<Item = OpaqueType>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<OpaqueType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = OpaqueType>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

// -----------------------------------------------------------------------------
// Tests
