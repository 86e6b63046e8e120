use core::any::TypeId;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// OpaqueType

/// Runtime identifier of a type that must not be traversed structurally.
///
/// Identity is the [`TypeId`] alone, the type name is carried for
/// diagnostics only. Two `OpaqueType` compare equal exactly when they
/// describe the same Rust type, regardless of how they were created.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use rql_encoding::opaque::OpaqueType;
///
/// struct Marker;
///
/// let ty = OpaqueType::of::<Marker>();
/// assert_eq!(ty.id(), TypeId::of::<Marker>());
/// assert!(ty.name().ends_with("Marker"));
/// assert_eq!(ty, OpaqueType::of::<Marker>());
/// assert_ne!(ty, OpaqueType::of::<u8>());
/// ```
#[derive(Clone, Copy)]
pub struct OpaqueType {
    id: TypeId,
    name: &'static str,
}

impl OpaqueType {
    /// Create the identifier of type `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Create the identifier of the referenced value's type.
    #[inline]
    pub fn of_val<T: ?Sized + 'static>(_: &T) -> Self {
        Self::of::<T>()
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type name, as given by [`core::any::type_name`].
    ///
    /// The format of this string is not stable, never use it as a key.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this identifies type `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for OpaqueType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OpaqueType {}

// Must agree with `TypeId`'s own hash, `Borrow<TypeId>` lookups rely on it.
impl Hash for OpaqueType {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Borrow<TypeId> for OpaqueType {
    #[inline]
    fn borrow(&self) -> &TypeId {
        &self.id
    }
}

impl From<OpaqueType> for TypeId {
    #[inline]
    fn from(value: OpaqueType) -> Self {
        value.id
    }
}

impl fmt::Debug for OpaqueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueType").field(&self.name).finish()
    }
}

impl fmt::Display for OpaqueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// -----------------------------------------------------------------------------
// Tests
