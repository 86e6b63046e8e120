use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::PoisonError;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::opaque::{OpaqueType, TypeSet};

// -----------------------------------------------------------------------------
// OpaqueRegistry

/// A registry of opaque types.
///
/// An encoder that walks values field by field consults this registry before
/// traversing a type. Registered types are never looked into, the encoder
/// falls back to the type's own marshal logic instead.
///
/// The registry is insert-only: registering is additive and idempotent,
/// queries are total.
///
/// # Example
///
/// ```
/// use rql_encoding::opaque::OpaqueRegistry;
///
/// struct Marker;
/// struct Other;
///
/// let mut registry = OpaqueRegistry::empty();
/// assert!(!registry.is_opaque::<Marker>());
///
/// registry.register::<Marker>();
/// assert!(registry.is_opaque::<Marker>());
/// assert!(!registry.is_opaque::<Other>());
/// ```
#[derive(Clone, Default)]
pub struct OpaqueRegistry {
    types: TypeSet,
}

impl OpaqueRegistry {
    /// Create an empty [`OpaqueRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            types: TypeSet::new(),
        }
    }

    /// Create a registry from a declared list of opaque types.
    ///
    /// # Example
    ///
    /// ```
    /// use rql_encoding::opaque::{OpaqueRegistry, OpaqueType};
    ///
    /// struct Handle;
    ///
    /// let registry = OpaqueRegistry::from_types([OpaqueType::of::<Handle>()]);
    /// assert!(registry.is_opaque::<Handle>());
    /// ```
    pub fn from_types(types: impl IntoIterator<Item = OpaqueType>) -> Self {
        let mut registry = Self::empty();
        registry.extend(types);
        registry
    }

    /// Register type `T` as opaque.
    ///
    /// - Returns `true` if the type was newly registered.
    /// - Returns `false` if it was already registered, nothing changes.
    #[inline]
    pub fn register<T: ?Sized + 'static>(&mut self) -> bool {
        self.register_type(OpaqueType::of::<T>())
    }

    /// Register the referenced value's type as opaque.
    ///
    /// See [`register`](Self::register) for more details.
    #[inline]
    pub fn register_by_val<T: ?Sized + 'static>(&mut self, _: &T) -> bool {
        self.register::<T>()
    }

    /// Register a runtime type identifier as opaque.
    ///
    /// See [`register`](Self::register) for more details.
    pub fn register_type(&mut self, ty: OpaqueType) -> bool {
        if self.insert_silent(ty) {
            log::debug!("Registered opaque type `{ty}`.");
            true
        } else {
            log::trace!("Opaque type `{ty}` is already registered.");
            false
        }
    }

    // Used where logging could re-enter the process-wide registry.
    #[inline]
    pub(crate) fn insert_silent(&mut self, ty: OpaqueType) -> bool {
        self.types.insert(ty)
    }

    /// Applies every `submit_opaque!` declaration linked into the binary.
    ///
    /// This method registers each declared type like [`register`](Self::register),
    /// without logging each one. Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if static registration works on the current platform; otherwise, `false`.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it always
    /// does nothing and returns `false`.
    ///
    /// ## Platform Support
    ///
    /// Supported platforms include Linux, macOS, Windows, iOS, Android, and Web, enabled by
    /// the `inventory` crate. On unsupported platforms, this method becomes a no-op.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::register_submitted(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Whether type `T` has been registered as opaque.
    #[inline]
    pub fn is_opaque<T: ?Sized + 'static>(&self) -> bool {
        self.types.contains_type::<T>()
    }

    /// Whether the type with given [`TypeId`] has been registered as opaque.
    #[inline]
    pub fn is_opaque_id(&self, type_id: TypeId) -> bool {
        self.types.contains(&type_id)
    }

    /// Returns the registered identifier for the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&OpaqueType> {
        self.types.get(&type_id)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns an iterator over the registered types.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &OpaqueType> {
        self.types.iter()
    }
}

impl Extend<OpaqueType> for OpaqueRegistry {
    fn extend<I: IntoIterator<Item = OpaqueType>>(&mut self, iter: I) {
        for ty in iter {
            self.register_type(ty);
        }
    }
}

impl FromIterator<OpaqueType> for OpaqueRegistry {
    #[inline]
    fn from_iter<I: IntoIterator<Item = OpaqueType>>(iter: I) -> Self {
        Self::from_types(iter)
    }
}

impl fmt::Debug for OpaqueRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueRegistry")
            .field("types", &self.types)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// OpaqueRegistryArc

/// A shared [`OpaqueRegistry`] guarded by a read-write lock.
///
/// Writers are serialized against readers. Poisoning is ignored, an
/// insert-only set is never observed in a partial state.
#[derive(Clone, Default)]
pub struct OpaqueRegistryArc {
    /// The wrapped [`OpaqueRegistry`].
    pub internal: Arc<RwLock<OpaqueRegistry>>,
}

impl OpaqueRegistryArc {
    /// Wrap an already populated registry.
    #[inline]
    pub fn new(registry: OpaqueRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// Takes a read lock on the underlying [`OpaqueRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, OpaqueRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`OpaqueRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, OpaqueRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for OpaqueRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.read().types, f)
    }
}

// -----------------------------------------------------------------------------
// Tests
