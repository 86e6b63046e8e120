//! The decision seam between a structural encoder and the opaque registry.
//!
//! The traversal algorithm itself lives in the encoder, these types only
//! answer "may I look inside this type".

use core::any::TypeId;

use crate::UnsupportedTypeError;
use crate::opaque::{OpaqueRegistry, OpaqueType, global_registry};

// -----------------------------------------------------------------------------
// Traversal

/// How an encoder must handle a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Walk the type's fields.
    Structural,
    /// Do not look inside, use the type's own marshal logic.
    Opaque,
}

impl Traversal {
    #[inline]
    const fn from_opaque(opaque: bool) -> Self {
        if opaque { Self::Opaque } else { Self::Structural }
    }

    /// Returns `true` for [`Traversal::Structural`].
    #[inline]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Structural)
    }
}

// -----------------------------------------------------------------------------
// Encoder

/// Traversal decisions backed by an injected [`OpaqueRegistry`].
///
/// # Example
///
/// ```
/// use rql_encoding::encoder::{Encoder, Traversal};
/// use rql_encoding::opaque::OpaqueRegistry;
///
/// struct Handle;
/// struct Point { x: i32, y: i32 }
///
/// let mut registry = OpaqueRegistry::empty();
/// registry.register::<Handle>();
///
/// let encoder = Encoder::new(&registry);
/// assert_eq!(encoder.traversal::<Handle>(), Traversal::Opaque);
/// assert_eq!(encoder.traversal::<Point>(), Traversal::Structural);
/// assert!(encoder.check_structural::<Handle>().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'r> {
    registry: &'r OpaqueRegistry,
}

impl<'r> Encoder<'r> {
    /// Create an encoder consulting `registry`.
    #[inline]
    pub const fn new(registry: &'r OpaqueRegistry) -> Self {
        Self { registry }
    }

    /// The registry this encoder consults.
    #[inline]
    pub const fn registry(&self) -> &'r OpaqueRegistry {
        self.registry
    }

    /// How type `T` must be handled.
    #[inline]
    pub fn traversal<T: ?Sized + 'static>(&self) -> Traversal {
        self.traversal_of(TypeId::of::<T>())
    }

    /// How the type with given [`TypeId`] must be handled.
    #[inline]
    pub fn traversal_of(&self, type_id: TypeId) -> Traversal {
        Traversal::from_opaque(self.registry.is_opaque_id(type_id))
    }

    /// Fails if type `T` is opaque.
    ///
    /// For encoders with no fallback to self-describing marshal logic.
    pub fn check_structural<T: ?Sized + 'static>(&self) -> Result<(), UnsupportedTypeError> {
        match self.traversal::<T>() {
            Traversal::Structural => Ok(()),
            Traversal::Opaque => Err(UnsupportedTypeError::Opaque(OpaqueType::of::<T>())),
        }
    }
}

// -----------------------------------------------------------------------------
// GlobalEncoder

/// Traversal decisions backed by the process-wide registry.
///
/// See [`global_registry`] for the initialization order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalEncoder;

impl GlobalEncoder {
    /// How type `T` must be handled.
    #[inline]
    pub fn traversal<T: ?Sized + 'static>(&self) -> Traversal {
        self.traversal_of(TypeId::of::<T>())
    }

    /// How the type with given [`TypeId`] must be handled.
    #[inline]
    pub fn traversal_of(&self, type_id: TypeId) -> Traversal {
        Traversal::from_opaque(crate::opaque::is_opaque_id(type_id))
    }

    /// Fails if type `T` is opaque.
    pub fn check_structural<T: ?Sized + 'static>(&self) -> Result<(), UnsupportedTypeError> {
        Encoder::new(&global_registry().read()).check_structural::<T>()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::any::TypeId;

    use super::{Encoder, GlobalEncoder, Traversal};
    use crate::UnsupportedTypeError;
    use crate::opaque::{OpaqueRegistry, OpaqueType, register_opaque};

    struct Handle;
    struct Plain;

    #[test]
    fn injected_registry() {
        let registry = OpaqueRegistry::from_types([OpaqueType::of::<Handle>()]);
        let encoder = Encoder::new(&registry);

        assert_eq!(encoder.traversal::<Handle>(), Traversal::Opaque);
        assert_eq!(encoder.traversal_of(TypeId::of::<Plain>()), Traversal::Structural);
        assert!(encoder.traversal::<Plain>().is_structural());
        assert!(encoder.check_structural::<Plain>().is_ok());
    }

    #[test]
    fn opaque_is_unsupported() {
        let registry = OpaqueRegistry::from_types([OpaqueType::of::<Handle>()]);
        let err = Encoder::new(&registry)
            .check_structural::<Handle>()
            .unwrap_err();

        assert_eq!(err, UnsupportedTypeError::Opaque(OpaqueType::of::<Handle>()));
        assert!(err.ty().is::<Handle>());
        assert!(err.to_string().contains("Handle"));
    }

    #[test]
    fn global_encoder() {
        struct GlobalHandle;

        assert!(GlobalEncoder.traversal::<GlobalHandle>().is_structural());
        register_opaque::<GlobalHandle>();
        assert_eq!(GlobalEncoder.traversal::<GlobalHandle>(), Traversal::Opaque);
        assert!(GlobalEncoder.check_structural::<GlobalHandle>().is_err());
        assert!(GlobalEncoder.check_structural::<Plain>().is_ok());
    }
}
