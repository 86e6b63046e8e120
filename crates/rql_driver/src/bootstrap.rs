//! Registers the driver's types with the structural encoder.
//!
//! With the `auto_register` feature the registration is declared at link
//! time and applied before the encoder's registry is first read, callers
//! do nothing. Otherwise [`register_opaque_types`] must run during startup,
//! before anything is encoded.

use rql_encoding::opaque::{OpaqueType, register_opaque_type};

use crate::term::Term;

rql_encoding::submit_opaque!(Term);

/// Types this crate owns that encoders must not traverse.
///
/// `Term` carries its own wire form, see its `Serialize` implementation.
pub fn opaque_types() -> [OpaqueType; 1] {
    [OpaqueType::of::<Term>()]
}

/// Register [`opaque_types`] in the process-wide registry.
///
/// Needed only without the `auto_register` feature, or on platforms where
/// static registration is unsupported. Calling it again is a no-op.
pub fn register_opaque_types() {
    let types = opaque_types();
    for ty in types {
        register_opaque_type(ty);
    }
    log::debug!("Driver registered {} opaque type(s) explicitly.", types.len());
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use rql_encoding::encoder::{Encoder, Traversal};
    use rql_encoding::opaque::{OpaqueRegistry, global_registry, is_opaque};

    use super::{opaque_types, register_opaque_types};
    use crate::term::{Term, TermType};

    #[test]
    fn declared_list_contains_term() {
        let registry = OpaqueRegistry::from_types(opaque_types());
        assert!(registry.is_opaque::<Term>());
        assert!(!registry.is_opaque::<TermType>());
        assert_eq!(Encoder::new(&registry).traversal::<Term>(), Traversal::Opaque);
    }

    #[test]
    #[cfg(feature = "auto_register")]
    fn declared_at_link_time() {
        let mut registry = OpaqueRegistry::empty();
        assert!(registry.auto_register());
        assert!(registry.is_opaque::<Term>());
    }

    // Without static declarations, explicit registration is the only path.
    // Kept in one test: the global registry is shared by the whole binary.
    #[test]
    #[cfg(not(feature = "auto_register"))]
    fn explicit_registration() {
        assert!(!OpaqueRegistry::empty().auto_register());
        assert!(!is_opaque::<Term>());

        register_opaque_types();
        assert!(is_opaque::<Term>());

        let len = global_registry().read().len();
        register_opaque_types();
        assert_eq!(global_registry().read().len(), len);
        assert!(is_opaque::<Term>());
    }

    #[test]
    #[cfg(feature = "auto_register")]
    fn explicit_registration_after_declaration() {
        register_opaque_types();
        let len = global_registry().read().len();
        register_opaque_types();
        assert_eq!(global_registry().read().len(), len);
        assert!(is_opaque::<Term>());
    }
}
