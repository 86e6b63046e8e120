use core::any::TypeId;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::LazyLock;

use crate::opaque::{OpaqueRegistry, OpaqueRegistryArc, OpaqueType};

// -----------------------------------------------------------------------------
// Process-wide registry

struct Global {
    registry: OpaqueRegistryArc,
    declarations_applied: bool,
}

// The initializer must not log: a logger may itself query the registry.
static GLOBAL: LazyLock<Global> = LazyLock::new(|| {
    let mut registry = OpaqueRegistry::empty();
    let declarations_applied = registry.auto_register();
    Global {
        registry: OpaqueRegistryArc::new(registry),
        declarations_applied,
    }
});

static REPORTED: AtomicBool = AtomicBool::new(false);

fn global() -> &'static OpaqueRegistryArc {
    let global = &*GLOBAL;
    if !REPORTED.load(Ordering::Relaxed) && !REPORTED.swap(true, Ordering::Relaxed) {
        report_initialized(global);
    }
    &global.registry
}

fn report_initialized(global: &Global) {
    if global.declarations_applied {
        let len = global.registry.read().len();
        log::trace!("Opaque registry initialized with {len} declared type(s).");
    } else if cfg!(feature = "auto_register") {
        log::warn!(
            "Static opaque type declarations are unsupported on this platform, \
             register opaque types explicitly before encoding."
        );
    }
}

/// Returns the process-wide opaque registry.
///
/// The first access applies every `submit_opaque!` declaration (with the
/// `auto_register` feature), so declared types are visible to the very
/// first query made anywhere in the process.
#[inline]
pub fn global_registry() -> &'static OpaqueRegistryArc {
    global()
}

/// Register type `T` as opaque in the process-wide registry.
///
/// Registering the same type again is a no-op.
///
/// # Example
///
/// ```
/// use rql_encoding::opaque::{is_opaque, register_opaque};
///
/// struct Marker;
/// struct OtherType;
///
/// assert!(!is_opaque::<Marker>());
/// register_opaque::<Marker>();
/// assert!(is_opaque::<Marker>());
/// assert!(!is_opaque::<OtherType>());
/// ```
#[inline]
pub fn register_opaque<T: ?Sized + 'static>() {
    register_opaque_type(OpaqueType::of::<T>());
}

/// Register a runtime type identifier as opaque in the process-wide registry.
pub fn register_opaque_type(ty: OpaqueType) {
    let registry = global();
    // Skip the write lock for the common repeated case.
    let known = registry.read().is_opaque_id(ty.id());
    let inserted = !known && registry.write().insert_silent(ty);
    // Locks are released, a logger may query the registry.
    if inserted {
        log::debug!("Registered opaque type `{ty}`.");
    } else {
        log::trace!("Opaque type `{ty}` is already registered.");
    }
}

/// Whether type `T` is registered as opaque in the process-wide registry.
#[inline]
pub fn is_opaque<T: ?Sized + 'static>() -> bool {
    is_opaque_id(TypeId::of::<T>())
}

/// Whether the type with given [`TypeId`] is registered as opaque
/// in the process-wide registry.
#[inline]
pub fn is_opaque_id(type_id: TypeId) -> bool {
    global().read().is_opaque_id(type_id)
}

// -----------------------------------------------------------------------------
// Tests
