//! Items used by exported macros, not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::opaque::{OpaqueRegistry, OpaqueType};

    /// One static declaration, applied to a registry on demand.
    pub struct __AutoRegisterFunc(pub fn(&mut OpaqueRegistry));

    /// Always submitted by this crate, its presence proves that
    /// static collection works on the current platform.
    pub struct __AvailFlag;

    inventory::collect!(__AutoRegisterFunc);
    inventory::collect!(__AvailFlag);

    inventory::submit! { __AvailFlag }

    pub fn __register<T: ?Sized + 'static>(registry: &mut OpaqueRegistry) {
        registry.insert_silent(OpaqueType::of::<T>());
    }

    pub(crate) fn register_submitted(registry: &mut OpaqueRegistry) -> bool {
        let mut available = false;
        for _ in inventory::iter::<__AvailFlag> {
            available = true;
        }
        if !available {
            return false;
        }
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
        true
    }
}
