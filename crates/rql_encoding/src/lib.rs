#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// `submit_opaque!` expands to `$crate` paths, doc tests need the real name.
extern crate self as rql_encoding;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod encoder;
pub mod hash;
pub mod opaque;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::UnsupportedTypeError;

/// Declare types opaque at link time.
///
/// Declared types are registered in the process-wide registry before its
/// first use, no startup code is needed. See [`OpaqueRegistry::auto_register`].
///
/// Requires the `auto_register` feature, otherwise expands to nothing and the
/// types must be registered explicitly.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "auto_register")] {
/// use rql_encoding::{opaque::is_opaque, submit_opaque};
///
/// pub struct Query;
/// submit_opaque!(Query);
///
/// assert!(is_opaque::<Query>());
/// # }
/// ```
///
/// [`OpaqueRegistry::auto_register`]: crate::opaque::OpaqueRegistry::auto_register
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! submit_opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::__macro_exports::auto_register::inventory::submit! {
                $crate::__macro_exports::auto_register::__AutoRegisterFunc(
                    $crate::__macro_exports::auto_register::__register::<$ty>
                )
            }
        )+
    };
}

/// Declare types opaque at link time.
///
/// The `auto_register` feature is disabled, this expands to nothing.
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! submit_opaque {
    ($($ty:ty),+ $(,)?) => {};
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(all(test, feature = "auto_register"))]
mod tests {
    use crate::opaque::{OpaqueRegistry, is_opaque};

    struct Declared;
    struct Undeclared;

    crate::submit_opaque!(Declared);

    #[test]
    fn auto_register_applies_declarations() {
        let mut registry = OpaqueRegistry::empty();
        assert!(registry.auto_register());
        assert!(registry.is_opaque::<Declared>());
        assert!(!registry.is_opaque::<Undeclared>());

        let len = registry.len();
        assert!(registry.auto_register());
        assert_eq!(registry.len(), len);
    }

    #[test]
    fn declared_before_first_use() {
        assert!(is_opaque::<Declared>());
        assert!(!is_opaque::<Undeclared>());
    }
}
