//! Registry of types a structural encoder must not look into.
//!
//! ## Menu
//!
//! - [`OpaqueType`]: A runtime type identifier, compared by [`TypeId`](core::any::TypeId).
//! - [`TypeSet`]: A set of `OpaqueType` with O(1) lookup.
//! - [`OpaqueRegistry`]: An owned, insert-only registry. Can be injected into an [`Encoder`].
//! - [`OpaqueRegistryArc`]: A shared registry behind a read-write lock.
//! - [`register_opaque`] / [`is_opaque`]: The process-wide registry.
//! - [`submit_opaque`]: Declare a type opaque at link time.
//!
//! ## auto_register
//!
//! See [`OpaqueRegistry::auto_register`] .
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//!
//! If it is not supported, the process-wide registry starts empty and the
//! owner of an opaque type must register it explicitly during startup.
//!
//! [`Encoder`]: crate::encoder::Encoder
//! [`submit_opaque`]: crate::submit_opaque
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod global;
mod opaque_type;
mod registry;
mod type_set;

// -----------------------------------------------------------------------------
// Exports

pub use global::{global_registry, is_opaque, is_opaque_id};
pub use global::{register_opaque, register_opaque_type};
pub use opaque_type::OpaqueType;
pub use registry::{OpaqueRegistry, OpaqueRegistryArc};
pub use type_set::TypeSet;
