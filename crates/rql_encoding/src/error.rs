use thiserror::Error;

use crate::opaque::OpaqueType;

/// An error returned when a type cannot be traversed field by field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedTypeError {
    #[error("Type `{0}` is registered as opaque and cannot be traversed structurally")]
    Opaque(OpaqueType),
}

impl UnsupportedTypeError {
    /// The type that was rejected.
    #[inline]
    pub const fn ty(&self) -> OpaqueType {
        match self {
            Self::Opaque(ty) => *ty,
        }
    }
}
