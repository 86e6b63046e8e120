#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod bootstrap;

pub mod r;
pub mod term;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use bootstrap::{opaque_types, register_opaque_types};
pub use term::{Term, TermType};
