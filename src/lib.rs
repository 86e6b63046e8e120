#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use rql_driver as driver;
pub use rql_encoding as encoding;
