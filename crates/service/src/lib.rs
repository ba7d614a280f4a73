//! Service layer for reference values.
//! - `storage`: generic JSON-file-backed ordered collection.
//! - `values`: record model and the store trait handlers depend on.
//! - `file`: the file-backed implementation of that trait.
//! - `access`: static token allow-list.

pub mod errors;
pub mod storage;
pub mod values;
pub mod file;
pub mod access;
