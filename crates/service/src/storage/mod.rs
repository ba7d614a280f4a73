//! Storage abstractions for service layer
//!
//! Contains reusable file-backed stores that keep a small collection in
//! memory and mirror it to a JSON file.

pub mod json_vec_store;
