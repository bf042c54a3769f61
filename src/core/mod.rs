//! Core library components.
//!
//! The record engine: ciphers, the versioned envelope, the record tree and
//! the path and search operations over it.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod database;
pub mod envelope;
pub mod path;
pub mod search;
pub mod store;
pub mod tree;
