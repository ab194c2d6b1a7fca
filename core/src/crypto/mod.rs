//! # Hash Primitives
//!
//! Thin wrappers over `sha2`. We don't roll our own hashing; we only
//! name the two constructions the ledger uses.

pub mod hash;

pub use hash::{checksum4, double_sha256, sha256};
