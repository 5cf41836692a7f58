//! Shared building blocks for the mortar crates: a byte cursor with JSON token helpers
//! and the generic JSON tree that the geometry codec reads and writes.

pub mod byte_iterator;
pub mod json;
