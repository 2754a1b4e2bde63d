//! Shared helpers for alphabet indexing and permutation tables.

pub mod alphabet;
