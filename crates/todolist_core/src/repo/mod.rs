//! Persistence layer for the in-memory item collection.
//!
//! # Responsibility
//! - Hold the ordered item sequence and its identifier-based upsert rules.
//! - Serialize the whole collection to one file blob and reload it.
//!
//! # Invariants
//! - A failed `load` leaves the in-memory sequence untouched.
//! - Persistence uses the full item codec, never the compact one.

pub mod file_cache;
