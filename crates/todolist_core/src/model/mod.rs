//! Domain model for to-do items.
//!
//! # Responsibility
//! - Define the canonical `TodoItem` record and its full persisted form.
//! - Provide the compact interchange codec layered over the full form.
//!
//! # Invariants
//! - Item identity is the `id` string; equality compares nothing else.
//! - The compact codec never preserves an explicit `ordinary` importance.

pub mod compact;
pub mod todo_item;
