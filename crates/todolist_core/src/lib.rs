//! Core domain logic for the to-do list.
//! This crate is the single source of truth for item codecs and persistence.

pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::compact::{format_date_time, parse_date_time, DATE_TIME_FORMAT};
pub use model::todo_item::{Importance, TodoItem};
pub use repo::file_cache::{CacheError, CacheResult, FileCache};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
